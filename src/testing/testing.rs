use std::str::FromStr;

use chrono::{DateTime, Duration, TimeZone, Utc};
use secp256k1::{PublicKey, Secp256k1, SecretKey, XOnlyPublicKey};
use uuid::Uuid;

use crate::common::types::PaymentMethodId;
use crate::trade::*;
use crate::wallet::*;

pub struct SomeTestParams {}

impl SomeTestParams {
    pub fn some_uuid() -> Uuid {
        Uuid::from_str("20c38e4b-037b-4654-b99c-1d9f2beb755f").unwrap()
    }

    pub fn some_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    pub fn maker_pub_key_ring() -> PubKeyRing {
        PubKeyRing::new(Self::x_only_public_key_from_secret([0x11; 32]))
    }

    pub fn taker_pub_key_ring() -> PubKeyRing {
        PubKeyRing::new(Self::x_only_public_key_from_secret([0x22; 32]))
    }

    pub fn maker_key_ring() -> KeyRing {
        KeyRing::new(Self::maker_pub_key_ring())
    }

    pub fn taker_key_ring() -> KeyRing {
        KeyRing::new(Self::taker_pub_key_ring())
    }

    pub fn buyer_multi_sig_pub_key() -> PublicKey {
        PublicKey::from_str("02e6642fd69bd211f93f7f1f36ca51a26a5290eb2dd1b0d8279a87bb0d480c8443")
            .unwrap()
    }

    pub fn seller_multi_sig_pub_key() -> PublicKey {
        PublicKey::from_str("0218845781f631c48f1c9709e23092067d06837f30aa0cd0544ac887fe91ddd166")
            .unwrap()
    }

    pub fn unrelated_pub_key() -> PublicKey {
        let secp = Secp256k1::new();
        let secret_key = SecretKey::from_slice(&[0x33; 32]).unwrap();
        PublicKey::from_secret_key(&secp, &secret_key)
    }

    pub fn buyer_multi_sig_address() -> String {
        "1ABC".to_string()
    }

    pub fn seller_multi_sig_address() -> String {
        "1DEF".to_string()
    }

    pub fn buyer_payout_address() -> String {
        "1XYZ".to_string()
    }

    pub fn seller_payout_address() -> String {
        "1UVW".to_string()
    }

    /// Buyer side fully available, seller payout reserved for the trade.
    pub fn address_entries() -> Vec<AddressEntry> {
        vec![
            AddressEntry::new(
                "1QRS",
                Self::unrelated_pub_key(),
                AddressEntryContext::Arbitrator,
            ),
            AddressEntry::new(
                Self::buyer_multi_sig_address(),
                Self::buyer_multi_sig_pub_key(),
                AddressEntryContext::Available,
            ),
            AddressEntry::new(
                Self::seller_multi_sig_address(),
                Self::seller_multi_sig_pub_key(),
                AddressEntryContext::Available,
            ),
            AddressEntry::new(
                Self::buyer_payout_address(),
                Self::unrelated_pub_key(),
                AddressEntryContext::Available,
            ),
            AddressEntry::new(
                Self::seller_payout_address(),
                Self::unrelated_pub_key(),
                AddressEntryContext::TradePayout,
            ),
        ]
    }

    fn x_only_public_key_from_secret(secret: [u8; 32]) -> XOnlyPublicKey {
        let secp = Secp256k1::new();
        let secret_key = SecretKey::from_slice(&secret).unwrap();
        XOnlyPublicKey::from(PublicKey::from_secret_key(&secp, &secret_key))
    }
}

pub struct SomeTestContractParams {}

impl SomeTestContractParams {
    pub fn default_builder() -> ContractBuilder {
        let mut builder = ContractBuilder::new();
        builder.is_buyer_maker_and_seller_taker(true);
        builder.maker_pub_key_ring(SomeTestParams::maker_pub_key_ring());
        builder.taker_pub_key_ring(SomeTestParams::taker_pub_key_ring());
        builder.buyer_multi_sig_pub_key(SomeTestParams::buyer_multi_sig_pub_key().serialize());
        builder.seller_multi_sig_pub_key(SomeTestParams::seller_multi_sig_pub_key().serialize());
        builder.buyer_payout_address_string(SomeTestParams::buyer_payout_address());
        builder.seller_payout_address_string(SomeTestParams::seller_payout_address());
        builder
    }
}

pub struct SomeTestOfferParams {}

impl SomeTestOfferParams {
    pub fn max_trade_period() -> Duration {
        Duration::seconds(86400)
    }

    pub fn fiat_offer() -> Offer {
        Offer::new(
            "USD",
            PaymentMethod::new(PaymentMethodId::Zelle, Self::max_trade_period()),
        )
    }

    pub fn altcoin_offer() -> Offer {
        Offer::new("XMR", PaymentMethodId::Blockchains)
    }
}

pub struct SomeTestTradeParams {}

impl SomeTestTradeParams {
    pub fn default_builder() -> TradeBuilder {
        let mut builder = TradeBuilder::new();
        builder.trade_uuid(SomeTestParams::some_uuid());
        builder.contract(SomeTestContractParams::default_builder().build().unwrap());
        builder.offer(SomeTestOfferParams::fiat_offer());
        builder
    }
}
