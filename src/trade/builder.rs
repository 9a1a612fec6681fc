use std::result::Result;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{Contract, Offer, PubKeyRing, Trade};
use crate::common::error::TradeUtilError;

pub struct ContractBuilder {
    is_buyer_maker_and_seller_taker: Option<bool>,
    maker_pub_key_ring: Option<PubKeyRing>,
    taker_pub_key_ring: Option<PubKeyRing>,
    buyer_multi_sig_pub_key: Option<Vec<u8>>,
    seller_multi_sig_pub_key: Option<Vec<u8>>,
    buyer_payout_address_string: Option<String>,
    seller_payout_address_string: Option<String>,
}

impl ContractBuilder {
    pub fn new() -> Self {
        Self {
            is_buyer_maker_and_seller_taker: None,
            maker_pub_key_ring: None,
            taker_pub_key_ring: None,
            buyer_multi_sig_pub_key: None,
            seller_multi_sig_pub_key: None,
            buyer_payout_address_string: None,
            seller_payout_address_string: None,
        }
    }

    pub fn is_buyer_maker_and_seller_taker(&mut self, flag: bool) -> &mut Self {
        self.is_buyer_maker_and_seller_taker = Some(flag);
        self
    }

    pub fn maker_pub_key_ring(&mut self, pub_key_ring: impl Into<PubKeyRing>) -> &mut Self {
        self.maker_pub_key_ring = Some(pub_key_ring.into());
        self
    }

    pub fn taker_pub_key_ring(&mut self, pub_key_ring: impl Into<PubKeyRing>) -> &mut Self {
        self.taker_pub_key_ring = Some(pub_key_ring.into());
        self
    }

    pub fn buyer_multi_sig_pub_key(&mut self, pub_key: impl Into<Vec<u8>>) -> &mut Self {
        self.buyer_multi_sig_pub_key = Some(pub_key.into());
        self
    }

    pub fn seller_multi_sig_pub_key(&mut self, pub_key: impl Into<Vec<u8>>) -> &mut Self {
        self.seller_multi_sig_pub_key = Some(pub_key.into());
        self
    }

    pub fn buyer_multi_sig_pub_key_hex(
        &mut self,
        pub_key_hex: impl AsRef<str>,
    ) -> Result<&mut Self, TradeUtilError> {
        self.buyer_multi_sig_pub_key = Some(hex::decode(pub_key_hex.as_ref())?);
        Ok(self)
    }

    pub fn seller_multi_sig_pub_key_hex(
        &mut self,
        pub_key_hex: impl AsRef<str>,
    ) -> Result<&mut Self, TradeUtilError> {
        self.seller_multi_sig_pub_key = Some(hex::decode(pub_key_hex.as_ref())?);
        Ok(self)
    }

    pub fn buyer_payout_address_string(&mut self, address: impl Into<String>) -> &mut Self {
        self.buyer_payout_address_string = Some(address.into());
        self
    }

    pub fn seller_payout_address_string(&mut self, address: impl Into<String>) -> &mut Self {
        self.seller_payout_address_string = Some(address.into());
        self
    }

    pub fn build(&self) -> Result<Contract, TradeUtilError> {
        let Some(is_buyer_maker_and_seller_taker) = self.is_buyer_maker_and_seller_taker else {
            return Err(TradeUtilError::Simple(
                "No Buyer/Seller to Maker/Taker mapping defined".to_string(),
            ));
        };

        let Some(maker_pub_key_ring) = self.maker_pub_key_ring else {
            return Err(TradeUtilError::Simple("No Maker PubKeyRing defined".to_string()));
        };

        let Some(taker_pub_key_ring) = self.taker_pub_key_ring else {
            return Err(TradeUtilError::Simple("No Taker PubKeyRing defined".to_string()));
        };

        let Some(buyer_payout_address_string) = self.buyer_payout_address_string.as_ref() else {
            return Err(TradeUtilError::Simple(
                "No Buyer payout address defined".to_string(),
            ));
        };

        let Some(seller_payout_address_string) = self.seller_payout_address_string.as_ref() else {
            return Err(TradeUtilError::Simple(
                "No Seller payout address defined".to_string(),
            ));
        };

        Ok(Contract {
            is_buyer_maker_and_seller_taker,
            maker_pub_key_ring,
            taker_pub_key_ring,
            buyer_multi_sig_pub_key: self.buyer_multi_sig_pub_key.to_owned(),
            seller_multi_sig_pub_key: self.seller_multi_sig_pub_key.to_owned(),
            buyer_payout_address_string: buyer_payout_address_string.to_owned(),
            seller_payout_address_string: seller_payout_address_string.to_owned(),
        })
    }
}

impl Default for ContractBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct TradeBuilder {
    trade_uuid: Option<Uuid>,
    contract: Option<Contract>,
    offer: Option<Offer>,
    max_trade_period_date: Option<DateTime<Utc>>,
    half_trade_period_date: Option<DateTime<Utc>>,
}

impl TradeBuilder {
    pub fn new() -> Self {
        Self {
            trade_uuid: None,
            contract: None,
            offer: None,
            max_trade_period_date: None,
            half_trade_period_date: None,
        }
    }

    pub fn trade_uuid(&mut self, trade_uuid: impl Into<Uuid>) -> &mut Self {
        self.trade_uuid = Some(trade_uuid.into());
        self
    }

    pub fn contract(&mut self, contract: impl Into<Contract>) -> &mut Self {
        self.contract = Some(contract.into());
        self
    }

    pub fn offer(&mut self, offer: impl Into<Offer>) -> &mut Self {
        self.offer = Some(offer.into());
        self
    }

    pub fn max_trade_period_date(&mut self, date: impl Into<DateTime<Utc>>) -> &mut Self {
        self.max_trade_period_date = Some(date.into());
        self
    }

    pub fn half_trade_period_date(&mut self, date: impl Into<DateTime<Utc>>) -> &mut Self {
        self.half_trade_period_date = Some(date.into());
        self
    }

    pub fn build(&self) -> Result<Trade, TradeUtilError> {
        let trade_uuid = if let Some(explicit_uuid) = self.trade_uuid.as_ref() {
            explicit_uuid.to_owned()
        } else {
            Uuid::new_v4()
        };

        Ok(Trade {
            trade_uuid,
            contract: self.contract.to_owned(),
            offer: self.offer.to_owned(),
            max_trade_period_date: self.max_trade_period_date,
            half_trade_period_date: self.half_trade_period_date,
        })
    }
}

impl Default for TradeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{SomeTestContractParams, SomeTestParams};

    #[test]
    fn contract_builder_build() {
        let result = SomeTestContractParams::default_builder().build();

        match result {
            Ok(contract) => {
                assert!(contract.is_buyer_maker_and_seller_taker);
                assert_eq!(
                    contract.maker_pub_key_ring,
                    SomeTestParams::maker_pub_key_ring()
                );
                assert_eq!(
                    contract.taker_pub_key_ring,
                    SomeTestParams::taker_pub_key_ring()
                );
                assert_eq!(
                    contract.buyer_payout_address_string,
                    SomeTestParams::buyer_payout_address()
                );
                assert_eq!(
                    contract.seller_payout_address_string,
                    SomeTestParams::seller_payout_address()
                );
            }
            Err(error) => {
                panic!("contract_builder_build failed on builder.build() - {}", error);
            }
        }
    }

    #[test]
    fn contract_builder_build_without_multi_sig_keys() {
        let mut builder = ContractBuilder::new();
        builder.is_buyer_maker_and_seller_taker(true);
        builder.maker_pub_key_ring(SomeTestParams::maker_pub_key_ring());
        builder.taker_pub_key_ring(SomeTestParams::taker_pub_key_ring());
        builder.buyer_payout_address_string(SomeTestParams::buyer_payout_address());
        builder.seller_payout_address_string(SomeTestParams::seller_payout_address());

        let contract = builder.build().unwrap();
        assert_eq!(contract.buyer_multi_sig_pub_key, None);
        assert_eq!(contract.seller_multi_sig_pub_key, None);
    }

    #[test]
    fn contract_builder_build_maker_pub_key_ring_missing() {
        let mut builder = ContractBuilder::new();
        builder.is_buyer_maker_and_seller_taker(true);
        builder.taker_pub_key_ring(SomeTestParams::taker_pub_key_ring());
        builder.buyer_payout_address_string(SomeTestParams::buyer_payout_address());
        builder.seller_payout_address_string(SomeTestParams::seller_payout_address());

        match builder.build() {
            Ok(_) => panic!("contract_builder_build should not result in Ok without a maker PubKeyRing"),
            Err(TradeUtilError::Simple(_)) => {}
            Err(error) => panic!("unexpected error kind - {}", error),
        }
    }

    #[test]
    fn contract_builder_build_payout_address_missing() {
        let mut builder = ContractBuilder::new();
        builder.is_buyer_maker_and_seller_taker(false);
        builder.maker_pub_key_ring(SomeTestParams::maker_pub_key_ring());
        builder.taker_pub_key_ring(SomeTestParams::taker_pub_key_ring());
        builder.buyer_payout_address_string(SomeTestParams::buyer_payout_address());

        assert!(builder.build().is_err());
    }

    #[test]
    fn contract_builder_accepts_hex_multi_sig_key() {
        let key_hex = hex::encode(SomeTestParams::buyer_multi_sig_pub_key().serialize());
        let mut builder = SomeTestContractParams::default_builder();
        builder.buyer_multi_sig_pub_key_hex(&key_hex).unwrap();

        let contract = builder.build().unwrap();
        assert_eq!(
            contract.buyer_multi_sig_pub_key,
            Some(SomeTestParams::buyer_multi_sig_pub_key().serialize().to_vec())
        );
    }

    #[test]
    fn contract_builder_rejects_bad_hex_multi_sig_key() {
        let mut builder = SomeTestContractParams::default_builder();
        match builder.seller_multi_sig_pub_key_hex("not-hex") {
            Err(TradeUtilError::HexDecoding(_)) => {}
            Err(error) => panic!("unexpected error kind - {}", error),
            Ok(_) => panic!("invalid hex should not be accepted"),
        }
    }

    #[test]
    fn trade_builder_build_empty_trade() {
        let trade = TradeBuilder::new().build().unwrap();
        assert!(trade.contract.is_none());
        assert!(trade.offer.is_none());
        assert!(trade.max_trade_period_date.is_none());
        assert!(trade.half_trade_period_date.is_none());
    }

    #[test]
    fn trade_builder_keeps_explicit_uuid() {
        let trade = TradeBuilder::new()
            .trade_uuid(SomeTestParams::some_uuid())
            .build()
            .unwrap();
        assert_eq!(trade.trade_uuid, SomeTestParams::some_uuid());
    }
}
