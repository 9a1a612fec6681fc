use secp256k1::PublicKey;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(
    PartialEq, Eq, Hash, Clone, Copy, Debug, Serialize, Deserialize, EnumString, Display,
)]
pub enum AddressEntryContext {
    Arbitrator,
    Available,
    OfferFunding,
    ReservedForTrade,
    MultiSig,
    TradePayout,
}

/// One wallet-tracked address with the key it was derived from.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct AddressEntry {
    pub address_string: String,
    pub pub_key: PublicKey,
    pub context: AddressEntryContext,
}

impl AddressEntry {
    pub fn new(
        address_string: impl Into<String>,
        pub_key: PublicKey,
        context: AddressEntryContext,
    ) -> Self {
        AddressEntry {
            address_string: address_string.into(),
            pub_key,
            context,
        }
    }

    /// Lowercase hex of the 33-byte compressed serialization.
    pub fn public_key_as_hex(&self) -> String {
        hex::encode(self.pub_key.serialize())
    }

    pub fn is_available(&self) -> bool {
        self.context == AddressEntryContext::Available
    }
}
