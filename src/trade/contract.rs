use serde::{Deserialize, Serialize};

use super::PubKeyRing;

/// Terms both peers signed. Multisig keys stay `None` until signing completes.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct Contract {
    pub is_buyer_maker_and_seller_taker: bool,
    pub maker_pub_key_ring: PubKeyRing,
    pub taker_pub_key_ring: PubKeyRing,
    pub buyer_multi_sig_pub_key: Option<Vec<u8>>,
    pub seller_multi_sig_pub_key: Option<Vec<u8>>,
    pub buyer_payout_address_string: String,
    pub seller_payout_address_string: String,
}

impl Contract {
    pub fn buyer_pub_key_ring(&self) -> &PubKeyRing {
        if self.is_buyer_maker_and_seller_taker {
            &self.maker_pub_key_ring
        } else {
            &self.taker_pub_key_ring
        }
    }

    pub fn seller_pub_key_ring(&self) -> &PubKeyRing {
        if self.is_buyer_maker_and_seller_taker {
            &self.taker_pub_key_ring
        } else {
            &self.maker_pub_key_ring
        }
    }

    pub fn is_my_role_buyer(&self, my_pub_key_ring: &PubKeyRing) -> bool {
        self.buyer_pub_key_ring() == my_pub_key_ring
    }

    pub fn is_my_role_maker(&self, my_pub_key_ring: &PubKeyRing) -> bool {
        &self.maker_pub_key_ring == my_pub_key_ring
    }

    pub fn multi_sig_pub_key_for(&self, is_buyer: bool) -> Option<&[u8]> {
        if is_buyer {
            self.buyer_multi_sig_pub_key.as_deref()
        } else {
            self.seller_multi_sig_pub_key.as_deref()
        }
    }

    pub fn payout_address_string_for(&self, is_buyer: bool) -> &str {
        if is_buyer {
            &self.buyer_payout_address_string
        } else {
            &self.seller_payout_address_string
        }
    }
}
