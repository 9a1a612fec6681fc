use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::trade::{KeyRing, Trade};
use crate::wallet::WalletAddressCatalog;

/// The escrow (multisig) and payout address of one side of a trade.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct TradeAddresses {
    pub multi_sig_address: String,
    pub payout_address: String,
}

impl From<TradeAddresses> for (String, String) {
    fn from(addresses: TradeAddresses) -> Self {
        (addresses.multi_sig_address, addresses.payout_address)
    }
}

/// Finds the wallet addresses the local identity uses in a trade.
#[derive(Clone)]
pub struct AddressResolver {
    wallet: Arc<dyn WalletAddressCatalog + Send + Sync>,
}

impl AddressResolver {
    pub fn new(wallet: Arc<dyn WalletAddressCatalog + Send + Sync>) -> Self {
        AddressResolver { wallet }
    }

    /// Multisig and payout address of our side of the trade, if the wallet
    /// knows both. The multisig entry is found by public key, the payout
    /// entry by address.
    pub fn trade_addresses(&self, trade: &Trade, key_ring: &KeyRing) -> Option<TradeAddresses> {
        let Some(contract) = trade.contract.as_ref() else {
            debug!("Trade {} has no Contract yet", trade.trade_uuid);
            return None;
        };

        let is_my_role_buyer = contract.is_my_role_buyer(key_ring.pub_key_ring());
        let Some(multi_sig_pub_key) = contract.multi_sig_pub_key_for(is_my_role_buyer) else {
            debug!(
                "Trade {} Contract has no multisig key for the {}",
                trade.trade_uuid,
                if is_my_role_buyer { "buyer" } else { "seller" }
            );
            return None;
        };

        let multi_sig_pub_key_string = hex::encode(multi_sig_pub_key);
        let all_entries = self.wallet.all_entries();

        let Some(multi_sig_entry) = all_entries
            .iter()
            .find(|e| e.public_key_as_hex() == multi_sig_pub_key_string)
        else {
            debug!(
                "Trade {} multisig key {} not found in wallet",
                trade.trade_uuid, multi_sig_pub_key_string
            );
            return None;
        };

        let payout_address = contract.payout_address_string_for(is_my_role_buyer);
        if !all_entries
            .iter()
            .any(|e| e.address_string == payout_address)
        {
            debug!(
                "Trade {} payout address {} not found in wallet",
                trade.trade_uuid, payout_address
            );
            return None;
        }

        Some(TradeAddresses {
            multi_sig_address: multi_sig_entry.address_string.to_owned(),
            payout_address: payout_address.to_string(),
        })
    }

    /// Same as [`Self::trade_addresses`], but only if both addresses are
    /// currently available in the wallet.
    pub fn available_addresses(
        &self,
        trade: &Trade,
        key_ring: &KeyRing,
    ) -> Option<TradeAddresses> {
        let addresses = self.trade_addresses(trade, key_ring)?;

        if !self
            .wallet
            .available_entries()
            .iter()
            .any(|e| e.address_string == addresses.multi_sig_address)
        {
            debug!(
                "Trade {} multisig address {} is not available",
                trade.trade_uuid, addresses.multi_sig_address
            );
            return None;
        }

        if !self
            .wallet
            .available_entries()
            .iter()
            .any(|e| e.address_string == addresses.payout_address)
        {
            debug!(
                "Trade {} payout address {} is not available",
                trade.trade_uuid, addresses.payout_address
            );
            return None;
        }

        Some(addresses)
    }
}
