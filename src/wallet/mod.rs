mod address_entry;
mod catalog;

pub use address_entry::{AddressEntry, AddressEntryContext};
pub use catalog::{AddressEntryList, WalletAddressCatalog};

#[cfg(test)]
pub use catalog::MockWalletAddressCatalog;
