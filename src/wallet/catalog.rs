use std::sync::RwLock;

use tracing::trace;

use super::AddressEntry;

/// Read-only view on the wallet's address entries. Both views keep the
/// wallet's own ordering.
#[cfg_attr(test, mockall::automock)]
pub trait WalletAddressCatalog {
    /// Every entry the wallet knows about.
    fn all_entries(&self) -> Vec<AddressEntry>;

    /// Entries that are currently usable.
    fn available_entries(&self) -> Vec<AddressEntry>;
}

/// In-memory catalog kept in insertion order.
#[derive(Debug, Default)]
pub struct AddressEntryList {
    entries: RwLock<Vec<AddressEntry>>,
}

impl AddressEntryList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = AddressEntry>) -> Self {
        AddressEntryList {
            entries: RwLock::new(entries.into_iter().collect()),
        }
    }

    pub fn add_entry(&self, entry: AddressEntry) {
        trace!(
            "Adding AddressEntry {} with context {}",
            entry.address_string,
            entry.context
        );
        self.write_entries().push(entry);
    }

    /// Removes every entry with the given address, returns how many were removed.
    pub fn remove_entry(&self, address_string: &str) -> usize {
        let mut entries = self.write_entries();
        let count_before = entries.len();
        entries.retain(|e| e.address_string != address_string);
        count_before - entries.len()
    }

    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }

    // A poisoned lock still holds a consistent Vec, every mutation is a single push or retain
    fn read_entries(&self) -> std::sync::RwLockReadGuard<'_, Vec<AddressEntry>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_entries(&self) -> std::sync::RwLockWriteGuard<'_, Vec<AddressEntry>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl WalletAddressCatalog for AddressEntryList {
    fn all_entries(&self) -> Vec<AddressEntry> {
        self.read_entries().clone()
    }

    fn available_entries(&self) -> Vec<AddressEntry> {
        self.read_entries()
            .iter()
            .filter(|e| e.is_available())
            .cloned()
            .collect()
    }
}
