//! System keychain property store
//!
//! Uses the OS keychain:
//! - macOS: Keychain
//! - Windows: Credential Manager
//! - Linux: Secret Service (GNOME Keyring, KWallet)

use std::collections::{BTreeMap, BTreeSet};

use keyring::Entry;

use super::traits::{PropertyStore, StorageError, StorageResult};
use crate::logging::file_logger as log;

/// Account name of the entry that lists every property this store wrote
const INDEX_ACCOUNT: &str = "__secret_service_index__";

/// Property store backed by the system keychain
///
/// Each property is one keychain entry under the service name. Keychains
/// cannot be enumerated, so the store also maintains an index entry holding a
/// JSON array of property names; `properties()` reads the index and then each
/// listed entry. Entries created outside this store are not enumerated.
///
/// # Example
///
/// ```no_run
/// use secret_service::{KeychainPropertyStore, PropertyStore};
///
/// let store = KeychainPropertyStore::new();
/// store.set_property("secret_service_token", "abc").unwrap();
/// assert!(store.get_property("secret_service_token").unwrap().is_some());
/// ```
pub struct KeychainPropertyStore {
    service_name: String,
}

impl KeychainPropertyStore {
    /// Keychain store with the default service name `secret-service`
    pub fn new() -> Self {
        Self::with_service("secret-service")
    }

    /// Keychain store with a custom service name
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service_name: service.into(),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Whether a keychain backend can be reached at all
    ///
    /// False on headless machines without a keychain daemon.
    pub fn is_available(&self) -> bool {
        match Entry::new(&self.service_name, INDEX_ACCOUNT) {
            Ok(_) => true,
            Err(e) => {
                log::warn("KeychainPropertyStore", &format!("keychain unavailable: {:?}", e));
                false
            }
        }
    }

    fn entry(&self, key: &str) -> StorageResult<Entry> {
        Entry::new(&self.service_name, key)
            .map_err(|e| StorageError::NotAvailable(format!("Failed to create keychain entry: {}", e)))
    }

    fn read_index(&self) -> StorageResult<BTreeSet<String>> {
        match self.entry(INDEX_ACCOUNT)?.get_password() {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|e| StorageError::Serialization(format!("Corrupt keychain index: {}", e))),
            Err(keyring::Error::NoEntry) => Ok(BTreeSet::new()),
            Err(e) => Err(StorageError::Other(format!("Failed to read keychain index: {}", e))),
        }
    }

    fn write_index(&self, index: &BTreeSet<String>) -> StorageResult<()> {
        let entry = self.entry(INDEX_ACCOUNT)?;
        if index.is_empty() {
            return match entry.delete_credential() {
                Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
                Err(e) => Err(StorageError::Other(format!("Failed to clear keychain index: {}", e))),
            };
        }

        let raw = serde_json::to_string(index)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        entry
            .set_password(&raw)
            .map_err(|e| StorageError::Other(format!("Failed to write keychain index: {}", e)))
    }
}

impl Default for KeychainPropertyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyStore for KeychainPropertyStore {
    fn name(&self) -> &str {
        "keychain"
    }

    fn get_property(&self, key: &str) -> StorageResult<Option<String>> {
        log::debug("KeychainPropertyStore", &format!("get_property('{}'), service='{}'", key, self.service_name));
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => {
                log::warn("KeychainPropertyStore", &format!("get_property('{}') error: {:?}", key, e));
                Err(StorageError::Other(format!("Failed to read '{}' from keychain: {}", key, e)))
            }
        }
    }

    fn set_property(&self, key: &str, value: &str) -> StorageResult<()> {
        log::info("KeychainPropertyStore", &format!("set_property('{}'), value len={}", key, value.len()));
        self.entry(key)?
            .set_password(value)
            .map_err(|e| StorageError::Other(format!("Failed to store in keychain: {}", e)))?;

        let mut index = self.read_index()?;
        if index.insert(key.to_string()) {
            self.write_index(&index)?;
        }
        Ok(())
    }

    fn delete_property(&self, key: &str) -> StorageResult<()> {
        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => {}
            Err(e) => {
                return Err(StorageError::Other(format!("Failed to delete from keychain: {}", e)));
            }
        }

        let mut index = self.read_index()?;
        if index.remove(key) {
            self.write_index(&index)?;
        }
        Ok(())
    }

    fn properties(&self) -> StorageResult<BTreeMap<String, String>> {
        let mut properties = BTreeMap::new();
        for key in self.read_index()? {
            // Indexed entries removed outside this store are skipped
            if let Some(value) = self.get_property(&key)? {
                properties.insert(key, value);
            }
        }
        Ok(properties)
    }
}

impl std::fmt::Debug for KeychainPropertyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeychainPropertyStore")
            .field("service_name", &self.service_name)
            .finish()
    }
}
