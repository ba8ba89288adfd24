//! In-memory property store

use std::collections::BTreeMap;

use parking_lot::RwLock;

use super::traits::{PropertyStore, StorageResult};

/// In-memory property store for testing and ephemeral use
///
/// Fully read-write. Properties are lost when the store is dropped.
///
/// # Example
///
/// ```
/// use secret_service::{SecretService, SecretServiceOptions, Storage, MemoryPropertyStore};
///
/// let service = SecretService::new(
///     SecretServiceOptions::new().with_storage(Storage::properties(MemoryPropertyStore::new())),
/// ).unwrap();
/// service.set_secret("token", "abc").unwrap();
/// assert_eq!(service.get_secret("token").unwrap(), Some("abc".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct MemoryPropertyStore {
    properties: RwLock<BTreeMap<String, String>>,
}

impl MemoryPropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with initial properties
    pub fn with_properties<I, K, V>(initial: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            properties: RwLock::new(
                initial
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub fn clear(&self) {
        self.properties.write().clear();
    }

    pub fn len(&self) -> usize {
        self.properties.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PropertyStore for MemoryPropertyStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn get_property(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.properties.read().get(key).cloned())
    }

    fn set_property(&self, key: &str, value: &str) -> StorageResult<()> {
        self.properties
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete_property(&self, key: &str) -> StorageResult<()> {
        self.properties.write().remove(key);
        Ok(())
    }

    fn properties(&self) -> StorageResult<BTreeMap<String, String>> {
        Ok(self.properties.read().clone())
    }
}

impl Clone for MemoryPropertyStore {
    fn clone(&self) -> Self {
        Self {
            properties: RwLock::new(self.properties.read().clone()),
        }
    }
}
