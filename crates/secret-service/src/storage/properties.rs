//! Adapter from a property-style store to the `SecretStorage` contract

use std::fmt;
use std::sync::Arc;

use crate::config::ResolvedConfig;
use super::traits::{PropertyStore, SecretStorage, StorageResult};

/// Applies the configured prefix on top of a `PropertyStore`
///
/// Holds nothing but the store reference. `delete_all` enumerates the whole
/// store and filters by prefix client-side, since property stores have no
/// "delete by prefix" primitive. An empty prefix therefore matches every key.
#[derive(Clone)]
pub struct PropertiesStorage {
    properties: Arc<dyn PropertyStore>,
}

impl PropertiesStorage {
    pub fn new(properties: Arc<dyn PropertyStore>) -> Self {
        Self { properties }
    }

    /// The wrapped store
    pub fn inner(&self) -> &Arc<dyn PropertyStore> {
        &self.properties
    }
}

impl SecretStorage for PropertiesStorage {
    fn get(&self, key: &str, config: &ResolvedConfig) -> StorageResult<Option<String>> {
        self.properties.get_property(&config.physical_key(key))
    }

    fn set(&self, key: &str, value: &str, config: &ResolvedConfig) -> StorageResult<()> {
        self.properties.set_property(&config.physical_key(key), value)
    }

    fn delete(&self, key: &str, config: &ResolvedConfig) -> StorageResult<()> {
        self.properties.delete_property(&config.physical_key(key))
    }

    fn delete_all(&self, config: &ResolvedConfig) -> StorageResult<()> {
        let all = self.properties.properties()?;
        for key in all.keys().filter(|key| key.starts_with(config.prefix())) {
            self.properties.delete_property(key)?;
        }
        Ok(())
    }
}

impl fmt::Debug for PropertiesStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertiesStorage")
            .field("properties", &self.properties.name())
            .finish()
    }
}
