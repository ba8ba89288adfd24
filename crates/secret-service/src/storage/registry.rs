//! Registry of property stores by name

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::traits::PropertyStore;
use super::env_store::EnvPropertyStore;
use super::file_store::FilePropertyStore;
use super::keychain_store::KeychainPropertyStore;
use super::memory_store::MemoryPropertyStore;

/// Factory function type for creating property stores
pub type PropertyStoreFactory = Box<dyn Fn() -> Arc<dyn PropertyStore> + Send + Sync>;

/// Definition of a registered property store
pub struct StoreDefinition {
    /// Unique name for this store
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Factory function to create instances
    pub factory: PropertyStoreFactory,
}

impl std::fmt::Debug for StoreDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

fn builtin(name: &str, description: &str, factory: PropertyStoreFactory) -> (String, StoreDefinition) {
    (
        name.to_string(),
        StoreDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory,
        },
    )
}

static REGISTRY: Lazy<RwLock<HashMap<String, StoreDefinition>>> = Lazy::new(|| {
    RwLock::new(HashMap::from([
        builtin(
            "memory",
            "In-memory storage, a new empty map per instance",
            Box::new(|| Arc::new(MemoryPropertyStore::new())),
        ),
        builtin(
            "env",
            "Read-only view over process environment variables",
            Box::new(|| Arc::new(EnvPropertyStore::new())),
        ),
        builtin(
            "keychain",
            "System keychain (macOS Keychain, Windows Credential Manager, Linux Secret Service)",
            Box::new(|| Arc::new(KeychainPropertyStore::new())),
        ),
        builtin(
            "file",
            "YAML file in the user data directory",
            Box::new(|| Arc::new(FilePropertyStore::user())),
        ),
    ]))
});

/// Register a property store under `name`, replacing any previous entry
///
/// # Example
///
/// ```
/// use secret_service::{register_property_store, create_property_store, MemoryPropertyStore};
/// use std::sync::Arc;
///
/// register_property_store(
///     "scratch",
///     "Throwaway store",
///     Box::new(|| Arc::new(MemoryPropertyStore::new())),
/// );
/// assert!(create_property_store("scratch").is_some());
/// ```
pub fn register_property_store(name: &str, description: &str, factory: PropertyStoreFactory) {
    let mut registry = REGISTRY.write();
    registry.insert(
        name.to_string(),
        StoreDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory,
        },
    );
}

/// Create a property store by name, `None` if the name is not registered
pub fn create_property_store(name: &str) -> Option<Arc<dyn PropertyStore>> {
    let registry = REGISTRY.read();
    registry.get(name).map(|def| (def.factory)())
}

/// All registered stores as `(name, description)`, sorted by name
pub fn list_property_stores() -> Vec<(String, String)> {
    let registry = REGISTRY.read();
    let mut stores: Vec<_> = registry
        .values()
        .map(|def| (def.name.clone(), def.description.clone()))
        .collect();
    stores.sort();
    stores
}

pub fn has_property_store(name: &str) -> bool {
    REGISTRY.read().contains_key(name)
}

/// Unregister a property store (mainly for testing)
pub fn unregister_property_store(name: &str) -> bool {
    REGISTRY.write().remove(name).is_some()
}
