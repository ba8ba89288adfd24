//! Core traits and types for backing stores

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::config::ResolvedConfig;
use super::properties::PropertiesStorage;

/// Errors that can occur during backing store operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Store is read-only")]
    ReadOnly,

    #[error("Store not available: {0}")]
    NotAvailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Store error: {0}")]
    Other(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// A flat, persistent string key-value store provided by the host
///
/// Keys are physical keys: the prefix has already been applied. Deleting a key
/// that does not exist is not an error.
///
/// # Example
///
/// ```
/// use secret_service::{PropertyStore, MemoryPropertyStore};
///
/// let store = MemoryPropertyStore::new();
/// store.set_property("secret_service_token", "abc").unwrap();
/// assert_eq!(store.get_property("secret_service_token").unwrap(), Some("abc".to_string()));
/// ```
pub trait PropertyStore: Send + Sync {
    /// Human-readable name of this store
    fn name(&self) -> &str;

    /// Read one property
    ///
    /// `Ok(None)` means the key is absent. A store that cannot be read at all
    /// (unparsable file, locked keychain) must return `Err`, never `Ok(None)`.
    fn get_property(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write one property, overwriting any existing value
    fn set_property(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove one property
    fn delete_property(&self, key: &str) -> StorageResult<()>;

    /// Every property in the store, ordered by key
    fn properties(&self) -> StorageResult<BTreeMap<String, String>>;
}

/// The four-operation contract the resolver talks to
///
/// Keys are logical keys; implementations decide how `config` (in particular
/// `config.prefix()`) maps them onto physical storage. `delete_all` must only
/// remove keys inside the configured prefix namespace.
pub trait SecretStorage: Send + Sync {
    fn get(&self, key: &str, config: &ResolvedConfig) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str, config: &ResolvedConfig) -> StorageResult<()>;

    fn delete(&self, key: &str, config: &ResolvedConfig) -> StorageResult<()>;

    fn delete_all(&self, config: &ResolvedConfig) -> StorageResult<()>;
}

/// A backing store reference, shared by every operation of a service
#[derive(Clone)]
pub enum Storage {
    /// Property-style store, accessed through `PropertiesStorage`
    Properties(Arc<dyn PropertyStore>),
    /// Store that implements the adapter contract itself
    Direct(Arc<dyn SecretStorage>),
}

impl Storage {
    pub fn properties(store: impl PropertyStore + 'static) -> Self {
        Storage::Properties(Arc::new(store))
    }

    pub fn direct(storage: impl SecretStorage + 'static) -> Self {
        Storage::Direct(Arc::new(storage))
    }

    /// A fresh store from the registered factory, see
    /// [`create_property_store`](super::create_property_store)
    ///
    /// Each call builds a new instance. Stores that keep their data outside
    /// the process (`file`, `keychain`, `env`) see each other's writes, but
    /// two `Storage::named("memory")` values are separate maps. Build one
    /// storage and clone it to share an in-memory store between services.
    pub fn named(name: &str) -> Option<Self> {
        super::registry::create_property_store(name).map(Storage::Properties)
    }

    /// The adapter the resolver should call for this store
    pub fn adapter(&self) -> Arc<dyn SecretStorage> {
        match self {
            Storage::Properties(store) => Arc::new(PropertiesStorage::new(Arc::clone(store))),
            Storage::Direct(storage) => Arc::clone(storage),
        }
    }
}

impl fmt::Debug for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Storage::Properties(store) => f.debug_tuple("Properties").field(&store.name()).finish(),
            Storage::Direct(_) => f.write_str("Direct"),
        }
    }
}

impl From<Arc<dyn PropertyStore>> for Storage {
    fn from(store: Arc<dyn PropertyStore>) -> Self {
        Storage::Properties(store)
    }
}

impl From<Arc<dyn SecretStorage>> for Storage {
    fn from(storage: Arc<dyn SecretStorage>) -> Self {
        Storage::Direct(storage)
    }
}
