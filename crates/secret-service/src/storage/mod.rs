//! Backing stores and the adapter contract
//!
//! Two shapes of backing store are supported, chosen explicitly through
//! [`Storage`]:
//! - a `PropertyStore` (flat key-value store with enumeration), wrapped by
//!   `PropertiesStorage`, which applies the key prefix
//! - a `SecretStorage` implementation used as is
//!
//! Built-in property stores: `MemoryPropertyStore`, `EnvPropertyStore`,
//! `FilePropertyStore`, `KeychainPropertyStore`. A registry creates them by name.

mod traits;
mod properties;
mod memory_store;
mod env_store;
mod file_store;
mod keychain_store;
mod registry;

pub use traits::{PropertyStore, SecretStorage, Storage, StorageError, StorageResult};
pub use properties::PropertiesStorage;
pub use memory_store::MemoryPropertyStore;
pub use env_store::EnvPropertyStore;
pub use file_store::FilePropertyStore;
pub use keychain_store::KeychainPropertyStore;
pub use registry::{
    register_property_store, create_property_store, list_property_stores,
    has_property_store, unregister_property_store, PropertyStoreFactory, StoreDefinition,
};
