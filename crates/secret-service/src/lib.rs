//! Secret Service
//!
//! A secret-retrieval facade for scripting hosts that only offer a flat,
//! persistent key-value store and, optionally, a modal prompt. Callers ask
//! for a named secret without knowing whether it exists, where it is stored,
//! or what should happen when it is missing.
//!
//! ## Modes
//!
//! - `silent` (default): a missing secret is `None`
//! - `strict`: a missing secret is `SecretServiceError::SecretNotFound`
//! - `interactive`: the user is prompted through a `ScriptContainer`; the
//!   answer is stored and returned, a cancel is `SecretServiceError::UserAborted`
//!
//! ## Storage
//!
//! Logical keys are namespaced with a prefix (default `secret_service_`), so
//! several independent secret sets can share one backing store.
//!
//! ```rust
//! use std::sync::Arc;
//! use secret_service::{SecretService, SecretServiceOptions, Storage, MemoryPropertyStore, PropertyStore};
//!
//! let properties = Arc::new(MemoryPropertyStore::new());
//! let service = SecretService::new(
//!     SecretServiceOptions::new().with_storage(Storage::Properties(properties.clone())),
//! ).unwrap();
//!
//! service.set_secret("api_token", "abc123").unwrap();
//! assert_eq!(properties.get_property("secret_service_api_token").unwrap(), Some("abc123".to_string()));
//!
//! service.delete_all_secrets().unwrap();
//! assert_eq!(service.get_secret("api_token").unwrap(), None);
//! ```

pub mod logging;
pub mod config;
pub mod storage;
pub mod prompt;
pub mod resolver;

#[cfg(test)]
mod testing;

pub use config::{SecretServiceOptions, ResolvedConfig, Mode, ConfigError, ConfigResult, OptionsFile, DEFAULT_PREFIX};

pub use storage::{
    PropertyStore, SecretStorage, Storage, StorageError, StorageResult, PropertiesStorage,
    MemoryPropertyStore, EnvPropertyStore, FilePropertyStore, KeychainPropertyStore,
    register_property_store, create_property_store, list_property_stores,
};

pub use prompt::{ScriptContainer, Button, ButtonSet, PromptResponse, PromptError};
#[cfg(feature = "terminal")]
pub use prompt::TerminalPrompt;

pub use resolver::{
    SecretService, SecretServiceError, SecretServiceResult, Lookup, PROMPT_TITLE,
    init, get_secret, set_secret, delete_secrets, delete_all_secrets,
};

pub use logging::{Logger, NoOpLogger, ConsoleLogger, SharedLogger};
