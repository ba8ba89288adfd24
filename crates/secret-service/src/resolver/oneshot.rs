//! One-shot entry points
//!
//! Each function builds a `SecretService` from `options`, performs one
//! operation and drops it. Handy for scripts that touch a single secret.

use crate::config::{ConfigError, SecretServiceOptions};
use super::error::SecretServiceResult;
use super::secret_service::SecretService;

/// Create a service; same as [`SecretService::new`]
pub fn init(options: SecretServiceOptions) -> Result<SecretService, ConfigError> {
    SecretService::new(options)
}

/// Read one secret
///
/// ```
/// use secret_service::{get_secret, set_secret, SecretServiceOptions, Storage, MemoryPropertyStore};
///
/// let options = SecretServiceOptions::new()
///     .with_storage(Storage::properties(MemoryPropertyStore::new()));
///
/// set_secret("token", "abc", options.clone()).unwrap();
/// assert_eq!(get_secret("token", options).unwrap(), Some("abc".to_string()));
/// ```
pub fn get_secret(key: &str, options: SecretServiceOptions) -> SecretServiceResult<Option<String>> {
    init(options)?.get_secret(key)
}

pub fn set_secret(key: &str, value: &str, options: SecretServiceOptions) -> SecretServiceResult<()> {
    init(options)?.set_secret(key, value)
}

pub fn delete_secrets<I, S>(keys: I, options: SecretServiceOptions) -> SecretServiceResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    init(options)?.delete_secrets(keys)
}

pub fn delete_all_secrets(options: SecretServiceOptions) -> SecretServiceResult<()> {
    init(options)?.delete_all_secrets()
}
