//! Environment variable property store

use std::collections::BTreeMap;
use std::env;

use super::traits::{PropertyStore, StorageError, StorageResult};

/// Read-only property store over the process environment
///
/// Useful when secrets are injected by the host as environment variables,
/// e.g. `SECRET_SERVICE_API_TOKEN` read with prefix `SECRET_SERVICE_`.
/// Writes and deletes fail with `StorageError::ReadOnly`, so interactive
/// mode over this store cannot persist what the user enters.
///
/// Variables whose name or value is not valid unicode are invisible.
#[derive(Debug, Default)]
pub struct EnvPropertyStore {
    _private: (),
}

impl EnvPropertyStore {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl PropertyStore for EnvPropertyStore {
    fn name(&self) -> &str {
        "env"
    }

    fn get_property(&self, key: &str) -> StorageResult<Option<String>> {
        match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => {
                Err(StorageError::Other(format!("Environment variable {} is not valid UTF-8", key)))
            }
        }
    }

    fn set_property(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::ReadOnly)
    }

    fn delete_property(&self, _key: &str) -> StorageResult<()> {
        Err(StorageError::ReadOnly)
    }

    fn properties(&self) -> StorageResult<BTreeMap<String, String>> {
        Ok(env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect())
    }
}
