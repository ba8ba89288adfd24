//! Layered options and their validated form

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::prompt::ScriptContainer;
use crate::storage::Storage;

/// Prefix applied to every logical key when none is configured
pub const DEFAULT_PREFIX: &str = "secret_service_";

/// Errors raised while building or validating configuration
///
/// Validation errors are always raised before the backing store is touched.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("`storage` is required")]
    MissingStorage,

    #[error("Invalid mode: {0}. Supported modes: silent, interactive, strict.")]
    InvalidMode(String),

    #[error("Script container is required for interactive mode. Please provide `script_container` in the options.")]
    MissingScriptContainer,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Other(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// What happens when a requested secret is not in storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Mode {
    /// Return nothing
    #[default]
    Silent,
    /// Fail with `SecretNotFound`
    Strict,
    /// Ask the user through the script container and persist the answer
    Interactive,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Silent => "silent",
            Mode::Strict => "strict",
            Mode::Interactive => "interactive",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "silent" => Ok(Mode::Silent),
            "strict" => Ok(Mode::Strict),
            "interactive" => Ok(Mode::Interactive),
            other => Err(ConfigError::InvalidMode(other.to_string())),
        }
    }
}

impl TryFrom<String> for Mode {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.as_str().to_string()
    }
}

/// Options for a `SecretService` or for a single call
///
/// Every field is optional so the same type serves as instance options and as
/// per-call overrides. Merging is shallow: a field set on the override replaces
/// the instance value wholesale. Precedence is call > instance > default.
///
/// # Example
///
/// ```
/// use secret_service::{SecretServiceOptions, Mode, Storage, MemoryPropertyStore};
///
/// let instance = SecretServiceOptions::new()
///     .with_storage(Storage::properties(MemoryPropertyStore::new()))
///     .with_mode(Mode::Strict);
/// let call = SecretServiceOptions::new().with_prefix("billing_");
///
/// let resolved = instance.merge(&call).resolve().unwrap();
/// assert_eq!(resolved.mode(), Mode::Strict);
/// assert_eq!(resolved.prefix(), "billing_");
/// ```
#[derive(Clone, Default)]
pub struct SecretServiceOptions {
    pub storage: Option<Storage>,
    pub mode: Option<Mode>,
    pub prefix: Option<String>,
    pub script_container: Option<Arc<dyn ScriptContainer>>,
}

impl SecretServiceOptions {
    /// Empty options; resolving them alone fails for lack of storage
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_storage(mut self, storage: Storage) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_script_container(mut self, container: Arc<dyn ScriptContainer>) -> Self {
        self.script_container = Some(container);
        self
    }

    /// Overlay `overrides` on top of `self`
    pub fn merge(&self, overrides: &SecretServiceOptions) -> SecretServiceOptions {
        SecretServiceOptions {
            storage: overrides.storage.clone().or_else(|| self.storage.clone()),
            mode: overrides.mode.or(self.mode),
            prefix: overrides.prefix.clone().or_else(|| self.prefix.clone()),
            script_container: overrides
                .script_container
                .clone()
                .or_else(|| self.script_container.clone()),
        }
    }

    /// Fill in defaults and validate
    pub fn resolve(&self) -> ConfigResult<ResolvedConfig> {
        let storage = self.storage.clone().ok_or(ConfigError::MissingStorage)?;
        let mode = self.mode.unwrap_or_default();
        if mode == Mode::Interactive && self.script_container.is_none() {
            return Err(ConfigError::MissingScriptContainer);
        }

        Ok(ResolvedConfig {
            storage,
            mode,
            prefix: self
                .prefix
                .clone()
                .unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            script_container: self.script_container.clone(),
        })
    }
}

impl fmt::Debug for SecretServiceOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretServiceOptions")
            .field("storage", &self.storage)
            .field("mode", &self.mode)
            .field("prefix", &self.prefix)
            .field("script_container", &self.script_container.as_ref().map(|c| c.name().to_string()))
            .finish()
    }
}

/// Fully merged and validated configuration
///
/// Always has a storage, and a script container whenever the mode is
/// `Interactive`. Storage adapters receive it on every call.
#[derive(Clone)]
pub struct ResolvedConfig {
    storage: Storage,
    mode: Mode,
    prefix: String,
    script_container: Option<Arc<dyn ScriptContainer>>,
}

impl ResolvedConfig {
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn script_container(&self) -> Option<&Arc<dyn ScriptContainer>> {
        self.script_container.as_ref()
    }

    /// Key under which `key` lives in the backing store
    pub fn physical_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("storage", &self.storage)
            .field("mode", &self.mode)
            .field("prefix", &self.prefix)
            .field("script_container", &self.script_container.as_ref().map(|c| c.name().to_string()))
            .finish()
    }
}
