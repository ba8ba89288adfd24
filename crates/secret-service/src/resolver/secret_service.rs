//! The resolver: option merging, adapter dispatch and miss policy

use std::sync::Arc;

use crate::config::{ConfigError, Mode, ResolvedConfig, SecretServiceOptions};
use crate::logging::{Logger, NoOpLogger, SharedLogger};
use crate::prompt::ButtonSet;
use crate::storage::SecretStorage;
use super::error::{SecretServiceError, SecretServiceResult};

/// Title of the interactive prompt
pub const PROMPT_TITLE: &str = "Secrets Management";

/// Outcome of a lookup, before the mode decides whether a miss is an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// In storage, or entered by the user and persisted
    Found(String),
    /// Not in storage and nobody was asked (silent or strict mode)
    NotFound,
    /// The user cancelled or dismissed the prompt
    Declined,
}

impl Lookup {
    pub fn into_value(self) -> Option<String> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound | Lookup::Declined => None,
        }
    }
}

/// Secret retrieval facade over a backing store
///
/// Every operation takes an optional per-call override (the `*_with`
/// variants) that is merged over the instance options: call > instance >
/// default. Options are validated on every call before storage is touched.
///
/// # Example
///
/// ```
/// use secret_service::{SecretService, SecretServiceOptions, SecretServiceError, Mode, Storage, MemoryPropertyStore};
///
/// let service = SecretService::new(
///     SecretServiceOptions::new()
///         .with_storage(Storage::properties(MemoryPropertyStore::new()))
///         .with_mode(Mode::Strict),
/// ).unwrap();
///
/// assert!(matches!(
///     service.get_secret("api_token"),
///     Err(SecretServiceError::SecretNotFound(key)) if key == "api_token"
/// ));
///
/// service.set_secret("api_token", "abc123").unwrap();
/// assert_eq!(service.get_secret("api_token").unwrap(), Some("abc123".to_string()));
/// ```
pub struct SecretService {
    options: SecretServiceOptions,
    storage: Arc<dyn SecretStorage>,
    logger: SharedLogger,
}

impl SecretService {
    /// Create a service; the instance options must resolve on their own
    pub fn new(options: SecretServiceOptions) -> Result<Self, ConfigError> {
        let resolved = options.resolve()?;
        let storage = resolved.storage().adapter();
        Ok(Self {
            options,
            storage,
            logger: Arc::new(NoOpLogger),
        })
    }

    /// Report mode decisions to `logger` (secret values are never logged)
    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Instance-level options
    pub fn options(&self) -> &SecretServiceOptions {
        &self.options
    }

    /// Merge and validate, then pick the adapter for this call
    ///
    /// The instance adapter is reused unless the call overrides the storage.
    fn prepare(
        &self,
        overrides: &SecretServiceOptions,
    ) -> Result<(ResolvedConfig, Arc<dyn SecretStorage>), ConfigError> {
        let config = self.options.merge(overrides).resolve()?;
        let storage = if overrides.storage.is_some() {
            config.storage().adapter()
        } else {
            Arc::clone(&self.storage)
        };
        Ok((config, storage))
    }

    pub fn get_secret(&self, key: &str) -> SecretServiceResult<Option<String>> {
        self.get_secret_with(key, &SecretServiceOptions::default())
    }

    /// Read a secret, applying the mode policy on a miss
    ///
    /// - `Silent`: `Ok(None)`
    /// - `Strict`: `SecretNotFound`
    /// - `Interactive`: prompts; the entered value is stored and returned, a
    ///   cancel yields `UserAborted`
    pub fn get_secret_with(
        &self,
        key: &str,
        overrides: &SecretServiceOptions,
    ) -> SecretServiceResult<Option<String>> {
        let (config, storage) = self.prepare(overrides)?;
        match self.lookup_resolved(key, &config, storage.as_ref())? {
            Lookup::Found(value) => Ok(Some(value)),
            Lookup::NotFound if config.mode() == Mode::Strict => {
                crate::log_warn!(self.logger, "secret '{}' not found (strict)", key);
                Err(SecretServiceError::SecretNotFound(key.to_string()))
            }
            Lookup::NotFound => Ok(None),
            Lookup::Declined => Err(SecretServiceError::UserAborted(key.to_string())),
        }
    }

    pub fn lookup(&self, key: &str) -> SecretServiceResult<Lookup> {
        self.lookup_with(key, &SecretServiceOptions::default())
    }

    /// Like `get_secret_with`, but a miss or a cancelled prompt is reported
    /// as a `Lookup` variant instead of an error
    pub fn lookup_with(&self, key: &str, overrides: &SecretServiceOptions) -> SecretServiceResult<Lookup> {
        let (config, storage) = self.prepare(overrides)?;
        self.lookup_resolved(key, &config, storage.as_ref())
    }

    fn lookup_resolved(
        &self,
        key: &str,
        config: &ResolvedConfig,
        storage: &dyn SecretStorage,
    ) -> SecretServiceResult<Lookup> {
        if let Some(value) = storage.get(key, config)? {
            crate::log_debug!(self.logger, "secret '{}' found", key);
            return Ok(Lookup::Found(value));
        }

        match config.mode() {
            Mode::Silent | Mode::Strict => {
                crate::log_debug!(self.logger, "secret '{}' missing, mode={}", key, config.mode());
                Ok(Lookup::NotFound)
            }
            Mode::Interactive => self.prompt_for(key, config, storage),
        }
    }

    fn prompt_for(
        &self,
        key: &str,
        config: &ResolvedConfig,
        storage: &dyn SecretStorage,
    ) -> SecretServiceResult<Lookup> {
        let container = config
            .script_container()
            .ok_or(ConfigError::MissingScriptContainer)?;

        crate::log_info!(self.logger, "prompting for secret '{}' via {}", key, container.name());
        let response = container.prompt(
            PROMPT_TITLE,
            &format!("Please enter {}", key),
            ButtonSet::OkCancel,
        )?;

        if !response.is_confirmed() {
            crate::log_info!(self.logger, "user declined to enter '{}' ({:?})", key, response.button);
            return Ok(Lookup::Declined);
        }

        // An empty answer is still an answer
        let secret = response.response_text.unwrap_or_default();
        storage.set(key, &secret, config)?;
        crate::log_debug!(self.logger, "stored secret '{}' entered by user", key);
        Ok(Lookup::Found(secret))
    }

    pub fn set_secret(&self, key: &str, value: &str) -> SecretServiceResult<()> {
        self.set_secret_with(key, value, &SecretServiceOptions::default())
    }

    /// Store a secret, overwriting any existing value
    pub fn set_secret_with(
        &self,
        key: &str,
        value: &str,
        overrides: &SecretServiceOptions,
    ) -> SecretServiceResult<()> {
        let (config, storage) = self.prepare(overrides)?;
        storage.set(key, value, &config)?;
        Ok(())
    }

    pub fn delete_secrets<I, S>(&self, keys: I) -> SecretServiceResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.delete_secrets_with(keys, &SecretServiceOptions::default())
    }

    /// Delete each key in order; missing keys are not an error
    ///
    /// Not transactional: if one delete fails, earlier ones stay applied.
    pub fn delete_secrets_with<I, S>(&self, keys: I, overrides: &SecretServiceOptions) -> SecretServiceResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (config, storage) = self.prepare(overrides)?;
        for key in keys {
            storage.delete(key.as_ref(), &config)?;
        }
        Ok(())
    }

    pub fn delete_all_secrets(&self) -> SecretServiceResult<()> {
        self.delete_all_secrets_with(&SecretServiceOptions::default())
    }

    /// Delete every secret under the configured prefix
    pub fn delete_all_secrets_with(&self, overrides: &SecretServiceOptions) -> SecretServiceResult<()> {
        let (config, storage) = self.prepare(overrides)?;
        crate::log_info!(self.logger, "deleting all secrets with prefix '{}'", config.prefix());
        storage.delete_all(&config)?;
        Ok(())
    }
}

impl std::fmt::Debug for SecretService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretService")
            .field("options", &self.options)
            .finish()
    }
}
