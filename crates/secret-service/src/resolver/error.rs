//! Secret service error types

use thiserror::Error;

use crate::config::ConfigError;
use crate::prompt::PromptError;
use crate::storage::StorageError;

/// Errors surfaced by `SecretService` operations
#[derive(Error, Debug)]
pub enum SecretServiceError {
    /// Options were incomplete or invalid; nothing was read or written
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Strict mode and the secret is not in storage
    #[error("Secret not found: {0}")]
    SecretNotFound(String),

    /// Interactive mode and the user cancelled or dismissed the prompt
    #[error("User has not entered the secret {0}, aborting.")]
    UserAborted(String),

    /// The backing store failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The prompt surface failed
    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),
}

impl SecretServiceError {
    /// Key the error refers to, for `SecretNotFound` and `UserAborted`
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::SecretNotFound(key) | Self::UserAborted(key) => Some(key),
            _ => None,
        }
    }
}

pub type SecretServiceResult<T> = Result<T, SecretServiceError>;
