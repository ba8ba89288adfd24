//! Secret resolution
//!
//! `SecretService` merges options, dispatches to the storage adapter and
//! applies the mode policy on a miss. The free functions build a one-shot
//! service for a single call.

mod error;
mod secret_service;
mod oneshot;

pub use error::{SecretServiceError, SecretServiceResult};
pub use secret_service::{SecretService, Lookup, PROMPT_TITLE};
pub use oneshot::{init, get_secret, set_secret, delete_secrets, delete_all_secrets};
