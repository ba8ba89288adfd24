//! Silent logger

use super::traits::Logger;

/// Discards everything; what a `SecretService` logs to until
/// [`with_logger`](crate::SecretService::with_logger) is called
///
/// Whatever replaces it receives key names, modes and prefixes. Secret values
/// are never passed to a `Logger`, so a host may forward these lines to a
/// shared log without redaction.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    fn debug(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}
