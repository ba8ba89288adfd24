//! Logger that writes resolver decisions to a terminal stream

use std::io::{self, Write};

use parking_lot::Mutex;

use super::file_logger::{LogLevel, LEVEL_ENV_VAR};
use super::traits::Logger;

/// Line-oriented logger for running scripts from a terminal
///
/// Every level goes to the same stream (stderr by default) so that log lines
/// never interleave with what the script prints on stdout. Messages below
/// the threshold are dropped; the default threshold is `Info`, which shows
/// prompts, declines and bulk deletions but not per-key hits.
///
/// ```
/// use std::sync::Arc;
/// use secret_service::{ConsoleLogger, SecretService, SecretServiceOptions, Storage, MemoryPropertyStore};
///
/// let service = SecretService::new(
///     SecretServiceOptions::new().with_storage(Storage::properties(MemoryPropertyStore::new())),
/// )
/// .unwrap()
/// .with_logger(Arc::new(ConsoleLogger::new()));
/// service.delete_all_secrets().unwrap();
/// ```
pub struct ConsoleLogger {
    prefix: String,
    min_level: LogLevel,
    out: Mutex<Box<dyn Write + Send>>,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// `[SecretService]` lines at `Info` and above, on stderr
    pub fn new() -> Self {
        Self::to_writer(io::stderr())
    }

    /// Like `new`, with the threshold taken from `SECRET_SERVICE_LOG_LEVEL`
    pub fn from_env() -> Self {
        let level = std::env::var(LEVEL_ENV_VAR)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(LogLevel::Info);
        Self::new().with_level(level)
    }

    /// Write to `out` instead of stderr
    pub fn to_writer(out: impl Write + Send + 'static) -> Self {
        Self {
            prefix: "[SecretService]".to_string(),
            min_level: LogLevel::Info,
            out: Mutex::new(Box::new(out)),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    fn emit(&self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }
        let label = level.to_string();
        let mut out = self.out.lock();
        // A closed terminal must not fail a secret lookup
        let _ = writeln!(out, "{} {}: {}", self.prefix, label.trim_end(), message);
        let _ = out.flush();
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        self.emit(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.emit(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.emit(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.emit(LogLevel::Error, message);
    }
}

impl std::fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("prefix", &self.prefix)
            .field("min_level", &self.min_level)
            .finish()
    }
}
