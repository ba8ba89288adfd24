//! Logging abstractions
//!
//! The resolver never logs secret values. It reports mode decisions and key
//! names through an injected [`Logger`]; the built-in stores write to the
//! process-wide troubleshooting log in [`file_logger`].

mod traits;
mod noop;
mod console;
pub mod file_logger;

pub use traits::{Logger, LoggerExt, BoxedLogger, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;

pub use file_logger::{
    log, trace, debug, info, warn, error,
    log_file_path, clear_log, LogLevel,
};
