//! Configuration for the secret service
//!
//! - `SecretServiceOptions`: layered options with shallow, field-wise merging
//! - `ResolvedConfig`: validated result handed to storage adapters
//! - `OptionsFile`: mode and prefix loaded from YAML or JSON

mod options;
mod file;

pub use options::{
    SecretServiceOptions, ResolvedConfig, Mode, ConfigError, ConfigResult, DEFAULT_PREFIX,
};
pub use file::OptionsFile;
