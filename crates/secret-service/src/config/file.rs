//! Options files (YAML or JSON)
//!
//! Only `mode` and `prefix` can come from a file. Storage and script container
//! are live objects supplied by the host at runtime.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::options::{ConfigError, ConfigResult, Mode, SecretServiceOptions};

/// On-disk shape of the serializable options
///
/// ```yaml
/// mode: strict
/// prefix: billing_
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl OptionsFile {
    /// User-level options path (`~/.config/secret-service/config.yaml` on Linux)
    pub fn user_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("secret-service").join("config.yaml")
    }

    /// Load from a file; a missing file yields empty options
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as YAML.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        if is_json(path) {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Load the user-level file
    pub fn load_user() -> ConfigResult<Self> {
        Self::load(Self::user_path())
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        // An empty document deserializes to unit, not to a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Other(format!("Failed to parse YAML: {}", e)))
    }

    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| ConfigError::Other(format!("Failed to parse JSON: {}", e)))
    }

    /// Write to a file, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = if is_json(path) {
            serde_json::to_string_pretty(self)
                .map_err(|e| ConfigError::Other(format!("Failed to serialize JSON: {}", e)))?
        } else {
            serde_yaml::to_string(self)
                .map_err(|e| ConfigError::Other(format!("Failed to serialize YAML: {}", e)))?
        };

        fs::write(path, content)?;
        Ok(())
    }

    pub fn into_options(self) -> SecretServiceOptions {
        SecretServiceOptions {
            mode: self.mode,
            prefix: self.prefix,
            ..SecretServiceOptions::default()
        }
    }
}

impl SecretServiceOptions {
    /// Options with `mode` and `prefix` read from a file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        Ok(OptionsFile::load(path)?.into_options())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let file = OptionsFile::load(dir.path().join("absent.yaml")).unwrap();
        assert_eq!(file, OptionsFile::default());
    }

    #[test]
    fn test_yaml_round_trip_on_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let file = OptionsFile {
            mode: Some(Mode::Strict),
            prefix: Some("billing_".to_string()),
        };
        file.save(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("mode: strict"));
        assert!(content.contains("prefix: billing_"));

        assert_eq!(OptionsFile::load(&path).unwrap(), file);
    }

    #[test]
    fn test_json_by_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"mode": "interactive"}"#).unwrap();

        let options = SecretServiceOptions::from_file(&path).unwrap();
        assert_eq!(options.mode, Some(Mode::Interactive));
        assert!(options.prefix.is_none());
        assert!(options.storage.is_none());
    }

    #[test]
    fn test_invalid_mode_in_file() {
        let err = OptionsFile::from_yaml_str("mode: noisy\n").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Invalid mode: noisy"), "{}", message);
    }

    #[test]
    fn test_empty_yaml() {
        assert_eq!(OptionsFile::from_yaml_str("").unwrap(), OptionsFile::default());
    }

    #[test]
    fn test_user_path_layout() {
        let path = OptionsFile::user_path();
        assert!(path.ends_with("secret-service/config.yaml"));
    }
}
