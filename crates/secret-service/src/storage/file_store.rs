//! File-backed property store (YAML or JSON)

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use super::traits::{PropertyStore, StorageError, StorageResult};
use crate::logging::file_logger as log;

type Properties = BTreeMap<String, String>;

/// Property store persisted as a flat string map in a single file
///
/// Files ending in `.json` are read and written as JSON, anything else as
/// YAML. The file is loaded lazily, cached, and rewritten after every
/// mutation. Values are stored in plain text.
///
/// # Example
///
/// ```no_run
/// use secret_service::{FilePropertyStore, PropertyStore};
///
/// let store = FilePropertyStore::user();
/// store.set_property("secret_service_token", "abc").unwrap();
/// ```
pub struct FilePropertyStore {
    path: PathBuf,
    cache: RwLock<Option<Properties>>,
}

impl FilePropertyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// Store in the user data directory (`~/.local/share/secret-service/properties.yaml` on Linux)
    pub fn user() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".local").join("share"));
        Self::new(data_dir.join("secret-service").join("properties.yaml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Drop the cache and re-read the file
    pub fn reload(&self) -> StorageResult<()> {
        let properties = self.load()?;
        *self.cache.write() = Some(properties);
        Ok(())
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
    }

    fn load(&self) -> StorageResult<Properties> {
        if !self.path.exists() {
            return Ok(Properties::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Properties::new());
        }

        if self.is_json() {
            serde_json::from_str(&content)
                .map_err(|e| StorageError::Serialization(format!("Failed to parse JSON: {}", e)))
        } else {
            serde_yaml::from_str(&content)
                .map_err(|e| StorageError::Serialization(format!("Failed to parse YAML: {}", e)))
        }
    }

    fn save(&self, properties: &Properties) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = if self.is_json() {
            serde_json::to_string_pretty(properties)
                .map_err(|e| StorageError::Serialization(format!("Failed to serialize JSON: {}", e)))?
        } else {
            serde_yaml::to_string(properties)
                .map_err(|e| StorageError::Serialization(format!("Failed to serialize YAML: {}", e)))?
        };

        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Run `f` over the cached contents, loading them on first use
    fn with_cached<T>(&self, f: impl FnOnce(&Properties) -> T) -> StorageResult<T> {
        if let Some(properties) = self.cache.read().as_ref() {
            return Ok(f(properties));
        }

        let mut cache = self.cache.write();
        let properties = match cache.take() {
            Some(properties) => properties,
            None => self.load()?,
        };
        let result = f(&properties);
        *cache = Some(properties);
        Ok(result)
    }

    /// Read-modify-write under one lock; `f` returns whether anything changed
    fn update(&self, f: impl FnOnce(&mut Properties) -> bool) -> StorageResult<()> {
        let mut cache = self.cache.write();
        let mut properties = match cache.take() {
            Some(properties) => properties,
            None => self.load()?,
        };

        if f(&mut properties) {
            // On failure the cache stays empty so the next access re-reads the file
            self.save(&properties)?;
        }

        *cache = Some(properties);
        Ok(())
    }
}

impl PropertyStore for FilePropertyStore {
    fn name(&self) -> &str {
        "file"
    }

    fn get_property(&self, key: &str) -> StorageResult<Option<String>> {
        self.with_cached(|properties| properties.get(key).cloned())
            .map_err(|e| {
                log::warn("FilePropertyStore", &format!("get_property('{}') failed to load {:?}: {}", key, self.path, e));
                e
            })
    }

    fn set_property(&self, key: &str, value: &str) -> StorageResult<()> {
        log::debug("FilePropertyStore", &format!("set_property('{}'), value len={}", key, value.len()));
        self.update(|properties| {
            properties.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn delete_property(&self, key: &str) -> StorageResult<()> {
        log::debug("FilePropertyStore", &format!("delete_property('{}')", key));
        self.update(|properties| properties.remove(key).is_some())
    }

    fn properties(&self) -> StorageResult<Properties> {
        self.with_cached(Properties::clone)
    }
}

impl std::fmt::Debug for FilePropertyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilePropertyStore")
            .field("path", &self.path)
            .field("exists", &self.exists())
            .finish()
    }
}
