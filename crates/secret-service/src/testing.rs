//! Recording doubles shared by the unit tests

use std::collections::{BTreeMap, HashSet, VecDeque};

use parking_lot::Mutex;

use crate::config::ResolvedConfig;
use crate::prompt::{ButtonSet, PromptResponse, PromptResult, ScriptContainer};
use crate::storage::{PropertyStore, SecretStorage, StorageError, StorageResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyCall {
    Get(String),
    Set(String, String),
    Delete(String),
    List,
}

/// Property store that records every call
#[derive(Default)]
pub struct RecordingPropertyStore {
    data: Mutex<BTreeMap<String, String>>,
    calls: Mutex<Vec<PropertyCall>>,
    broken: Mutex<bool>,
}

impl RecordingPropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert without recording a call
    pub fn seed(&self, key: &str, value: &str) {
        self.data.lock().insert(key.to_string(), value.to_string());
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.data.lock().clone()
    }

    pub fn calls(&self) -> Vec<PropertyCall> {
        self.calls.lock().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Make every read fail, as a locked or corrupt store would
    pub fn break_reads(&self) {
        *self.broken.lock() = true;
    }
}

impl PropertyStore for RecordingPropertyStore {
    fn name(&self) -> &str {
        "recording"
    }

    fn get_property(&self, key: &str) -> StorageResult<Option<String>> {
        self.calls.lock().push(PropertyCall::Get(key.to_string()));
        if *self.broken.lock() {
            return Err(StorageError::NotAvailable("recording store is broken".into()));
        }
        Ok(self.data.lock().get(key).cloned())
    }

    fn set_property(&self, key: &str, value: &str) -> StorageResult<()> {
        self.calls
            .lock()
            .push(PropertyCall::Set(key.to_string(), value.to_string()));
        self.data.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete_property(&self, key: &str) -> StorageResult<()> {
        self.calls.lock().push(PropertyCall::Delete(key.to_string()));
        self.data.lock().remove(key);
        Ok(())
    }

    fn properties(&self) -> StorageResult<BTreeMap<String, String>> {
        self.calls.lock().push(PropertyCall::List);
        if *self.broken.lock() {
            return Err(StorageError::NotAvailable("recording store is broken".into()));
        }
        Ok(self.data.lock().clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageCall {
    Get { key: String, prefix: String },
    Set { key: String, value: String, prefix: String },
    Delete { key: String, prefix: String },
    DeleteAll { prefix: String },
}

/// Direct adapter that keeps logical keys and records the config it was given
#[derive(Default)]
pub struct RecordingStorage {
    data: Mutex<BTreeMap<String, String>>,
    calls: Mutex<Vec<StorageCall>>,
    failing_deletes: Mutex<HashSet<String>>,
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, key: &str, value: &str) {
        self.data.lock().insert(key.to_string(), value.to_string());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.data.lock().contains_key(key)
    }

    pub fn calls(&self) -> Vec<StorageCall> {
        self.calls.lock().clone()
    }

    /// Make `delete` fail for `key`
    pub fn fail_delete_of(&self, key: &str) {
        self.failing_deletes.lock().insert(key.to_string());
    }
}

impl SecretStorage for RecordingStorage {
    fn get(&self, key: &str, config: &ResolvedConfig) -> StorageResult<Option<String>> {
        self.calls.lock().push(StorageCall::Get {
            key: key.to_string(),
            prefix: config.prefix().to_string(),
        });
        Ok(self.data.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str, config: &ResolvedConfig) -> StorageResult<()> {
        self.calls.lock().push(StorageCall::Set {
            key: key.to_string(),
            value: value.to_string(),
            prefix: config.prefix().to_string(),
        });
        self.data.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str, config: &ResolvedConfig) -> StorageResult<()> {
        self.calls.lock().push(StorageCall::Delete {
            key: key.to_string(),
            prefix: config.prefix().to_string(),
        });
        if self.failing_deletes.lock().contains(key) {
            return Err(StorageError::Other(format!("cannot delete {}", key)));
        }
        self.data.lock().remove(key);
        Ok(())
    }

    fn delete_all(&self, config: &ResolvedConfig) -> StorageResult<()> {
        self.calls.lock().push(StorageCall::DeleteAll {
            prefix: config.prefix().to_string(),
        });
        self.data.lock().clear();
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptCall {
    pub title: String,
    pub message: String,
    pub buttons: ButtonSet,
}

/// Prompt that replays queued responses; cancels once the queue is empty
#[derive(Default)]
pub struct ScriptedPrompt {
    responses: Mutex<VecDeque<PromptResponse>>,
    calls: Mutex<Vec<PromptCall>>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering(response: PromptResponse) -> Self {
        let prompt = Self::new();
        prompt.responses.lock().push_back(response);
        prompt
    }

    pub fn calls(&self) -> Vec<PromptCall> {
        self.calls.lock().clone()
    }
}

impl ScriptContainer for ScriptedPrompt {
    fn name(&self) -> &str {
        "scripted"
    }

    fn prompt(&self, title: &str, message: &str, buttons: ButtonSet) -> PromptResult<PromptResponse> {
        self.calls.lock().push(PromptCall {
            title: title.to_string(),
            message: message.to_string(),
            buttons,
        });
        Ok(self
            .responses
            .lock()
            .pop_front()
            .unwrap_or_else(PromptResponse::cancelled))
    }
}
