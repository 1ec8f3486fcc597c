//! Persistence Adapter.
//!
//! Mirrors the settings record into a key-value store. Every operation is
//! best-effort: read failures look like a missing key, write failures are
//! logged and dropped. Writes are deferred to [`PersistenceAdapter::flush`],
//! which the widget calls on its next event-loop turn.

use std::collections::HashMap;

use crate::types::errors::StorageError;

/// Narrow interface over a string key-value store (browser local storage,
/// SQLite, memory).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-process store. Lives as long as the widget.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Best-effort, non-blocking view of one storage key.
pub struct PersistenceAdapter<S: KeyValueStore> {
    store: S,
    key: String,
    pending: Option<String>,
}

impl<S: KeyValueStore> PersistenceAdapter<S> {
    pub fn new(store: S, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
            pending: None,
        }
    }

    /// Reads the stored record. Any store error is treated as "not found".
    pub fn load(&self) -> Option<String> {
        match self.store.get(&self.key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("settings read from '{}' failed: {}", self.key, e);
                None
            }
        }
    }

    /// Queues `value` for the next flush, replacing any older pending write.
    pub fn schedule_save(&mut self, value: String) {
        self.pending = Some(value);
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Writes the pending record, if any. A failed write is logged and dropped;
    /// the in-memory settings stay authoritative.
    pub fn flush(&mut self) {
        let Some(value) = self.pending.take() else {
            return;
        };
        if let Err(e) = self.store.set(&self.key, &value) {
            log::warn!("settings write to '{}' failed: {}", self.key, e);
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
