use crate::{KeyValueStore, Result as StorageErrorResult, StorageError};

use std::collections::HashMap;
use std::sync::Mutex;

/// Process-local store, lost when dropped
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held
    #[track_caller]
    pub fn len(&self) -> StorageErrorResult<usize> {
        let entries = self.entries.lock().map_err(|_| StorageError::lock())?;
        Ok(entries.len())
    }

    #[track_caller]
    pub fn is_empty(&self) -> StorageErrorResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl KeyValueStore for MemoryStore {
    #[track_caller]
    fn get(&self, key: &str) -> StorageErrorResult<Option<String>> {
        let entries = self.entries.lock().map_err(|_| StorageError::lock())?;
        Ok(entries.get(key).cloned())
    }

    #[track_caller]
    fn set(&self, key: &str, value: &str) -> StorageErrorResult<()> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::lock())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    #[track_caller]
    fn remove(&self, key: &str) -> StorageErrorResult<()> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::lock())?;
        entries.remove(key);
        Ok(())
    }
}
