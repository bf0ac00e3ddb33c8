//! In-memory store.

use std::collections::HashMap;

use super::{KeyValueStore, StoreError};

/// Store backed by a `HashMap`; nothing outlives the process.
#[derive(Debug, Clone, Default, derive_new::new)]
pub struct MemoryStore {
    #[new(default)]
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
