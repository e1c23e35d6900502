//! In-memory key-value storage.

use std::collections::HashMap;

use crate::KeyValueStore;
use crate::error::StoreError;

/// A map-backed store. Optionally rejects writes to emulate disabled storage.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with one value.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    /// Make every subsequent `set` fail with [`StoreError::Unavailable`].
    #[must_use]
    pub const fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::Unavailable(format!(
                "memory store is read-only (key '{key}')"
            )));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
