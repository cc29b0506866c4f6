//! Store implementation
//!
//! HashMap-based table with a distinct-key capacity ceiling.

use std::collections::HashMap;

use crate::error::{KvError, Result};

/// In-memory key-value table
///
/// Lives for the whole process, owned by the server loop and handed `&mut`
/// to one connection handler at a time. Keys are unique; overwriting an
/// existing key never counts against capacity.
pub struct Store {
    entries: HashMap<String, String>,
    capacity: usize,
}

impl Store {
    /// Create an empty store with the given distinct-key capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            capacity,
        }
    }

    /// Look up a value by exact key equality
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Insert or overwrite a key
    ///
    /// Overwrites always succeed. A new key is accepted only while the store
    /// holds fewer than `capacity` entries; otherwise `KvError::StoreFull`
    /// is returned and the store is left unchanged.
    pub fn upsert(&mut self, key: String, value: String) -> Result<()> {
        if let Some(existing) = self.entries.get_mut(&key) {
            *existing = value;
            return Ok(());
        }
        if self.entries.len() >= self.capacity {
            return Err(KvError::StoreFull);
        }
        self.entries.insert(key, value);
        Ok(())
    }

    /// Number of entries currently held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct-key capacity ceiling
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
