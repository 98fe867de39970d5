//! Durable storage of the activity collection.
//!
//! The whole collection lives in a single slot of a key-value store, encoded
//! as a JSON array. Each element carries a `"type"` tag so reading it back
//! rebuilds the right variant.

mod file;
mod sqlite;

pub use file::FileKvStore;
pub use sqlite::SqliteKvStore;

use crate::activity::Activity;
use crate::error::PersistenceError;
use std::collections::HashMap;

pub const DEFAULT_STORAGE_KEY: &str = "workouts";

/// Minimal string key-value store. `set` replaces the whole value atomically.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
    fn remove(&mut self, key: &str) -> Result<(), PersistenceError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryKvStore {
    slots: HashMap<String, String>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        self.slots.remove(key);
        Ok(())
    }
}

/// Reads and writes the activity collection under one fixed key.
#[derive(Debug)]
pub struct PersistenceGateway<K: KvStore> {
    kv: K,
    key: String,
}

impl<K: KvStore> PersistenceGateway<K> {
    pub fn new(kv: K) -> Self {
        Self::with_key(kv, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(kv: K, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kv(&self) -> &K {
        &self.kv
    }

    /// Overwrites the slot with the full collection.
    pub fn save(&mut self, activities: &[Activity]) -> Result<(), PersistenceError> {
        let encoded = serde_json::to_string(activities)?;
        self.kv.set(&self.key, &encoded)?;
        tracing::debug!(key = %self.key, count = activities.len(), "Activities saved");
        Ok(())
    }

    /// `Ok(None)` when nothing has been saved yet.
    pub fn load(&self) -> Result<Option<Vec<Activity>>, PersistenceError> {
        let Some(encoded) = self.kv.get(&self.key)? else {
            return Ok(None);
        };
        // A literal `null` in the slot counts as empty.
        let activities: Option<Vec<Activity>> = serde_json::from_str(&encoded)?;
        Ok(activities)
    }

    pub fn clear(&mut self) -> Result<(), PersistenceError> {
        self.kv.remove(&self.key)?;
        tracing::info!(key = %self.key, "Stored activities cleared");
        Ok(())
    }
}
