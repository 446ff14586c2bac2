//! In-memory key-value store

use super::KeyValueStore;
use crate::error::Result;
use std::collections::HashMap;

/// Key-value store that lives only as long as the value itself
///
/// Never fails. Used in tests and by embedders that don't need durability.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing() {
        let store = MemoryStore::new();
        assert_eq!(store.get("nope").unwrap(), None);
        assert!(!store.contains("nope").unwrap());
    }

    #[test]
    fn test_set_replaces() {
        let mut store = MemoryStore::new();
        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();

        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut store = MemoryStore::new();
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        // Removing again is fine
        store.remove("k").unwrap();

        assert!(store.is_empty());
    }

    fn write_through<S: KeyValueStore>(mut store: S) {
        store.set("k", "v").unwrap();
    }

    #[test]
    fn test_through_mut_ref() {
        let mut store = MemoryStore::new();
        write_through(&mut store);
        assert!(store.contains("k").unwrap());
    }
}
