//! In-memory storage backend.

use std::collections::HashMap;

use super::keys;
use super::traits::KeyValueStore;
use crate::error::Result;

/// A `HashMap`-backed store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        keys::validate(key)?;
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        keys::validate(key)?;
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        keys::validate(key)?;
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("user").unwrap(), None);

        store.set("user", "{}").unwrap();
        assert_eq!(store.get("user").unwrap().as_deref(), Some("{}"));
        assert_eq!(store.len(), 1);

        store.remove("user").unwrap();
        store.remove("user").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_json_helpers() {
        let mut store = MemoryStore::new();
        store.set_json("numbers", &vec![1, 2, 3]).unwrap();
        let back: Option<Vec<i32>> = store.get_json("numbers").unwrap();
        assert_eq!(back, Some(vec![1, 2, 3]));

        store.set("numbers", "not json").unwrap();
        assert!(store.get_json::<Vec<i32>>("numbers").is_err());
    }
}
