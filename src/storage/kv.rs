//! Key-value persistence backends
//!
//! The tracker persists each collection as one text value under a fixed key.
//! `FileStore` maps keys to JSON files in the data directory; `MemoryStore`
//! keeps values in a map and is used for tests and scratch sessions.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{TrackerError, TrackerResult};

use super::file_io::{read_text, write_text_atomic};

/// A string-keyed text store
pub trait KeyValueStore {
    /// Read the value under `key`, or `None` if it was never written
    fn get(&self, key: &str) -> TrackerResult<Option<String>>;

    /// Replace the value under `key`
    fn set(&self, key: &str, value: &str) -> TrackerResult<()>;
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> TrackerResult<PathBuf> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(TrackerError::Storage(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        read_text(self.path_for(key)?)
    }

    fn set(&self, key: &str, value: &str) -> TrackerResult<()> {
        write_text_atomic(self.path_for(key)?, value)
    }
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with raw values
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: RefCell::new(
                values
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> TrackerResult<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> TrackerResult<()> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        assert_eq!(store.get("budgets").unwrap(), None);
        store.set("budgets", "[]").unwrap();
        assert_eq!(store.get("budgets").unwrap().as_deref(), Some("[]"));
        assert!(temp_dir.path().join("budgets.json").exists());
    }

    #[test]
    fn test_file_store_rejects_path_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        assert!(store.set("../escape", "[]").is_err());
        assert!(store.get("").is_err());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::with_values([("transactions", "[]")]);
        assert_eq!(store.get("transactions").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.get("budgets").unwrap(), None);

        store.set("budgets", "[1]").unwrap();
        assert_eq!(store.get("budgets").unwrap().as_deref(), Some("[1]"));
    }
}
