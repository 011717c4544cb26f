//! Collection persistence on top of a key-value store
//!
//! Each collection is stored as a single JSON array under its key and is
//! always written in full.

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{TrackerError, TrackerResult};

use super::kv::KeyValueStore;

/// Key holding the transaction collection
pub const TRANSACTIONS_KEY: &str = "transactions";
/// Key holding the budget collection
pub const BUDGETS_KEY: &str = "budgets";

/// Reads and writes whole record collections
#[derive(Debug, Clone)]
pub struct RecordStore<S> {
    store: S,
}

impl<S: KeyValueStore> RecordStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying key-value store
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Load the collection under `key`
    ///
    /// Returns `Ok(None)` when nothing was saved under the key and
    /// `Err(TrackerError::Decode)` when the saved text is malformed.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> TrackerResult<Option<Vec<T>>> {
        let Some(text) = self.store.get(key)? else {
            return Ok(None);
        };

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| TrackerError::Decode {
                key: key.to_string(),
                message: e.to_string(),
            })
    }

    /// Replace the collection under `key` with `records`
    pub fn save<T: Serialize>(&self, key: &str, records: &[T]) -> TrackerResult<()> {
        let text = serde_json::to_string_pretty(records)
            .map_err(|e| TrackerError::Json(format!("Failed to serialize {}: {}", key, e)))?;
        self.store.set(key, &text)
    }
}
