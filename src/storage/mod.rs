//! Storage layer for fintrack
//!
//! Provides key-value persistence with atomic JSON file writes and a record
//! adapter that loads and saves whole collections.

pub mod file_io;
pub mod kv;
pub mod records;

pub use file_io::{read_text, write_text_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use records::{RecordStore, BUDGETS_KEY, TRANSACTIONS_KEY};
