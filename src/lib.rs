//! fintrack - personal expense tracker
//!
//! This library provides the core of the fintrack command-line tracker:
//! dated expenses in a fixed set of categories, one monthly budget per
//! category, and reports derived from both.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, budgets, categories, money)
//! - `storage`: Key-value persistence and the collection codec
//! - `tracker`: The in-memory state container with save queue and subscriptions
//! - `reports`: Pure aggregations over tracker snapshots
//! - `audit`: Append-only audit log of record changes
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::{Settings, TrackerPaths};
//! use fintrack::storage::FileStore;
//! use fintrack::tracker::Tracker;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let tracker = Tracker::open(FileStore::new(paths.data_dir()), settings.write_mode)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;
pub mod tracker;

pub use error::{TrackerError, TrackerResult};
