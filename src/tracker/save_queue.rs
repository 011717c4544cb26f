//! Pending-write bookkeeping
//!
//! Mutations only mark a collection dirty; `Tracker::flush` writes what is
//! pending and clears a mark only after its write succeeded.

use serde::{Deserialize, Serialize};

use crate::storage::{BUDGETS_KEY, TRANSACTIONS_KEY};

/// When dirty collections are written back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WriteMode {
    /// Flush immediately after every mutation
    WriteThrough,
    /// Leave flushing to the caller
    #[default]
    Deferred,
}

/// A persisted collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Transactions,
    Budgets,
}

impl Collection {
    /// Storage key of the collection
    pub fn key(&self) -> &'static str {
        match self {
            Self::Transactions => TRANSACTIONS_KEY,
            Self::Budgets => BUDGETS_KEY,
        }
    }
}

/// Tracks which collections have unsaved changes
#[derive(Debug, Default, Clone)]
pub struct SaveQueue {
    transactions: bool,
    budgets: bool,
}

impl SaveQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, collection: Collection) {
        *self.slot(collection) = true;
    }

    pub fn clear(&mut self, collection: Collection) {
        *self.slot(collection) = false;
    }

    pub fn is_pending(&self, collection: Collection) -> bool {
        match collection {
            Collection::Transactions => self.transactions,
            Collection::Budgets => self.budgets,
        }
    }

    /// Collections awaiting a write, transactions first
    pub fn pending(&self) -> Vec<Collection> {
        [Collection::Transactions, Collection::Budgets]
            .into_iter()
            .filter(|c| self.is_pending(*c))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        !self.transactions && !self.budgets
    }

    fn slot(&mut self, collection: Collection) -> &mut bool {
        match collection {
            Collection::Transactions => &mut self.transactions,
            Collection::Budgets => &mut self.budgets,
        }
    }
}

/// Collections written by one flush
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlushReport {
    pub written: Vec<Collection>,
}

impl FlushReport {
    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }
}
