//! The tracker: in-memory state container for transactions and budgets
//!
//! `Tracker` exclusively owns both collections. Every mutation updates
//! memory first, notifies subscribers, marks the collection dirty and, in
//! [`WriteMode::WriteThrough`], writes it back immediately. A failed write
//! never rolls back memory: the in-memory state stays authoritative and the
//! failure is reported through [`Tracker::last_persist_error`], a
//! [`StateChange::PersistFailed`] event and an error notification.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use fintrack::models::{Category, CategoryBudget, Money, NewTransaction};
//! use fintrack::storage::MemoryStore;
//! use fintrack::tracker::{Tracker, WriteMode};
//!
//! let mut tracker = Tracker::open(MemoryStore::new(), WriteMode::WriteThrough).unwrap();
//! let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
//! tracker.add_transaction(NewTransaction::new(
//!     Money::from_cents(5000),
//!     date,
//!     "Groceries",
//!     Category::Food,
//! ));
//! tracker.set_budget(CategoryBudget::new(Category::Food, Money::from_cents(20000)));
//! assert_eq!(tracker.get_budget(Category::Food), Money::from_cents(20000));
//! ```

pub mod events;
pub mod notification;
pub mod save_queue;

pub use events::{StateChange, Subscriber, SubscriptionId};
pub use notification::{Notification, NotificationKind, NotificationQueue};
pub use save_queue::{Collection, FlushReport, SaveQueue, WriteMode};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, CategoryBudget, Money, NewTransaction, Transaction, TransactionId};
use crate::storage::{KeyValueStore, RecordStore};

use events::Subscribers;

/// Shared source of truth for transactions and budgets
pub struct Tracker<S: KeyValueStore> {
    records: RecordStore<S>,
    transactions: Vec<Transaction>,
    budgets: Vec<CategoryBudget>,
    write_mode: WriteMode,
    save_queue: SaveQueue,
    last_persist_error: Option<String>,
    notifications: NotificationQueue,
    subscribers: Subscribers,
}

impl<S: KeyValueStore> Tracker<S> {
    /// Load both collections from `store`
    ///
    /// A collection whose saved text cannot be decoded starts empty and a
    /// single warning notification is queued for it. Other storage errors
    /// are returned.
    pub fn open(store: S, write_mode: WriteMode) -> TrackerResult<Self> {
        let records = RecordStore::new(store);
        let mut notifications = NotificationQueue::new();

        let transactions = load_or_warn(
            &records,
            Collection::Transactions,
            "Failed to load saved transactions",
            &mut notifications,
        )?;
        let budgets = load_or_warn(
            &records,
            Collection::Budgets,
            "Failed to load saved budgets",
            &mut notifications,
        )?;

        tracing::debug!(
            transactions = transactions.len(),
            budgets = budgets.len(),
            "loaded tracker state"
        );

        Ok(Self {
            records,
            transactions,
            budgets,
            write_mode,
            save_queue: SaveQueue::new(),
            last_persist_error: None,
            notifications,
            subscribers: Subscribers::default(),
        })
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// All budgets in insertion order
    pub fn budgets(&self) -> &[CategoryBudget] {
        &self.budgets
    }

    /// The transaction with exactly this id
    pub fn find_transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Resolve a full id, or an unambiguous prefix such as `txn-550e8400`
    pub fn resolve_id(&self, text: &str) -> TrackerResult<TransactionId> {
        if let Ok(id) = TransactionId::parse(text) {
            if self.find_transaction(id).is_some() {
                return Ok(id);
            }
        }

        let mut matches = self.transactions.iter().filter(|t| t.id.matches(text));
        match (matches.next(), matches.next()) {
            (Some(t), None) => Ok(t.id),
            (Some(_), Some(_)) => Err(TrackerError::Ambiguous(text.to_string())),
            (None, _) => Err(TrackerError::transaction_not_found(text)),
        }
    }

    /// Append a transaction under a fresh identifier
    pub fn add_transaction(&mut self, data: NewTransaction) -> Transaction {
        let mut id = TransactionId::new();
        while self.find_transaction(id).is_some() {
            id = TransactionId::new();
        }

        let transaction = data.with_id(id);
        self.transactions.push(transaction.clone());
        tracing::info!(id = %transaction.id, "transaction added");

        self.commit(
            Collection::Transactions,
            StateChange::TransactionAdded(transaction.clone()),
            "Transaction added",
        );
        transaction
    }

    /// Replace the transaction with the same id, keeping its position
    ///
    /// Returns `TrackerError::NotFound` and leaves the collection untouched
    /// if no transaction has that id.
    pub fn update_transaction(&mut self, transaction: Transaction) -> TrackerResult<Transaction> {
        let slot = self
            .transactions
            .iter_mut()
            .find(|t| t.id == transaction.id)
            .ok_or_else(|| TrackerError::transaction_not_found(transaction.id.to_string()))?;

        let before = std::mem::replace(slot, transaction.clone());
        tracing::info!(id = %transaction.id, "transaction updated");

        self.commit(
            Collection::Transactions,
            StateChange::TransactionUpdated {
                before,
                after: transaction.clone(),
            },
            "Transaction updated",
        );
        Ok(transaction)
    }

    /// Remove a transaction, returning it; `None` if no transaction had that id
    pub fn delete_transaction(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.transactions.iter().position(|t| t.id == id)?;
        let removed = self.transactions.remove(index);
        tracing::info!(id = %id, "transaction deleted");

        self.commit(
            Collection::Transactions,
            StateChange::TransactionDeleted(removed.clone()),
            "Transaction deleted",
        );
        Some(removed)
    }

    /// Insert or replace the budget for `budget.category`
    ///
    /// Returns the budget it replaced, if any.
    pub fn set_budget(&mut self, budget: CategoryBudget) -> Option<CategoryBudget> {
        let existing = self
            .budgets
            .iter()
            .position(|b| b.category == budget.category);
        let previous = match existing {
            Some(index) => Some(std::mem::replace(&mut self.budgets[index], budget)),
            None => {
                self.budgets.push(budget);
                None
            }
        };
        tracing::info!(
            category = budget.category.key(),
            amount = budget.amount.cents(),
            "budget set"
        );

        self.commit(
            Collection::Budgets,
            StateChange::BudgetSet { previous, budget },
            "Budget updated",
        );
        previous
    }

    /// Budget amount for a category, zero when none is set
    pub fn get_budget(&self, category: Category) -> Money {
        self.budgets
            .iter()
            .find(|b| b.category == category)
            .map(|b| b.amount)
            .unwrap_or_default()
    }

    /// Write every dirty collection back to the store
    ///
    /// Stops at the first failing write; collections that were not written
    /// stay dirty and will be retried by the next flush.
    pub fn flush(&mut self) -> TrackerResult<FlushReport> {
        let mut report = FlushReport::default();

        for collection in self.save_queue.pending() {
            let result = match collection {
                Collection::Transactions => {
                    self.records.save(collection.key(), &self.transactions)
                }
                Collection::Budgets => self.records.save(collection.key(), &self.budgets),
            };

            if let Err(e) = result {
                let err = TrackerError::Persist {
                    key: collection.key().to_string(),
                    message: e.to_string(),
                };
                tracing::error!(key = collection.key(), error = %e, "failed to persist collection");
                self.last_persist_error = Some(err.to_string());
                self.subscribers
                    .emit(&StateChange::PersistFailed(err.to_string()));
                return Err(err);
            }

            self.save_queue.clear(collection);
            report.written.push(collection);
        }

        self.last_persist_error = None;
        if !report.is_empty() {
            tracing::debug!(written = report.written.len(), "flushed tracker state");
            self.subscribers.emit(&StateChange::Persisted(report.clone()));
        }
        Ok(report)
    }

    /// When mutations are written back to the store
    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    /// Whether some mutation has not been written back yet
    pub fn has_unsaved_changes(&self) -> bool {
        !self.save_queue.is_empty()
    }

    /// Message of the most recent failed write, cleared by a successful flush
    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    /// Pending notifications, left in place
    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    /// Take all pending notifications
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }

    /// Register a callback invoked after every state change
    pub fn subscribe(&mut self, subscriber: Subscriber) -> SubscriptionId {
        self.subscribers.add(subscriber)
    }

    /// Remove a callback; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    /// Number of registered callbacks
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Access the underlying key-value store
    pub fn store(&self) -> &S {
        self.records.inner()
    }

    fn commit(&mut self, collection: Collection, change: StateChange, message: &str) {
        self.subscribers.emit(&change);
        self.save_queue.mark(collection);

        if self.write_mode == WriteMode::WriteThrough {
            if let Err(e) = self.flush() {
                self.notifications.push(Notification::error(e.to_string()));
            }
        }

        self.notifications.push(Notification::success(message));
    }
}

fn load_or_warn<S, T>(
    records: &RecordStore<S>,
    collection: Collection,
    warning: &str,
    notifications: &mut NotificationQueue,
) -> TrackerResult<Vec<T>>
where
    S: KeyValueStore,
    T: serde::de::DeserializeOwned,
{
    match records.load(collection.key()) {
        Ok(loaded) => Ok(loaded.unwrap_or_default()),
        Err(e) if e.is_decode() => {
            tracing::warn!(key = collection.key(), error = %e, "discarding unreadable saved data");
            notifications.push(Notification::warning(warning));
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}
