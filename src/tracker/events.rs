//! State change events and subscriptions

use crate::models::{CategoryBudget, Transaction};

use super::save_queue::FlushReport;

/// Something that changed in the tracker
#[derive(Debug, Clone, PartialEq)]
pub enum StateChange {
    TransactionAdded(Transaction),
    TransactionUpdated {
        before: Transaction,
        after: Transaction,
    },
    TransactionDeleted(Transaction),
    BudgetSet {
        previous: Option<CategoryBudget>,
        budget: CategoryBudget,
    },
    Persisted(FlushReport),
    PersistFailed(String),
}

/// Handle returned by `Tracker::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Callback invoked with every change
pub type Subscriber = Box<dyn FnMut(&StateChange)>;

/// Registered subscribers in registration order
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Subscriber)>,
}

impl Subscribers {
    pub(crate) fn add(&mut self, subscriber: Subscriber) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, subscriber));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(sid, _)| *sid != id);
        self.entries.len() != before
    }

    pub(crate) fn emit(&mut self, change: &StateChange) {
        for (_, subscriber) in self.entries.iter_mut() {
            subscriber(change);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
