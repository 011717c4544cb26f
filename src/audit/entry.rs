//! Audit log records

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{CategoryBudget, Transaction};
use crate::tracker::StateChange;

use super::diff::summarize_changes;

/// What happened to the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Update,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

/// Which collection the record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Transaction,
    Budget,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transaction => "Transaction",
            Self::Budget => "Budget",
        }
    }
}

/// One line of the audit log
///
/// `key` is the full transaction uuid, or the category key for budgets.
/// `before` is absent for creates and `after` for deletes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub at: DateTime<Utc>,
    pub action: Action,
    pub kind: RecordKind,
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<String>,
}

impl AuditEntry {
    /// The entry recording a tracker change
    ///
    /// Persistence events are not record changes and yield `None`.
    pub fn from_change(change: &StateChange) -> Option<Self> {
        let entry = match change {
            StateChange::TransactionAdded(txn) => {
                Self::for_transaction(Action::Create, txn, None, Some(txn))
            }
            StateChange::TransactionUpdated { before, after } => {
                Self::for_transaction(Action::Update, after, Some(before), Some(after))
            }
            StateChange::TransactionDeleted(txn) => {
                Self::for_transaction(Action::Delete, txn, Some(txn), None)
            }
            StateChange::BudgetSet { previous, budget } => {
                Self::for_budget(previous.as_ref(), budget)
            }
            StateChange::Persisted(_) | StateChange::PersistFailed(_) => return None,
        };
        Some(entry)
    }

    fn for_transaction(
        action: Action,
        txn: &Transaction,
        before: Option<&Transaction>,
        after: Option<&Transaction>,
    ) -> Self {
        Self::build(
            action,
            RecordKind::Transaction,
            txn.id.as_uuid().to_string(),
            txn.description.clone(),
            before.and_then(|t| serde_json::to_value(t).ok()),
            after.and_then(|t| serde_json::to_value(t).ok()),
        )
    }

    /// A category's first budget is a create, later ones are updates
    fn for_budget(previous: Option<&CategoryBudget>, budget: &CategoryBudget) -> Self {
        let action = match previous {
            Some(_) => Action::Update,
            None => Action::Create,
        };
        Self::build(
            action,
            RecordKind::Budget,
            budget.category.key().to_string(),
            budget.category.label().to_string(),
            previous.and_then(|b| serde_json::to_value(b).ok()),
            serde_json::to_value(budget).ok(),
        )
    }

    fn build(
        action: Action,
        kind: RecordKind,
        key: String,
        label: String,
        before: Option<Value>,
        after: Option<Value>,
    ) -> Self {
        let changes = match (&before, &after) {
            (Some(b), Some(a)) => summarize_changes(b, a),
            _ => None,
        };
        Self {
            at: Utc::now(),
            action,
            kind,
            key,
            label,
            before,
            after,
            changes,
        }
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} {} ({})",
            self.at.format("%Y-%m-%d %H:%M:%S UTC"),
            self.action.as_str(),
            self.kind.as_str(),
            self.key,
            self.label
        )?;
        if let Some(changes) = &self.changes {
            write!(f, "\n  Changes: {}", changes)?;
        }
        Ok(())
    }
}
