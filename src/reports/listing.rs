//! Transaction listing
//!
//! Search and sort over a snapshot of transactions.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::Transaction;

/// Column a listing is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Date,
    Amount,
    Description,
    Category,
}

impl SortKey {
    fn compare(self, a: &Transaction, b: &Transaction) -> Ordering {
        match self {
            Self::Date => a.date.cmp(&b.date),
            Self::Amount => a.amount.cmp(&b.amount),
            Self::Description => a
                .description
                .to_lowercase()
                .cmp(&b.description.to_lowercase()),
            Self::Category => a.category.key().cmp(b.category.key()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Date => "date",
            Self::Amount => "amount",
            Self::Description => "description",
            Self::Category => "category",
        };
        f.pad(name)
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "amount" => Ok(Self::Amount),
            "description" => Ok(Self::Description),
            "category" => Ok(Self::Category),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Current sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    /// Newest first
    fn default() -> Self {
        Self {
            key: SortKey::Date,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Select a column the way a clickable table header does
    ///
    /// Selecting the current key while ascending flips to descending. Any
    /// other selection sorts by `key` ascending.
    pub fn toggle(self, key: SortKey) -> Self {
        if self.key == key && self.direction == SortDirection::Ascending {
            Self::new(key, SortDirection::Descending)
        } else {
            Self::new(key, SortDirection::Ascending)
        }
    }

    fn compare(&self, a: &Transaction, b: &Transaction) -> Ordering {
        let ordering = self.key.compare(a, b);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Search, sort and limit options for a transaction listing
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    /// Case-insensitive description substring; empty matches everything
    pub search: Option<String>,
    pub sort: SortState,
    /// Keep at most this many rows after sorting
    pub limit: Option<usize>,
}

impl TransactionQuery {
    /// Check if a transaction matches the search term
    pub fn matches(&self, txn: &Transaction) -> bool {
        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => txn.description_matches(term),
            _ => true,
        }
    }

    /// Filter then sort `transactions`
    ///
    /// The sort is stable, so equal keys keep their stored order.
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        let mut rows: Vec<&Transaction> = transactions.iter().filter(|t| self.matches(t)).collect();
        rows.sort_by(|a, b| self.sort.compare(a, b));
        if let Some(limit) = self.limit {
            rows.truncate(limit);
        }
        rows
    }
}
