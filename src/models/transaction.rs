//! Transaction model
//!
//! A transaction is a single dated expense with a description and a category.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;
use super::validation::ValidationError;

/// Minimum description length accepted at entry time
pub const DESCRIPTION_MIN_LEN: usize = 3;
/// Maximum description length accepted at entry time
pub const DESCRIPTION_MAX_LEN: usize = 100;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned by the tracker
    pub id: TransactionId,

    /// Amount spent
    pub amount: Money,

    /// Transaction date
    pub date: NaiveDate,

    /// Free-text description
    pub description: String,

    /// Spending category
    pub category: Category,
}

/// Transaction data without an identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub amount: Money,
    pub date: NaiveDate,
    pub description: String,
    pub category: Category,
}

impl NewTransaction {
    /// Create transaction data
    pub fn new(
        amount: Money,
        date: NaiveDate,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            amount,
            date,
            description: description.into(),
            category,
        }
    }

    /// Check the entry-time rules: a positive amount and a 3-100 character description
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(self.amount, &self.description)
    }

    /// Attach an identifier, producing a stored transaction
    pub fn with_id(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            amount: self.amount,
            date: self.date,
            description: self.description,
            category: self.category,
        }
    }
}

impl Transaction {
    /// Check the same entry-time rules as [`NewTransaction::validate`], used on edit
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(self.amount, &self.description)
    }

    /// Whether the description contains `term`, ignoring case
    pub fn description_matches(&self, term: &str) -> bool {
        self.description
            .to_lowercase()
            .contains(&term.to_lowercase())
    }
}

fn validate_fields(amount: Money, description: &str) -> Result<(), ValidationError> {
    if !amount.is_positive() {
        return Err(ValidationError::AmountNotPositive);
    }

    let len = description.trim().chars().count();
    if len < DESCRIPTION_MIN_LEN {
        return Err(ValidationError::DescriptionTooShort);
    }
    if len > DESCRIPTION_MAX_LEN {
        return Err(ValidationError::DescriptionTooLong(len));
    }

    Ok(())
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.category
        )
    }
}
