//! Category budget model
//!
//! A budget is a monthly spending ceiling for one category. There is at most
//! one budget per category; setting a budget replaces any previous one.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;
use super::validation::ValidationError;

/// A monthly spending limit for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBudget {
    /// The category this limit applies to
    pub category: Category,

    /// Monthly limit
    pub amount: Money,
}

impl CategoryBudget {
    /// Create a new budget
    pub fn new(category: Category, amount: Money) -> Self {
        Self { category, amount }
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.amount.is_negative() {
            return Err(ValidationError::NegativeBudget);
        }

        Ok(())
    }
}

impl fmt::Display for CategoryBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} budget: {}", self.category, self.amount)
    }
}
