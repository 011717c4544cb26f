//! Core data models for fintrack
//!
//! This module contains the data structures of the tracking domain:
//! transactions, category budgets, the fixed category set and money amounts.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;
pub mod validation;

pub use budget::CategoryBudget;
pub use category::{Category, CategoryParseError};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use period::{Month, MonthParseError};
pub use transaction::{NewTransaction, Transaction};
pub use validation::ValidationError;
