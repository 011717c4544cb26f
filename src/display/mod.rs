//! Display formatting for terminal output
//!
//! Formats transactions, budgets, categories and notifications using the
//! user's currency symbol and date format.

pub mod budget;
pub mod category;
pub mod notification;
pub mod transaction;

pub use budget::{format_budget_change, format_budget_list};
pub use category::format_category_list;
pub use notification::format_notification;
pub use transaction::{format_transaction_details, format_transaction_register};
