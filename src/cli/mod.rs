//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the tracker. Handlers validate input before
//! anything reaches the tracker and leave flushing to the caller.

pub mod budget;
pub mod input;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
