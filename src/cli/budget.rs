//! Budget CLI commands
//!
//! Setting and listing the monthly spending limit per category.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::budget::{format_budget_change, format_budget_list};
use crate::error::TrackerResult;
use crate::models::CategoryBudget;
use crate::storage::KeyValueStore;
use crate::tracker::Tracker;

use super::input::{parse_budget_amount, parse_category};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly budget for a category, replacing any previous one
    Set {
        /// Category key
        category: String,
        /// Monthly amount (e.g., "200" or "200.00"); zero is allowed
        amount: String,
    },

    /// List the budgets that are set
    #[command(alias = "list")]
    Show,
}

/// Handle a budget command
pub fn handle_budget_command<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    match cmd {
        BudgetCommands::Set { category, amount } => {
            let budget = CategoryBudget::new(
                parse_category(&category)?,
                parse_budget_amount(&amount)?,
            );
            budget.validate()?;

            let previous = tracker.set_budget(budget);
            println!("{}", format_budget_change(previous.as_ref(), &budget, settings));
        }

        BudgetCommands::Show => {
            print!("{}", format_budget_list(tracker.budgets(), settings));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, ValidationError};
    use crate::storage::MemoryStore;
    use crate::tracker::WriteMode;

    fn set(tracker: &mut Tracker<MemoryStore>, category: &str, amount: &str) -> TrackerResult<()> {
        handle_budget_command(
            tracker,
            &Settings::default(),
            BudgetCommands::Set {
                category: category.into(),
                amount: amount.into(),
            },
        )
    }

    #[test]
    fn test_set_replaces_previous() {
        let mut tracker = Tracker::open(MemoryStore::new(), WriteMode::Deferred).unwrap();
        set(&mut tracker, "food", "200").unwrap();
        set(&mut tracker, "Food", "250.00").unwrap();

        assert_eq!(tracker.budgets().len(), 1);
        assert_eq!(tracker.get_budget(Category::Food), Money::from_cents(25000));
    }

    #[test]
    fn test_set_rejects_negative() {
        let mut tracker = Tracker::open(MemoryStore::new(), WriteMode::Deferred).unwrap();
        let err = set(&mut tracker, "food", "-10").unwrap_err();

        assert!(matches!(
            err,
            crate::error::TrackerError::Validation(ValidationError::NegativeBudget)
        ));
        assert!(tracker.budgets().is_empty());
    }

    #[test]
    fn test_set_rejects_unknown_category() {
        let mut tracker = Tracker::open(MemoryStore::new(), WriteMode::Deferred).unwrap();
        assert!(set(&mut tracker, "groceries", "10").unwrap_err().is_validation());
    }
}
