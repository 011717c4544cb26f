//! Transaction CLI commands
//!
//! Implements CLI commands for recording, editing, deleting and listing
//! transactions.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::error::TrackerResult;
use crate::models::NewTransaction;
use crate::reports::{SortDirection, SortKey, SortState, TransactionQuery};
use crate::storage::KeyValueStore;
use crate::tracker::Tracker;

use super::input::{parse_amount, parse_category, parse_date};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g., "12.50")
        amount: String,
        /// What the money was spent on (3-100 characters)
        description: String,
        /// Category key (housing, transportation, food, utilities,
        /// entertainment, shopping, healthcare, other)
        #[arg(short, long, default_value = "other")]
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions
    List {
        /// Only show transactions whose description contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Sort column: date, amount, description or category
        #[arg(long)]
        sort: Option<SortKey>,
        /// Sort ascending
        #[arg(long, conflicts_with = "desc")]
        asc: bool,
        /// Sort descending
        #[arg(long)]
        desc: bool,
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID (or a unique prefix)
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID (or a unique prefix)
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New category key
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID (or a unique prefix)
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    settings: &Settings,
    today: NaiveDate,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    match cmd {
        TransactionCommands::Add {
            amount,
            description,
            category,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let category = parse_category(&category)?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => today,
            };

            let data = NewTransaction::new(amount, date, description.trim(), category);
            data.validate()?;

            let txn = tracker.add_transaction(data);
            println!(
                "Added transaction: {} {} {} ({})",
                txn.id,
                settings.format_money(txn.amount),
                txn.description,
                txn.category
            );
        }

        TransactionCommands::List {
            search,
            sort,
            asc,
            desc,
            limit,
        } => {
            let query = TransactionQuery {
                search,
                sort: sort_state(sort, asc, desc),
                limit,
            };
            let rows = query.apply(tracker.transactions());
            print!("{}", format_transaction_register(&rows, settings));
        }

        TransactionCommands::Show { id } => {
            let id = tracker.resolve_id(&id)?;
            if let Some(txn) = tracker.find_transaction(id) {
                print!("{}", format_transaction_details(txn, settings));
            }
        }

        TransactionCommands::Edit {
            id,
            amount,
            description,
            category,
            date,
        } => {
            let id = tracker.resolve_id(&id)?;
            let Some(mut txn) = tracker.find_transaction(id).cloned() else {
                return Ok(());
            };

            let mut changed = false;
            if let Some(amount) = amount {
                txn.amount = parse_amount(&amount)?;
                changed = true;
            }
            if let Some(description) = description {
                txn.description = description.trim().to_string();
                changed = true;
            }
            if let Some(category) = category {
                txn.category = parse_category(&category)?;
                changed = true;
            }
            if let Some(date) = date {
                txn.date = parse_date(&date)?;
                changed = true;
            }

            if !changed {
                println!("Nothing to change. Pass --amount, --description, --category or --date.");
                return Ok(());
            }

            txn.validate()?;
            let updated = tracker.update_transaction(txn)?;
            println!("Updated transaction: {}", updated.id);
            print!("{}", format_transaction_details(&updated, settings));
        }

        TransactionCommands::Delete { id, yes } => {
            let id = tracker.resolve_id(&id)?;
            let Some(txn) = tracker.find_transaction(id) else {
                return Ok(());
            };

            if !yes {
                println!("About to delete transaction:");
                println!("  Date:        {}", settings.format_date(txn.date));
                println!("  Amount:      {}", settings.format_money(txn.amount));
                println!("  Description: {}", txn.description);
                println!();
                println!("Use --yes to confirm deletion");
                return Ok(());
            }

            if let Some(deleted) = tracker.delete_transaction(id) {
                println!(
                    "Deleted transaction: {} ({} {})",
                    deleted.id,
                    settings.format_date(deleted.date),
                    deleted.description
                );
            }
        }
    }

    Ok(())
}

/// Sort order for `transaction list`
///
/// Without a direction flag dates sort newest first and every other column
/// ascending.
fn sort_state(key: Option<SortKey>, asc: bool, desc: bool) -> SortState {
    let key = key.unwrap_or_default();
    let direction = if asc {
        SortDirection::Ascending
    } else if desc || key == SortKey::Date {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    SortState::new(key, direction)
}
