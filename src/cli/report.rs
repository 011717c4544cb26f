//! CLI commands for reports

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::error::TrackerResult;
use crate::models::Month;
use crate::reports::{BudgetComparison, CategoryDistribution, MonthlyTrend};
use crate::storage::KeyValueStore;
use crate::tracker::Tracker;

use super::input::parse_month;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Budget vs. actual spending for a month
    #[command(alias = "budget")]
    Month {
        /// Month to report on (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Spending in each of the last six months
    Trend,

    /// Lifetime spending by category
    #[command(alias = "spending")]
    Categories,
}

/// Handle a report command
pub fn handle_report_command<S: KeyValueStore>(
    tracker: &Tracker<S>,
    settings: &Settings,
    today: NaiveDate,
    cmd: ReportCommands,
) -> TrackerResult<()> {
    match cmd {
        ReportCommands::Month { month } => {
            let month = match month {
                Some(m) => parse_month(&m)?,
                None => Month::containing(today),
            };
            let report =
                BudgetComparison::generate(tracker.budgets(), tracker.transactions(), month);
            print!("{}", report.format_terminal(settings));
        }

        ReportCommands::Trend => {
            let report = MonthlyTrend::generate(tracker.transactions(), today);
            print!("{}", report.format_terminal(settings));
        }

        ReportCommands::Categories => {
            let report = CategoryDistribution::generate(tracker.transactions());
            print!("{}", report.format_terminal(settings));
        }
    }

    Ok(())
}
