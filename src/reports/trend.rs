//! Monthly Trend Report
//!
//! Total spending in each of the last six calendar months.

use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::{Money, Month, Transaction};

/// Number of months in the trend window, current month included
pub const TREND_MONTHS: u32 = 6;

/// Width of the longest bar in the terminal chart
const BAR_WIDTH: usize = 30;

/// Spending in one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBucket {
    pub month: Month,
    pub total: Money,
    pub transaction_count: usize,
}

impl MonthBucket {
    /// "Jan"
    pub fn label(&self) -> &'static str {
        self.month.short_label()
    }

    /// "Jan 2025"
    pub fn label_with_year(&self) -> String {
        self.month.label_with_year()
    }
}

/// Spending over the trailing six months
#[derive(Debug, Clone)]
pub struct MonthlyTrend {
    /// Oldest month first; the last bucket is the current month
    pub buckets: Vec<MonthBucket>,
}

impl MonthlyTrend {
    /// Bucket transactions into the six months ending with the month of `today`
    ///
    /// Transactions outside the window are ignored.
    pub fn generate(transactions: &[Transaction], today: NaiveDate) -> Self {
        let current = Month::containing(today);
        let mut buckets: Vec<MonthBucket> = (0..TREND_MONTHS)
            .rev()
            .map(|back| MonthBucket {
                month: current.months_back(back),
                total: Money::zero(),
                transaction_count: 0,
            })
            .collect();

        for txn in transactions {
            let month = Month::containing(txn.date);
            if let Some(bucket) = buckets.iter_mut().find(|b| b.month == month) {
                bucket.total += txn.amount;
                bucket.transaction_count += 1;
            }
        }

        Self { buckets }
    }

    /// Sum over the whole window
    pub fn total(&self) -> Money {
        self.buckets.iter().map(|b| b.total).sum()
    }

    /// Format the report as a horizontal bar chart
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        output.push_str("Monthly Expenses (last 6 months)\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        let max = self
            .buckets
            .iter()
            .map(|b| b.total.cents())
            .max()
            .unwrap_or(0);

        for bucket in &self.buckets {
            let bar_len = if max > 0 && bucket.total.is_positive() {
                ((bucket.total.cents() as f64 / max as f64) * BAR_WIDTH as f64).ceil() as usize
            } else {
                0
            };
            output.push_str(&format!(
                "{:<9} {:>12}  {}\n",
                bucket.label_with_year(),
                settings.format_money(bucket.total),
                "█".repeat(bar_len)
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<9} {:>12}\n",
            "TOTAL",
            settings.format_money(self.total())
        ));

        output
    }
}
