//! Category Distribution Report
//!
//! Lifetime spending per category and each category's share of the total.

use std::collections::BTreeMap;

use crate::config::Settings;
use crate::models::{Category, Money, Transaction};

/// Spending in one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub total: Money,
    pub transaction_count: usize,
    /// Percentage of the overall total
    pub percentage: f64,
}

/// Lifetime spending broken down by category
#[derive(Debug, Clone)]
pub struct CategoryDistribution {
    /// Categories with a positive total, in category order
    pub rows: Vec<CategoryShare>,
    /// Sum of all rows
    pub total: Money,
}

impl CategoryDistribution {
    /// Sum every transaction by category, dropping categories whose total is not positive
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut totals: BTreeMap<Category, (Money, usize)> = BTreeMap::new();
        for txn in transactions {
            let entry = totals.entry(txn.category).or_insert((Money::zero(), 0));
            entry.0 += txn.amount;
            entry.1 += 1;
        }

        let kept: Vec<_> = totals
            .into_iter()
            .filter(|(_, (total, _))| total.is_positive())
            .collect();
        let total: Money = kept.iter().map(|(_, (t, _))| *t).sum();

        let rows = kept
            .into_iter()
            .map(|(category, (amount, count))| CategoryShare {
                category,
                total: amount,
                transaction_count: count,
                percentage: if total.is_zero() {
                    0.0
                } else {
                    amount.as_f64() / total.as_f64() * 100.0
                },
            })
            .collect();

        Self { rows, total }
    }

    /// Total for one category, zero if it has no spending
    pub fn total_for(&self, category: Category) -> Money {
        self.rows
            .iter()
            .find(|r| r.category == category)
            .map(|r| r.total)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        output.push_str("Spending by Category\n");
        output.push_str(&"=".repeat(56));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("Add transactions to see category breakdown.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<18} {:>12} {:>8} {:>8}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(56));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<18} {:>12} {:>8} {:>7.1}%\n",
                row.category.label(),
                settings.format_money(row.total),
                row.transaction_count,
                row.percentage
            ));
        }

        output.push_str(&"-".repeat(56));
        output.push('\n');
        output.push_str(&format!(
            "{:<18} {:>12}\n",
            "TOTAL",
            settings.format_money(self.total)
        ));

        output
    }
}
