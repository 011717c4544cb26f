//! Budget vs. Actual Report
//!
//! Compares each budget against the spending recorded in its category during
//! one month.

use crate::config::Settings;
use crate::models::{Category, CategoryBudget, Money, Month, Transaction};

use super::month_totals::month_category_totals;

/// One budgeted category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetComparisonRow {
    pub category: Category,
    /// Monthly limit
    pub budget: Money,
    /// Spending in the month
    pub spent: Money,
}

impl BudgetComparisonRow {
    /// Budget left over (negative when overspent)
    pub fn remaining(&self) -> Money {
        self.budget - self.spent
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budget
    }

    /// Spending as a percentage of the budget, `None` for a zero budget
    pub fn percent_used(&self) -> Option<f64> {
        if self.budget.is_zero() {
            None
        } else {
            Some(self.spent.as_f64() / self.budget.as_f64() * 100.0)
        }
    }
}

/// Budget vs. actual spending for a month
#[derive(Debug, Clone)]
pub struct BudgetComparison {
    pub month: Month,
    /// One row per budget, in budget order
    pub rows: Vec<BudgetComparisonRow>,
}

impl BudgetComparison {
    /// Build the comparison for `month`
    pub fn generate(budgets: &[CategoryBudget], transactions: &[Transaction], month: Month) -> Self {
        let totals = month_category_totals(transactions, month);

        let rows = budgets
            .iter()
            .map(|b| BudgetComparisonRow {
                category: b.category,
                budget: b.amount,
                spent: totals.get(&b.category).copied().unwrap_or_default(),
            })
            .collect();

        Self { month, rows }
    }

    pub fn total_budget(&self) -> Money {
        self.rows.iter().map(|r| r.budget).sum()
    }

    pub fn total_spent(&self) -> Money {
        self.rows.iter().map(|r| r.spent).sum()
    }

    pub fn over_budget(&self) -> impl Iterator<Item = &BudgetComparisonRow> {
        self.rows.iter().filter(|r| r.is_over_budget())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Budget vs. Actual: {}\n",
            self.month.label_with_year()
        ));
        output.push_str(&"=".repeat(64));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No budgets set. Use 'fintrack budget set' to add one.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<18} {:>12} {:>12} {:>12} {:>6}\n",
            "Category", "Budget", "Spent", "Remaining", "%"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for row in &self.rows {
            let percent = row
                .percent_used()
                .map(|p| format!("{:.0}", p))
                .unwrap_or_else(|| "-".to_string());
            let flag = if row.is_over_budget() { " ⚠" } else { "" };
            output.push_str(&format!(
                "{:<18} {:>12} {:>12} {:>12} {:>6}{}\n",
                row.category.label(),
                settings.format_money(row.budget),
                settings.format_money(row.spent),
                settings.format_money(row.remaining()),
                percent,
                flag
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<18} {:>12} {:>12} {:>12}\n",
            "TOTAL",
            settings.format_money(self.total_budget()),
            settings.format_money(self.total_spent()),
            settings.format_money(self.total_budget() - self.total_spent())
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewTransaction, TransactionId};
    use chrono::NaiveDate;

    fn txn(y: i32, m: u32, d: u32, cents: i64, category: Category) -> Transaction {
        NewTransaction::new(
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            "Test purchase",
            category,
        )
        .with_id(TransactionId::new())
    }

    #[test]
    fn test_rows_follow_budget_order() {
        let budgets = vec![
            CategoryBudget::new(Category::Housing, Money::from_cents(100000)),
            CategoryBudget::new(Category::Food, Money::from_cents(20000)),
        ];
        let transactions = vec![
            txn(2025, 2, 3, 5000, Category::Food),
            txn(2025, 2, 9, 2500, Category::Entertainment),
        ];

        let report = BudgetComparison::generate(&budgets, &transactions, Month::new(2025, 2).unwrap());
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].category, Category::Housing);
        assert!(report.rows[0].spent.is_zero());
        assert_eq!(report.rows[1].spent.cents(), 5000);
        assert_eq!(report.rows[1].remaining().cents(), 15000);
        assert_eq!(report.total_spent().cents(), 5000);
    }

    #[test]
    fn test_over_budget() {
        let budgets = vec![CategoryBudget::new(Category::Shopping, Money::from_cents(1000))];
        let transactions = vec![txn(2025, 2, 3, 1500, Category::Shopping)];

        let report = BudgetComparison::generate(&budgets, &transactions, Month::new(2025, 2).unwrap());
        let row = &report.rows[0];
        assert!(row.is_over_budget());
        assert_eq!(row.remaining().cents(), -500);
        assert_eq!(row.percent_used(), Some(150.0));
        assert_eq!(report.over_budget().count(), 1);
        let text = report.format_terminal(&Settings::default());
        assert!(text.contains("⚠"));
        assert!(text.contains("-$5.00"));
    }

    #[test]
    fn test_other_months_ignored() {
        let budgets = vec![CategoryBudget::new(Category::Food, Money::from_cents(20000))];
        let transactions = vec![txn(2025, 1, 31, 5000, Category::Food)];

        let report = BudgetComparison::generate(&budgets, &transactions, Month::new(2025, 2).unwrap());
        assert!(report.rows[0].spent.is_zero());
    }

    #[test]
    fn test_zero_budget_percent() {
        let row = BudgetComparisonRow {
            category: Category::Other,
            budget: Money::zero(),
            spent: Money::from_cents(100),
        };
        assert_eq!(row.percent_used(), None);
    }

    #[test]
    fn test_empty_report_message() {
        let report = BudgetComparison::generate(&[], &[], Month::new(2025, 2).unwrap());
        assert!(report.is_empty());
        assert!(report
            .format_terminal(&Settings::default())
            .contains("No budgets set"));
    }
}
