//! Per-category spending within one calendar month

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Category, Money, Month, Transaction};

/// Sum of amounts by category for transactions dated inside `month`
///
/// Both the first and the last day of the month are included.
pub fn month_category_totals(transactions: &[Transaction], month: Month) -> BTreeMap<Category, Money> {
    let mut totals = BTreeMap::new();

    for txn in transactions.iter().filter(|t| month.contains(t.date)) {
        *totals.entry(txn.category).or_insert_with(Money::zero) += txn.amount;
    }

    totals
}

/// [`month_category_totals`] for the month containing `today`
pub fn current_month_category_totals(
    transactions: &[Transaction],
    today: NaiveDate,
) -> BTreeMap<Category, Money> {
    month_category_totals(transactions, Month::containing(today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewTransaction, TransactionId};

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
    fn test_window_includes_first_and_last_day() {
        let today = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
        let transactions = vec![
            txn(2025, 4, 1, 100, Category::Food),
            txn(2025, 4, 15, 200, Category::Food),
            txn(2025, 4, 30, 400, Category::Food),
            txn(2025, 5, 1, 800, Category::Food),
            txn(2025, 3, 31, 1600, Category::Food),
        ];

        let totals = current_month_category_totals(&transactions, today);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[&Category::Food].cents(), 700);
    }

    #[test]
    fn test_grouped_by_category() {
        let month = Month::new(2025, 1).unwrap();
        let transactions = vec![
            txn(2025, 1, 3, 1000, Category::Food),
            txn(2025, 1, 4, 2500, Category::Transportation),
            txn(2025, 1, 5, 500, Category::Food),
        ];

        let totals = month_category_totals(&transactions, month);
        assert_eq!(totals[&Category::Food].cents(), 1500);
        assert_eq!(totals[&Category::Transportation].cents(), 2500);
        assert!(!totals.contains_key(&Category::Housing));
    }

    #[test]
    fn test_same_month_other_year_excluded() {
        let month = Month::new(2025, 1).unwrap();
        let transactions = vec![txn(2024, 1, 15, 1000, Category::Food)];
        assert!(month_category_totals(&transactions, month).is_empty());
    }
}
