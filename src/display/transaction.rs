//! Transaction display formatting
//!
//! The register table and the single-transaction detail view.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{Money, Transaction};

/// Widest description shown in the register
const DESCRIPTION_WIDTH: usize = 32;

#[derive(Tabled)]
struct RegisterRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format transactions as a register table, in the order given
pub fn format_transaction_register(transactions: &[&Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions.iter().map(|txn| RegisterRow {
        id: txn.id.short(),
        date: settings.format_date(txn.date),
        description: truncate(&txn.description, DESCRIPTION_WIDTH),
        category: txn.category.label().to_string(),
        amount: settings.format_money(txn.amount),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::single(4), Alignment::right());

    let total: Money = transactions.iter().map(|t| t.amount).sum();
    format!(
        "{}\n{} transaction(s), total {}\n",
        table,
        transactions.len(),
        settings.format_money(total)
    )
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", settings.format_date(txn.date)));
    output.push_str(&format!("Amount:      {}\n", settings.format_money(txn.amount)));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!("Category:    {}\n", txn.category.label()));

    output
}

/// Cut a string to at most `max_chars` characters, marking the cut with "..."
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, NewTransaction, TransactionId};
    use chrono::NaiveDate;

    fn groceries() -> Transaction {
        NewTransaction::new(
            Money::from_cents(5000),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            "Groceries",
            Category::Food,
        )
        .with_id(TransactionId::new())
    }

    #[test]
    fn test_register() {
        let txn = groceries();
        let formatted = format_transaction_register(&[&txn], &Settings::default());

        assert!(formatted.contains(&txn.id.short()));
        assert!(formatted.contains("Jan 15, 2025"));
        assert!(formatted.contains("Groceries"));
        assert!(formatted.contains("Food"));
        assert!(formatted.contains("$50.00"));
        assert!(formatted.contains("1 transaction(s), total $50.00"));
    }

    #[test]
    fn test_register_uses_currency_symbol() {
        let settings = Settings {
            currency_symbol: "€".into(),
            ..Default::default()
        };
        let formatted = format_transaction_register(&[&groceries()], &settings);
        assert!(formatted.contains("€50.00"));
    }

    #[test]
    fn test_format_empty_register() {
        let formatted = format_transaction_register(&[], &Settings::default());
        assert!(formatted.contains("No transactions found"));
    }

    #[test]
    fn test_format_transaction_details() {
        let formatted = format_transaction_details(&groceries(), &Settings::default());
        assert!(formatted.contains("Description: Groceries"));
        assert!(formatted.contains("Category:    Food"));
        assert!(formatted.contains("Amount:      $50.00"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10), "Short");
        let result = truncate("A very long string", 10);
        assert_eq!(result, "A very ...");
        assert_eq!(truncate("ééééééééééé", 5).chars().count(), 5);
    }
}
