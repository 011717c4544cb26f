//! Category display formatting

use crate::config::Settings;
use crate::models::{Category, CategoryBudget};

/// List every category with its key and, when set, its monthly budget
pub fn format_category_list(budgets: &[CategoryBudget], settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!("{:<16} {:<18} {:>12}\n", "Key", "Category", "Budget"));
    output.push_str(&"-".repeat(48));
    output.push('\n');

    for category in Category::ALL {
        let budget = budgets
            .iter()
            .find(|b| b.category == category)
            .map(|b| settings.format_money(b.amount))
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "{:<16} {:<18} {:>12}\n",
            category.key(),
            category.label(),
            budget
        ));
    }

    output
}
