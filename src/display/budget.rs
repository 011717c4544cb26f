//! Budget display formatting

use crate::config::Settings;
use crate::models::CategoryBudget;

/// Format the configured budgets, one line per category in budget order
pub fn format_budget_list(budgets: &[CategoryBudget], settings: &Settings) -> String {
    if budgets.is_empty() {
        return "No budgets set. Use 'fintrack budget set <category> <amount>' to add one.\n"
            .to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:<18} {:>12}\n", "Category", "Monthly"));
    output.push_str(&"-".repeat(31));
    output.push('\n');

    for budget in budgets {
        output.push_str(&format!(
            "{:<18} {:>12}\n",
            budget.category.label(),
            settings.format_money(budget.amount)
        ));
    }

    output
}

/// Format the result of setting a budget
pub fn format_budget_change(
    previous: Option<&CategoryBudget>,
    budget: &CategoryBudget,
    settings: &Settings,
) -> String {
    match previous {
        Some(old) if old.amount != budget.amount => format!(
            "{} budget: {} -> {}",
            budget.category.label(),
            settings.format_money(old.amount),
            settings.format_money(budget.amount)
        ),
        _ => format!(
            "{} budget: {}",
            budget.category.label(),
            settings.format_money(budget.amount)
        ),
    }
}
