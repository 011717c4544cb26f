//! Reports module for fintrack
//!
//! Derived views over a snapshot of transactions and budgets: monthly totals,
//! budget vs. actual, category distribution, the six-month trend and the
//! searchable listing. All of them are pure functions of their inputs.

pub mod budget_comparison;
pub mod distribution;
pub mod listing;
pub mod month_totals;
pub mod trend;

pub use budget_comparison::{BudgetComparison, BudgetComparisonRow};
pub use distribution::{CategoryDistribution, CategoryShare};
pub use listing::{SortDirection, SortKey, SortState, TransactionQuery};
pub use month_totals::{current_month_category_totals, month_category_totals};
pub use trend::{MonthBucket, MonthlyTrend, TREND_MONTHS};
