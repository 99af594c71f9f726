//! Display formatting for terminal output
//!
//! Turns month records and their metrics into text for the CLI.

pub mod entries;
pub mod overview;
pub mod report;

pub use entries::{format_bill_list, format_debt_list, format_expense_list, format_income_list};
pub use overview::{format_analytics, format_budget, format_chart, format_overview};
