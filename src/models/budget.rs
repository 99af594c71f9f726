//! Planned vs. actual budget rows
//!
//! Every month carries the same fixed set of budget categories. Rows are
//! never added or removed, only their planned and actual amounts change.

use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::lenient;

/// The labels of the budget rows every month starts with
pub const DEFAULT_BUDGET_CATEGORIES: [&str; 7] = [
    "Housing",
    "Transportation",
    "Food",
    "Utilities",
    "Entertainment",
    "Savings",
    "Other",
];

/// One budget row: how much was planned and how much was actually spent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategory {
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: String,

    #[serde(default)]
    pub planned: Amount,

    #[serde(default)]
    pub actual: Amount,
}

impl BudgetCategory {
    /// Create an empty row for a label
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            planned: Amount::zero(),
            actual: Amount::zero(),
        }
    }

    /// Whether this row has the given label (case-insensitive)
    pub fn is_named(&self, label: &str) -> bool {
        self.category.eq_ignore_ascii_case(label.trim())
    }
}

/// The seven default rows, all at zero
pub fn default_budget_categories() -> Vec<BudgetCategory> {
    DEFAULT_BUDGET_CATEGORIES
        .iter()
        .map(|label| BudgetCategory::new(*label))
        .collect()
}
