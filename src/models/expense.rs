//! Expense entry model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::ids::ExpenseId;
use super::lenient;

/// Categories offered when recording an expense. The field itself is free
/// text; these are suggestions.
pub const EXPENSE_CATEGORIES: [&str; 7] = [
    "Housing",
    "Transportation",
    "Food",
    "Utilities",
    "Entertainment",
    "Healthcare",
    "Other",
];

/// A single expense in a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseEntry {
    #[serde(default)]
    pub id: ExpenseId,

    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub category: String,

    #[serde(default)]
    pub amount: Amount,

    #[serde(default, with = "lenient::optional_date")]
    pub date: Option<NaiveDate>,
}

impl ExpenseEntry {
    /// Create a new expense entry
    pub fn new(
        description: impl Into<String>,
        category: impl Into<String>,
        amount: Amount,
        date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            description: description.into(),
            category: category.into(),
            amount,
            date,
        }
    }

    /// Whether the category is one of the suggested ones
    pub fn has_known_category(&self) -> bool {
        EXPENSE_CATEGORIES
            .iter()
            .any(|c| c.eq_ignore_ascii_case(self.category.trim()))
    }
}
