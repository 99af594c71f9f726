//! Income entry model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::ids::IncomeId;
use super::lenient;

/// One source of income received in a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeEntry {
    #[serde(default)]
    pub id: IncomeId,

    /// Where the money came from (e.g., "Salary", "Freelance")
    #[serde(default, deserialize_with = "lenient::text")]
    pub source: String,

    #[serde(default)]
    pub amount: Amount,

    #[serde(default, with = "lenient::optional_date")]
    pub date: Option<NaiveDate>,
}

impl IncomeEntry {
    /// Create a new income entry
    pub fn new(source: impl Into<String>, amount: Amount, date: Option<NaiveDate>) -> Self {
        Self {
            id: IncomeId::new(),
            source: source.into(),
            amount,
            date,
        }
    }
}
