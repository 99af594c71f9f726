//! Bill entry model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::ids::BillId;
use super::lenient;

/// A bill due in a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillEntry {
    #[serde(default)]
    pub id: BillId,

    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,

    #[serde(default)]
    pub amount: Amount,

    #[serde(default, with = "lenient::optional_date")]
    pub due_date: Option<NaiveDate>,

    #[serde(default = "default_recurring", deserialize_with = "lenient::flag")]
    pub recurring: bool,
}

fn default_recurring() -> bool {
    true
}

impl BillEntry {
    /// Create a new bill entry (recurring by default)
    pub fn new(name: impl Into<String>, amount: Amount, due_date: Option<NaiveDate>) -> Self {
        Self {
            id: BillId::new(),
            name: name.into(),
            amount,
            due_date,
            recurring: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recurring_defaults_to_true() {
        let bill: BillEntry = serde_json::from_str(r#"{"name": "Rent", "amount": 1500}"#).unwrap();
        assert!(bill.recurring);
        assert!(bill.due_date.is_none());
    }

    #[test]
    fn test_empty_due_date() {
        let bill: BillEntry =
            serde_json::from_str(r#"{"name": "Phone", "amount": "45", "dueDate": "", "recurring": false}"#)
                .unwrap();
        assert!(!bill.recurring);
        assert!(bill.due_date.is_none());
        assert_eq!(bill.amount.value(), 45.0);
    }
}
