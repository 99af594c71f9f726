//! Debt entry model

use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::ids::DebtId;
use super::lenient;

/// An outstanding debt and its monthly payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtEntry {
    #[serde(default)]
    pub id: DebtId,

    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,

    /// Remaining balance
    #[serde(default)]
    pub balance: Amount,

    /// Annual interest rate in percent. Informational only.
    #[serde(default)]
    pub interest_rate: Amount,

    #[serde(default)]
    pub monthly_payment: Amount,

    /// Free-text due date (e.g., "15th")
    #[serde(default, deserialize_with = "lenient::text")]
    pub due_date: String,
}

impl DebtEntry {
    /// Create a new debt entry
    pub fn new(name: impl Into<String>, balance: Amount, monthly_payment: Amount) -> Self {
        Self {
            id: DebtId::new(),
            name: name.into(),
            balance,
            interest_rate: Amount::zero(),
            monthly_payment,
            due_date: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_fields() {
        let json = r#"{"name": "Visa", "balance": "2000", "interestRate": "19.99",
                       "monthlyPayment": 200, "dueDate": "15th"}"#;
        let debt: DebtEntry = serde_json::from_str(json).unwrap();

        assert_eq!(debt.balance.value(), 2000.0);
        assert_eq!(debt.interest_rate.value(), 19.99);
        assert_eq!(debt.monthly_payment.value(), 200.0);
        assert_eq!(debt.due_date, "15th");
    }

    #[test]
    fn test_new_debt_defaults() {
        let debt = DebtEntry::new("Car loan", Amount::new(8000.0), Amount::new(350.0));
        assert!(debt.interest_rate.is_zero());
        assert!(debt.due_date.is_empty());
    }
}
