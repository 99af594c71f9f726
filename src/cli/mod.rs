//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod bill;
pub mod budget;
pub mod data;
pub mod debt;
pub mod expense;
pub mod export;
pub mod income;
pub mod report;

pub use bill::{handle_bill_command, BillCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use data::{handle_clear, handle_import};
pub use debt::{handle_debt_command, DebtCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export, ExportFormat};
pub use income::{handle_income_command, IncomeCommands};
pub use report::{
    handle_analytics, handle_history, handle_months, handle_overview, handle_savings_goal,
};

use chrono::{Local, NaiveDate};

use crate::error::{LodgeError, LodgeResult};
use crate::models::lenient::parse_date;

/// Parse an optional `YYYY-MM-DD` argument; `"today"` is accepted
pub(crate) fn parse_date_arg(date: Option<&str>) -> LodgeResult<Option<NaiveDate>> {
    match date.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("today") => Ok(Some(today())),
        Some(s) => parse_date(s)
            .map(Some)
            .ok_or_else(|| {
                LodgeError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s))
            }),
    }
}

/// Today's local date
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_arg() {
        assert_eq!(parse_date_arg(None).unwrap(), None);
        assert_eq!(parse_date_arg(Some(" ")).unwrap(), None);
        assert_eq!(
            parse_date_arg(Some("2025-10-03")).unwrap(),
            NaiveDate::from_ymd_opt(2025, 10, 3)
        );
        assert_eq!(parse_date_arg(Some("today")).unwrap(), Some(today()));
        assert!(parse_date_arg(Some("03/10/2025")).unwrap_err().is_validation());
    }
}
