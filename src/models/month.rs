//! Month keys and month records
//!
//! A [`MonthRecord`] holds every line item and setting for one calendar
//! month. Records are stored under a [`MonthKey`], whose storage form is
//! `"<year>-<zero-based month index>"` (October 2025 is `"2025-9"`).

use chrono::{Datelike, Local};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use super::amount::Amount;
use super::bill::BillEntry;
use super::budget::{default_budget_categories, BudgetCategory};
use super::debt::DebtEntry;
use super::expense::ExpenseEntry;
use super::income::IncomeEntry;
use super::lenient;
use crate::error::{LodgeError, LodgeResult};

/// Savings goal percentage of a freshly seeded month
pub const DEFAULT_SAVINGS_GOAL: f64 = 20.0;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Identifies one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    /// Zero-based (January = 0)
    month: u32,
}

impl MonthKey {
    /// Create a key from a year and a zero-based month index
    pub fn new(year: i32, month_index: u32) -> LodgeResult<Self> {
        if month_index > 11 {
            return Err(LodgeError::Validation(format!(
                "Month index must be 0-11, got {}",
                month_index
            )));
        }
        Ok(Self {
            year,
            month: month_index,
        })
    }

    /// Create a key from a year and a calendar month number (1-12)
    pub fn from_calendar(year: i32, month: u32) -> LodgeResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(LodgeError::Validation(format!(
                "Month must be 1-12, got {}",
                month
            )));
        }
        Self::new(year, month - 1)
    }

    /// The current local month
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month index
    pub fn month_index(&self) -> u32 {
        self.month
    }

    /// Calendar month number (1-12)
    pub fn month_number(&self) -> u32 {
        self.month + 1
    }

    /// English month name
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize]
    }

    /// The following month
    pub fn next(&self) -> Self {
        if self.month == 11 {
            Self {
                year: self.year + 1,
                month: 0,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month
    pub fn prev(&self) -> Self {
        if self.month == 0 {
            Self {
                year: self.year - 1,
                month: 11,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Key used in the persisted blob
    pub fn storage_key(&self) -> String {
        format!("{}-{}", self.year, self.month)
    }

    /// Parse a key from its persisted form (`"2025-9"`)
    pub fn from_storage_key(s: &str) -> LodgeResult<Self> {
        let (year, month) = split_year_month(s)
            .ok_or_else(|| LodgeError::Validation(format!("Invalid month key: {}", s)))?;
        Self::new(year, month)
    }

    /// Parse user input
    ///
    /// Formats:
    /// - `"2025-10"` (calendar month, 1-12)
    /// - `"current"`, `"last"` / `"prev"`, `"next"` relative to today
    pub fn parse(s: &str) -> LodgeResult<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "current" | "this" => return Ok(Self::current()),
            "last" | "prev" | "previous" => return Ok(Self::current().prev()),
            "next" => return Ok(Self::current().next()),
            _ => {}
        }

        let (year, month) = split_year_month(s).ok_or_else(|| {
            LodgeError::Validation(format!("Invalid month '{}', expected YYYY-MM", s))
        })?;
        Self::from_calendar(year, month)
    }
}

fn split_year_month(s: &str) -> Option<(i32, u32)> {
    let (year, month) = s.trim().rsplit_once('-')?;
    Some((year.parse().ok()?, month.parse().ok()?))
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

/// Everything entered for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthRecord {
    #[serde(default, deserialize_with = "lenient::list")]
    pub income: Vec<IncomeEntry>,

    #[serde(default, deserialize_with = "lenient::list")]
    pub expenses: Vec<ExpenseEntry>,

    #[serde(default, deserialize_with = "lenient::list")]
    pub debts: Vec<DebtEntry>,

    #[serde(default, deserialize_with = "lenient::list")]
    pub bills: Vec<BillEntry>,

    #[serde(
        default = "default_budget_categories",
        deserialize_with = "budget_rows"
    )]
    pub budget_categories: Vec<BudgetCategory>,

    /// Percentage of income set aside as savings
    #[serde(default = "default_savings_goal")]
    pub savings_goal: Amount,
}

fn default_savings_goal() -> Amount {
    Amount::new(DEFAULT_SAVINGS_GOAL)
}

/// Budget rows; a missing or non-array value gets the default rows
fn budget_rows<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<BudgetCategory>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => lenient::items(values),
        _ => default_budget_categories(),
    })
}

impl MonthRecord {
    /// An empty month with the default budget rows and the given savings goal
    pub fn seeded(savings_goal: Amount) -> Self {
        Self {
            income: Vec::new(),
            expenses: Vec::new(),
            debts: Vec::new(),
            bills: Vec::new(),
            budget_categories: default_budget_categories(),
            savings_goal,
        }
    }

    /// Find a budget row by label (case-insensitive)
    pub fn budget_category_mut(&mut self, label: &str) -> Option<&mut BudgetCategory> {
        self.budget_categories.iter_mut().find(|c| c.is_named(label))
    }

    /// Number of line items across all lists
    pub fn entry_count(&self) -> usize {
        self.income.len() + self.expenses.len() + self.debts.len() + self.bills.len()
    }
}

impl Default for MonthRecord {
    fn default() -> Self {
        Self::seeded(default_savings_goal())
    }
}
