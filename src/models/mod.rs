//! Core data models for Money Lodge
//!
//! This module contains the plain records a month is made of: income,
//! expenses, debts, bills, budget rows and the month record that owns them.

pub mod amount;
pub mod bill;
pub mod budget;
pub mod debt;
pub mod expense;
pub mod ids;
pub mod income;
pub mod lenient;
pub mod line_item;
pub mod month;

pub use amount::Amount;
pub use bill::BillEntry;
pub use budget::{default_budget_categories, BudgetCategory, DEFAULT_BUDGET_CATEGORIES};
pub use debt::DebtEntry;
pub use expense::{ExpenseEntry, EXPENSE_CATEGORIES};
pub use ids::{BillId, DebtId, ExpenseId, IncomeId};
pub use income::IncomeEntry;
pub use line_item::LineItem;
pub use month::{MonthKey, MonthRecord, DEFAULT_SAVINGS_GOAL};
