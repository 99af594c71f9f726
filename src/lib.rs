//! Money Lodge - monthly budgeting form with derived financial metrics
//!
//! This library provides the core functionality for the Money Lodge CLI.
//! Each calendar month holds income, expenses, debts, bills, planned vs.
//! actual budget rows and a savings goal; everything else (totals, cash
//! flow, ratios, payoff estimates, chart data) is derived on demand.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Month records and their line items
//! - `metrics`: Pure calculator from a month record to derived metrics
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `export`: JSON, YAML and CSV export
//! - `cli`: Command handlers for the `lodge` binary
//!
//! # Example
//!
//! ```rust
//! use lodge_cli::metrics::MonthMetrics;
//! use lodge_cli::models::{Amount, IncomeEntry, MonthRecord};
//!
//! let mut record = MonthRecord::default();
//! record.income.push(IncomeEntry::new("Salary", Amount::new(5000.0), None));
//!
//! let metrics = MonthMetrics::compute(&record);
//! assert_eq!(metrics.savings_amount, 1000.0);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod metrics;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LodgeError, LodgeResult};
