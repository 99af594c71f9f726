//! Export module for Money Lodge
//!
//! Provides data export in multiple formats:
//! - CSV: line items of one month (spreadsheet-compatible)
//! - JSON: every month with its metrics (machine-readable)
//! - YAML: same as JSON (human-readable)

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_month_csv;
pub use json::{export_full_json, FullExport, MonthExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
