//! Metrics calculator
//!
//! Pure functions from a month record to totals, ratios, payoff estimates,
//! budget usage and chart data. Nothing here touches storage.

pub mod assessment;
pub mod calculator;
pub mod chart;

pub use assessment::{Assessment, RatioAssessments, UsageStatus};
pub use calculator::{months_to_payoff, BudgetSummary, CategoryUsage, DebtPayoff, MonthMetrics};
pub use chart::{chart_slices, ChartBucket, ChartSlice};
