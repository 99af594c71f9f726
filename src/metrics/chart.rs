//! Income distribution chart data
//!
//! Splits a month's outflows and leftover into up to four buckets. Only
//! buckets with a strictly positive value are kept.

use serde::Serialize;
use std::fmt;

/// The fixed buckets of the distribution chart, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartBucket {
    Expenses,
    Bills,
    #[serde(rename = "Debt Payments")]
    DebtPayments,
    Remaining,
}

impl ChartBucket {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Expenses => "Expenses",
            Self::Bills => "Bills",
            Self::DebtPayments => "Debt Payments",
            Self::Remaining => "Remaining",
        }
    }

    /// Fixed display color (hex)
    pub fn color(&self) -> &'static str {
        match self {
            Self::Expenses => "#FFD700",
            Self::Bills => "#DAA520",
            Self::DebtPayments => "#B8860B",
            Self::Remaining => "#1a1a1a",
        }
    }
}

impl fmt::Display for ChartBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One slice of the chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub bucket: ChartBucket,
    pub value: f64,
    pub color: &'static str,
    /// Fraction of all displayed slices (0.0 - 1.0)
    pub share: f64,
}

impl ChartSlice {
    /// Label with rounded percentage, e.g. "Expenses: 71%"
    pub fn label(&self) -> String {
        // ties round up, so 12.5% reads "13%"
        format!("{}: {}%", self.bucket.label(), (self.share * 100.0).round())
    }
}

/// Build the chart slices; `Remaining` is the non-negative part of net cash flow
pub fn chart_slices(
    total_expenses: f64,
    total_bills: f64,
    monthly_debt_payments: f64,
    net_cash_flow: f64,
) -> Vec<ChartSlice> {
    let buckets = [
        (ChartBucket::Expenses, total_expenses),
        (ChartBucket::Bills, total_bills),
        (ChartBucket::DebtPayments, monthly_debt_payments),
        (ChartBucket::Remaining, net_cash_flow.max(0.0)),
    ];

    let shown: Vec<(ChartBucket, f64)> = buckets
        .into_iter()
        .filter(|(_, value)| *value > 0.0)
        .collect();
    let total: f64 = shown.iter().map(|(_, value)| value).sum();

    shown
        .into_iter()
        .map(|(bucket, value)| ChartSlice {
            bucket,
            value,
            color: bucket.color(),
            share: value / total,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_buckets_are_dropped() {
        let slices = chart_slices(500.0, 0.0, 0.0, 200.0);

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].bucket, ChartBucket::Expenses);
        assert_eq!(slices[0].value, 500.0);
        assert_eq!(slices[1].bucket, ChartBucket::Remaining);
        assert_eq!(slices[1].value, 200.0);
    }

    #[test]
    fn test_negative_cash_flow_has_no_remaining() {
        let slices = chart_slices(800.0, 300.0, 100.0, -200.0);
        let buckets: Vec<ChartBucket> = slices.iter().map(|s| s.bucket).collect();
        assert_eq!(
            buckets,
            vec![ChartBucket::Expenses, ChartBucket::Bills, ChartBucket::DebtPayments]
        );
    }

    #[test]
    fn test_negative_amounts_are_filtered() {
        let slices = chart_slices(-50.0, 0.0, 0.0, 0.0);
        assert!(slices.is_empty());
    }

    #[test]
    fn test_colors_and_shares() {
        let slices = chart_slices(1200.0, 300.0, 200.0, 3300.0);

        assert_eq!(slices.len(), 4);
        assert_eq!(slices[0].color, "#FFD700");
        assert_eq!(slices[2].color, "#B8860B");
        assert_eq!(slices[3].color, "#1a1a1a");

        let total_share: f64 = slices.iter().map(|s| s.share).sum();
        assert!((total_share - 1.0).abs() < 1e-9);
        assert_eq!(slices[3].label(), "Remaining: 66%");
        assert_eq!(slices[2].label(), "Debt Payments: 4%");

        let half = ChartSlice {
            bucket: ChartBucket::Bills,
            value: 1.0,
            color: ChartBucket::Bills.color(),
            share: 0.125,
        };
        assert_eq!(half.label(), "Bills: 13%");
    }

    #[test]
    fn test_bucket_serializes_with_display_name() {
        let json = serde_json::to_string(&ChartBucket::DebtPayments).unwrap();
        assert_eq!(json, "\"Debt Payments\"");
    }
}
