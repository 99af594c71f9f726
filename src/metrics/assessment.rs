//! Rules of thumb applied to the derived ratios

use serde::Serialize;

/// Savings rate (percent of income) considered excellent
pub const SAVINGS_RATE_TARGET: f64 = 20.0;

/// Highest expense ratio still considered under control
pub const EXPENSE_RATIO_LIMIT: f64 = 50.0;

/// Highest debt service ratio still considered healthy
pub const DEBT_SERVICE_LIMIT: f64 = 36.0;

/// Budget usage above this percentage is flagged as a warning
pub const USAGE_WARNING_PERCENT: f64 = 80.0;

/// How much of a budget row has been used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UsageStatus {
    /// At most 80% used
    OnTrack,
    /// Above 80%, at most 100%
    Warning,
    /// Above 100%
    Over,
}

impl UsageStatus {
    pub fn from_percent_used(percent_used: f64) -> Self {
        if percent_used <= USAGE_WARNING_PERCENT {
            Self::OnTrack
        } else if percent_used <= 100.0 {
            Self::Warning
        } else {
            Self::Over
        }
    }
}

/// Verdict on a single ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub healthy: bool,
    pub message: &'static str,
}

/// Verdicts on the three analytics ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioAssessments {
    pub savings_rate: Assessment,
    pub expense_ratio: Assessment,
    pub debt_service_ratio: Assessment,
}

impl RatioAssessments {
    pub fn from_ratios(savings_rate: f64, expense_ratio: f64, debt_service_ratio: f64) -> Self {
        Self {
            savings_rate: if savings_rate >= SAVINGS_RATE_TARGET {
                Assessment {
                    healthy: true,
                    message: "Excellent!",
                }
            } else {
                Assessment {
                    healthy: false,
                    message: "Aim for 20%+",
                }
            },
            expense_ratio: if expense_ratio <= EXPENSE_RATIO_LIMIT {
                Assessment {
                    healthy: true,
                    message: "Good control",
                }
            } else {
                Assessment {
                    healthy: false,
                    message: "Consider reducing",
                }
            },
            debt_service_ratio: if debt_service_ratio <= DEBT_SERVICE_LIMIT {
                Assessment {
                    healthy: true,
                    message: "Healthy",
                }
            } else {
                Assessment {
                    healthy: false,
                    message: "High debt load",
                }
            },
        }
    }
}
