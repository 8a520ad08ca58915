//! Sales Report Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reporting window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl ReportPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown report period: {0}")]
pub struct UnknownPeriod(pub String);

impl FromStr for ReportPeriod {
    type Err = UnknownPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            other => Err(UnknownPeriod(other.to_string())),
        }
    }
}

/// Revenue / order-count rollup over one window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    pub period: ReportPeriod,
    /// `YYYY-MM-DD`, `YYYY-MM-DD to YYYY-MM-DD` or `YYYY-MM`
    pub label: String,
    /// Window start, inclusive (Unix millis)
    pub start: i64,
    /// Window end, exclusive (Unix millis)
    pub end: i64,
    pub total_revenue: f64,
    pub total_orders: i64,
    pub bike_revenue: f64,
    pub bike_orders: i64,
    pub car_revenue: f64,
    pub car_orders: i64,
}
