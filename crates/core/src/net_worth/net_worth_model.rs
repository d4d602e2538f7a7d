//! Net worth domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable snapshot of net worth at the moment it was recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRecord {
    /// When the snapshot was taken. Not unique per month.
    pub date: DateTime<Utc>,
    /// total_assets - total_liabilities at creation
    pub net_worth: f64,
    pub total_assets: f64,
    pub total_liabilities: f64,
}

impl MonthlyRecord {
    pub fn from_summary(summary: &NetWorthSummary, date: DateTime<Utc>) -> Self {
        Self {
            date,
            net_worth: summary.net_worth,
            total_assets: summary.total_assets,
            total_liabilities: summary.total_liabilities,
        }
    }
}

/// Current balance sheet totals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthSummary {
    pub total_assets: f64,
    /// Positive magnitude
    pub total_liabilities: f64,
    pub net_worth: f64,
}

/// Aggregate of one category within the assets or liabilities collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    /// Persisted category key (e.g. "cash", "shortTerm")
    pub category: String,
    /// Display name
    pub label: String,
    pub total: f64,
    /// Number of records in the category
    pub count: usize,
}

/// Chronological series ready for a line chart.
///
/// All vectors have the same length and share indices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TrendSeries {
    pub labels: Vec<String>,
    pub net_worth: Vec<f64>,
    pub total_assets: Vec<f64>,
    pub total_liabilities: Vec<f64>,
}

impl TrendSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
