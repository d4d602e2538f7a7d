//! Goals domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Domain model representing a savings goal.
///
/// `current_amount` may exceed `target_amount`; progress derivations clamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialGoal {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    #[serde(deserialize_with = "deserialize_deadline")]
    pub deadline: NaiveDate,
}

/// Input model for creating a new goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    #[serde(deserialize_with = "deserialize_deadline")]
    pub deadline: NaiveDate,
}

impl NewGoal {
    pub fn into_goal(self, id: String) -> FinancialGoal {
        FinancialGoal {
            id,
            name: self.name,
            target_amount: self.target_amount,
            current_amount: self.current_amount,
            deadline: self.deadline,
        }
    }
}

/// Parses a goal deadline written either as `YYYY-MM-DD` or as an RFC 3339
/// timestamp. Timestamps are reduced to their UTC calendar date.
pub fn parse_deadline(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

fn deserialize_deadline<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_deadline(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid goal deadline: {}", raw)))
}
