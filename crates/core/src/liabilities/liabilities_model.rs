//! Liability domain models.

use serde::{Deserialize, Serialize};

/// Liability classification by repayment horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum LiabilityCategory {
    #[default]
    ShortTerm,
    LongTerm,
}

impl LiabilityCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            LiabilityCategory::ShortTerm => "shortTerm",
            LiabilityCategory::LongTerm => "longTerm",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            LiabilityCategory::ShortTerm => "Short-Term Debt",
            LiabilityCategory::LongTerm => "Long-Term Debt",
        }
    }
}

/// Domain model representing a liability
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Liability {
    pub id: String,
    pub name: String,
    /// Outstanding amount as a positive magnitude
    pub value: f64,
    pub category: LiabilityCategory,
}

/// Input model for creating a new liability
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewLiability {
    pub name: String,
    pub value: f64,
    pub category: LiabilityCategory,
}

impl NewLiability {
    pub fn into_liability(self, id: String) -> Liability {
        Liability {
            id,
            name: self.name,
            value: self.value,
            category: self.category,
        }
    }
}
