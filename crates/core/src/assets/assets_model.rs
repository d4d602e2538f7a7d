//! Asset domain models.

use serde::{Deserialize, Serialize};

/// Asset classification used for grouping on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum AssetCategory {
    #[default]
    Cash,
    Investments,
    Property,
    Other,
}

impl AssetCategory {
    /// Returns the persisted string representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::Cash => "cash",
            AssetCategory::Investments => "investments",
            AssetCategory::Property => "property",
            AssetCategory::Other => "other",
        }
    }

    /// Human readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            AssetCategory::Cash => "Cash",
            AssetCategory::Investments => "Investments",
            AssetCategory::Property => "Property",
            AssetCategory::Other => "Other",
        }
    }
}

/// Domain model representing an asset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub category: AssetCategory,
}

/// Input model for creating a new asset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub name: String,
    pub value: f64,
    pub category: AssetCategory,
}

impl NewAsset {
    pub fn into_asset(self, id: String) -> Asset {
        Asset {
            id,
            name: self.name,
            value: self.value,
            category: self.category,
        }
    }
}
