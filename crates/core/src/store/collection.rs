use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::assets::Asset;
use crate::events::CollectionKind;
use crate::goals::FinancialGoal;
use crate::liabilities::Liability;
use crate::net_worth::MonthlyRecord;

use super::seed;

/// A record type persisted as one JSON array under one key.
pub trait CollectionRecord: Serialize + DeserializeOwned + Clone {
    const COLLECTION: CollectionKind;

    /// Read-time default served when nothing is stored.
    fn seed(now: DateTime<Utc>) -> Vec<Self>;

    /// JSON has no representation for NaN or infinity.
    fn has_finite_amounts(&self) -> bool;
}

/// A record addressable by id for update and delete.
pub trait IdentifiedRecord: CollectionRecord {
    fn record_id(&self) -> &str;
}

impl CollectionRecord for Asset {
    const COLLECTION: CollectionKind = CollectionKind::Assets;

    fn seed(_now: DateTime<Utc>) -> Vec<Self> {
        seed::example_assets()
    }

    fn has_finite_amounts(&self) -> bool {
        self.value.is_finite()
    }
}

impl IdentifiedRecord for Asset {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl CollectionRecord for Liability {
    const COLLECTION: CollectionKind = CollectionKind::Liabilities;

    fn seed(_now: DateTime<Utc>) -> Vec<Self> {
        seed::example_liabilities()
    }

    fn has_finite_amounts(&self) -> bool {
        self.value.is_finite()
    }
}

impl IdentifiedRecord for Liability {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl CollectionRecord for FinancialGoal {
    const COLLECTION: CollectionKind = CollectionKind::Goals;

    fn seed(now: DateTime<Utc>) -> Vec<Self> {
        seed::example_goals(now)
    }

    fn has_finite_amounts(&self) -> bool {
        self.target_amount.is_finite() && self.current_amount.is_finite()
    }
}

impl IdentifiedRecord for FinancialGoal {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl CollectionRecord for MonthlyRecord {
    const COLLECTION: CollectionKind = CollectionKind::MonthlyRecords;

    fn seed(now: DateTime<Utc>) -> Vec<Self> {
        seed::example_monthly_records(now)
    }

    fn has_finite_amounts(&self) -> bool {
        self.net_worth.is_finite()
            && self.total_assets.is_finite()
            && self.total_liabilities.is_finite()
    }
}
