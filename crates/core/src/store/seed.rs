//! Built-in example records served while a collection has never been written.

use chrono::{DateTime, Utc};

use crate::assets::{Asset, AssetCategory};
use crate::goals::FinancialGoal;
use crate::liabilities::{Liability, LiabilityCategory};
use crate::net_worth::MonthlyRecord;
use crate::utils::time_utils::shift_months;

pub(super) fn example_assets() -> Vec<Asset> {
    [
        ("1", "Checking Account", 5000.0, AssetCategory::Cash),
        ("2", "Savings Account", 10000.0, AssetCategory::Cash),
        ("3", "Stock Portfolio", 25000.0, AssetCategory::Investments),
    ]
    .into_iter()
    .map(|(id, name, value, category)| Asset {
        id: id.to_string(),
        name: name.to_string(),
        value,
        category,
    })
    .collect()
}

pub(super) fn example_liabilities() -> Vec<Liability> {
    [
        ("1", "Credit Card", 2000.0, LiabilityCategory::ShortTerm),
        ("2", "Car Loan", 15000.0, LiabilityCategory::LongTerm),
    ]
    .into_iter()
    .map(|(id, name, value, category)| Liability {
        id: id.to_string(),
        name: name.to_string(),
        value,
        category,
    })
    .collect()
}

/// Five snapshots, one to five months back, oldest first.
pub(super) fn example_monthly_records(now: DateTime<Utc>) -> Vec<MonthlyRecord> {
    [
        (-5, 35000.0, 17000.0),
        (-4, 37000.0, 17500.0),
        (-3, 38000.0, 17800.0),
        (-2, 39000.0, 17000.0),
        (-1, 40000.0, 17000.0),
    ]
    .into_iter()
    .map(|(months, total_assets, total_liabilities)| MonthlyRecord {
        date: shift_months(now, months),
        net_worth: total_assets - total_liabilities,
        total_assets,
        total_liabilities,
    })
    .collect()
}

pub(super) fn example_goals(now: DateTime<Utc>) -> Vec<FinancialGoal> {
    [
        ("1", "Emergency Fund", 20000.0, 10000.0, 6),
        ("2", "Vacation", 5000.0, 1500.0, 3),
    ]
    .into_iter()
    .map(
        |(id, name, target_amount, current_amount, months)| FinancialGoal {
            id: id.to_string(),
            name: name.to_string(),
            target_amount,
            current_amount,
            deadline: shift_months(now, months).date_naive(),
        },
    )
    .collect()
}
