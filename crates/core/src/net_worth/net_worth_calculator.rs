//! Net worth calculations.
//!
//! Sums run in collection order with plain `f64` addition.

use super::net_worth_model::{CategoryTotal, MonthlyRecord, NetWorthSummary, TrendSeries};
use crate::assets::Asset;
use crate::constants::SHARE_DECIMAL_PLACES;
use crate::liabilities::Liability;
use crate::utils::round_to;

/// Label format used by the trend chart, e.g. "Jan 2024".
const TREND_LABEL_FORMAT: &str = "%b %Y";

pub fn total_assets(assets: &[Asset]) -> f64 {
    assets.iter().fold(0.0, |sum, asset| sum + asset.value)
}

pub fn total_liabilities(liabilities: &[Liability]) -> f64 {
    liabilities
        .iter()
        .fold(0.0, |sum, liability| sum + liability.value)
}

/// Net worth = total assets - total liabilities.
pub fn net_worth(assets: &[Asset], liabilities: &[Liability]) -> f64 {
    total_assets(assets) - total_liabilities(liabilities)
}

pub fn summarize(assets: &[Asset], liabilities: &[Liability]) -> NetWorthSummary {
    let total_assets = total_assets(assets);
    let total_liabilities = total_liabilities(liabilities);
    NetWorthSummary {
        total_assets,
        total_liabilities,
        net_worth: total_assets - total_liabilities,
    }
}

/// Groups items into categories in the order each category is first seen.
fn group_by_category<I>(items: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = (&'static str, &'static str, f64)>,
{
    let mut groups: Vec<CategoryTotal> = Vec::new();
    for (key, label, value) in items {
        match groups.iter_mut().find(|group| group.category == key) {
            Some(group) => {
                group.total += value;
                group.count += 1;
            }
            None => groups.push(CategoryTotal {
                category: key.to_string(),
                label: label.to_string(),
                total: value,
                count: 1,
            }),
        }
    }
    groups
}

pub fn asset_breakdown(assets: &[Asset]) -> Vec<CategoryTotal> {
    group_by_category(
        assets
            .iter()
            .map(|a| (a.category.as_str(), a.category.label(), a.value)),
    )
}

pub fn liability_breakdown(liabilities: &[Liability]) -> Vec<CategoryTotal> {
    group_by_category(
        liabilities
            .iter()
            .map(|l| (l.category.as_str(), l.category.label(), l.value)),
    )
}

/// Share of `value` in `total` as a percentage with one decimal.
///
/// Returns 0 when `total` is 0.
pub fn share_percent(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    round_to(value / total * 100.0, SHARE_DECIMAL_PLACES)
}

/// Builds the chronological trend series. Records with equal dates keep
/// their stored order.
pub fn trend_series(records: &[MonthlyRecord]) -> TrendSeries {
    let mut sorted: Vec<&MonthlyRecord> = records.iter().collect();
    sorted.sort_by_key(|record| record.date);

    let mut series = TrendSeries::default();
    for record in sorted {
        series
            .labels
            .push(record.date.format(TREND_LABEL_FORMAT).to_string());
        series.net_worth.push(record.net_worth);
        series.total_assets.push(record.total_assets);
        series.total_liabilities.push(record.total_liabilities);
    }
    series
}
