//! Property-based tests for the net worth store.
//!
//! These run the public store API against an in-memory provider with
//! randomly generated collections using `proptest`.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use wealthmate_core::assets::{Asset, AssetCategory, NewAsset};
use wealthmate_core::liabilities::{LiabilityCategory, NewLiability};
use wealthmate_core::{KeyValueProvider, NetWorthStore, Result, StoreConfig, WriteOutcome};

#[derive(Default)]
struct MapProvider {
    values: RwLock<HashMap<String, String>>,
}

impl KeyValueProvider for MapProvider {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn empty_store() -> NetWorthStore {
    NetWorthStore::new(Arc::new(MapProvider::default())).with_config(StoreConfig {
        seed_examples: false,
        ..StoreConfig::default()
    })
}

// =============================================================================
// Generators
// =============================================================================

fn arb_asset_category() -> impl Strategy<Value = AssetCategory> {
    prop_oneof![
        Just(AssetCategory::Cash),
        Just(AssetCategory::Investments),
        Just(AssetCategory::Property),
        Just(AssetCategory::Other),
    ]
}

fn arb_liability_category() -> impl Strategy<Value = LiabilityCategory> {
    prop_oneof![
        Just(LiabilityCategory::ShortTerm),
        Just(LiabilityCategory::LongTerm),
    ]
}

fn arb_new_asset() -> impl Strategy<Value = NewAsset> {
    ("[A-Za-z ]{0,16}", -1.0e9f64..1.0e9, arb_asset_category()).prop_map(
        |(name, value, category)| NewAsset {
            name,
            value,
            category,
        },
    )
}

fn arb_new_liability() -> impl Strategy<Value = NewLiability> {
    ("[A-Za-z ]{1,16}", 0.0f64..1.0e9, arb_liability_category()).prop_map(
        |(name, value, category)| NewLiability {
            name,
            value,
            category,
        },
    )
}

fn arb_assets() -> impl Strategy<Value = Vec<Asset>> {
    proptest::collection::vec(
        ("[a-z0-9]{1,12}", arb_new_asset()),
        0..20,
    )
    .prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(id, new_asset)| new_asset.into_asset(id))
            .collect()
    })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Added assets come back in call order, each with a distinct id.
    #[test]
    fn prop_add_asset_preserves_call_order(new_assets in proptest::collection::vec(arb_new_asset(), 0..25)) {
        let store = empty_store();
        let created: Vec<Asset> = new_assets
            .iter()
            .cloned()
            .map(|new_asset| store.add_asset(new_asset).record)
            .collect();

        let stored = store.get_assets();
        prop_assert_eq!(&stored, &created);

        let ids: HashSet<&str> = stored.iter().map(|a| a.id.as_str()).collect();
        prop_assert_eq!(ids.len(), stored.len());
    }

    /// Net worth equals the asset sum minus the liability sum.
    #[test]
    fn prop_net_worth_is_difference_of_sums(
        new_assets in proptest::collection::vec(arb_new_asset(), 0..15),
        new_liabilities in proptest::collection::vec(arb_new_liability(), 0..15),
    ) {
        let store = empty_store();
        for new_asset in new_assets.iter().cloned() {
            store.add_asset(new_asset);
        }
        for new_liability in new_liabilities.iter().cloned() {
            store.add_liability(new_liability);
        }

        let asset_sum = new_assets.iter().fold(0.0, |sum, a| sum + a.value);
        let liability_sum = new_liabilities.iter().fold(0.0, |sum, l| sum + l.value);
        prop_assert_eq!(store.calculate_net_worth(), asset_sum - liability_sum);
    }

    /// Saving then reading returns the same sequence.
    #[test]
    fn prop_save_then_get_round_trips(assets in arb_assets()) {
        let store = empty_store();
        prop_assert_eq!(store.save_assets(&assets), WriteOutcome::Written);
        prop_assert_eq!(store.get_assets(), assets);
    }

    /// Deleting removes exactly the targeted record and keeps relative order.
    #[test]
    fn prop_delete_preserves_relative_order(
        new_assets in proptest::collection::vec(arb_new_asset(), 1..15),
        pick in any::<prop::sample::Index>(),
    ) {
        let store = empty_store();
        let created: Vec<Asset> = new_assets
            .into_iter()
            .map(|new_asset| store.add_asset(new_asset).record)
            .collect();
        let target = pick.index(created.len());

        let removal = store.delete_asset(&created[target].id);
        prop_assert_eq!(removal.removed, 1);

        let mut expected = created.clone();
        expected.remove(target);
        prop_assert_eq!(store.get_assets(), expected);
    }

    /// Snapshots always satisfy net_worth == total_assets - total_liabilities.
    #[test]
    fn prop_recorded_snapshot_is_consistent(
        new_assets in proptest::collection::vec(arb_new_asset(), 0..10),
        new_liabilities in proptest::collection::vec(arb_new_liability(), 0..10),
    ) {
        let store = empty_store();
        for new_asset in new_assets {
            store.add_asset(new_asset);
        }
        for new_liability in new_liabilities {
            store.add_liability(new_liability);
        }
        let assets_before = store.get_assets();

        let created = store.record_monthly_net_worth();
        let record = created.record;

        prop_assert_eq!(record.net_worth, record.total_assets - record.total_liabilities);
        prop_assert_eq!(store.get_monthly_records().len(), 1);
        prop_assert_eq!(store.get_assets(), assets_before);
    }
}
