//! Net worth store implementation.
//!
//! Every operation is a full read-modify-write of one collection against the
//! key-value provider. Provider and serialization failures are logged and
//! reported through the returned outcome; none of them is returned as `Err`.

use std::sync::Arc;

use log::{debug, error};
use uuid::Uuid;

use super::collection::{CollectionRecord, IdentifiedRecord};
use super::store_model::{Created, Removal, UpdateOutcome};
use crate::assets::{Asset, NewAsset};
use crate::config::StoreConfig;
use crate::errors::Error;
use crate::events::{NoOpStoreEventSink, StoreEvent, StoreEventSink};
use crate::goals::{goal_progress, FinancialGoal, GoalProgress, NewGoal};
use crate::liabilities::{Liability, NewLiability};
use crate::net_worth::{self, CategoryTotal, MonthlyRecord, NetWorthSummary, TrendSeries};
use crate::storage::{KeyValueProvider, LoadFailure, LoadSource, Loaded, WriteOutcome};
use crate::utils::{Clock, SystemClock};

/// Authoritative access to assets, liabilities, monthly records and goals.
pub struct NetWorthStore {
    provider: Arc<dyn KeyValueProvider>,
    config: StoreConfig,
    clock: Arc<dyn Clock>,
    event_sink: Arc<dyn StoreEventSink>,
}

impl NetWorthStore {
    pub fn new(provider: Arc<dyn KeyValueProvider>) -> Self {
        Self {
            provider,
            config: StoreConfig::default(),
            clock: Arc::new(SystemClock),
            event_sink: Arc::new(NoOpStoreEventSink),
        }
    }

    pub fn with_config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_event_sink(mut self, event_sink: Arc<dyn StoreEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Generic collection plumbing
    // ------------------------------------------------------------------

    fn defaults<T: CollectionRecord>(&self) -> Vec<T> {
        if self.config.seed_examples {
            T::seed(self.clock.now())
        } else {
            Vec::new()
        }
    }

    fn load<T: CollectionRecord>(&self) -> Loaded<T> {
        let key = self.config.key_for(T::COLLECTION);

        let source = match self.provider.get(&key) {
            Ok(Some(raw)) if !raw.trim().is_empty() => {
                match serde_json::from_str::<Vec<T>>(&raw) {
                    Ok(items) => {
                        return Loaded {
                            items,
                            source: LoadSource::Stored,
                        }
                    }
                    Err(e) => {
                        error!(
                            "Error parsing stored data for key {}: {}. Falling back to defaults.",
                            key, e
                        );
                        LoadSource::Recovered {
                            failure: LoadFailure::Malformed(e.to_string()),
                        }
                    }
                }
            }
            Ok(_) => {
                debug!("No stored data for key {}, serving defaults", key);
                LoadSource::Seeded
            }
            Err(e) => {
                error!(
                    "Error retrieving data for key {}: {}. Falling back to defaults.",
                    key, e
                );
                LoadSource::Recovered {
                    failure: LoadFailure::Unreadable(e.to_string()),
                }
            }
        };

        Loaded {
            items: self.defaults(),
            source,
        }
    }

    fn save<T: CollectionRecord>(&self, items: &[T]) -> WriteOutcome {
        let key = self.config.key_for(T::COLLECTION);

        let result = if items.iter().all(T::has_finite_amounts) {
            serde_json::to_string(items)
                .map_err(Error::from)
                .and_then(|raw| self.provider.set(&key, &raw))
        } else {
            Err(Error::NonFiniteAmount(key.clone()))
        };

        match result {
            Ok(()) => {
                self.event_sink.emit(StoreEvent::CollectionChanged {
                    collection: T::COLLECTION,
                });
                WriteOutcome::Written
            }
            Err(e) => {
                error!("Error saving data for key {}: {}", key, e);
                WriteOutcome::Failed(e.to_string())
            }
        }
    }

    fn create<T: IdentifiedRecord>(&self, build: impl FnOnce(String) -> T) -> Created<T> {
        let mut items = self.load::<T>().items;
        let record = build(Uuid::now_v7().to_string());
        items.push(record.clone());
        let write = self.save(&items);
        Created { record, write }
    }

    fn replace<T: IdentifiedRecord>(&self, record: T) -> UpdateOutcome {
        let mut items = self.load::<T>().items;
        match items
            .iter()
            .position(|existing| existing.record_id() == record.record_id())
        {
            Some(index) => {
                items[index] = record;
                UpdateOutcome::Updated(self.save(&items))
            }
            None => {
                debug!(
                    "No {:?} record with id {} to update",
                    T::COLLECTION,
                    record.record_id()
                );
                UpdateOutcome::NotFound
            }
        }
    }

    fn remove<T: IdentifiedRecord>(&self, id: &str) -> Removal {
        let mut items = self.load::<T>().items;
        let before = items.len();
        items.retain(|existing| existing.record_id() != id);
        let removed = before - items.len();
        if removed == 0 {
            debug!("No {:?} record with id {} to delete", T::COLLECTION, id);
        }
        Removal {
            removed,
            write: self.save(&items),
        }
    }

    // ------------------------------------------------------------------
    // Assets
    // ------------------------------------------------------------------

    pub fn get_assets(&self) -> Vec<Asset> {
        self.load().items
    }

    pub fn get_assets_loaded(&self) -> Loaded<Asset> {
        self.load()
    }

    pub fn save_assets(&self, assets: &[Asset]) -> WriteOutcome {
        self.save(assets)
    }

    /// Appends a new asset. Field values are persisted as given.
    pub fn add_asset(&self, new_asset: NewAsset) -> Created<Asset> {
        self.create(|id| new_asset.into_asset(id))
    }

    pub fn update_asset(&self, asset: Asset) -> UpdateOutcome {
        self.replace(asset)
    }

    pub fn delete_asset(&self, id: &str) -> Removal {
        self.remove::<Asset>(id)
    }

    // ------------------------------------------------------------------
    // Liabilities
    // ------------------------------------------------------------------

    pub fn get_liabilities(&self) -> Vec<Liability> {
        self.load().items
    }

    pub fn get_liabilities_loaded(&self) -> Loaded<Liability> {
        self.load()
    }

    pub fn save_liabilities(&self, liabilities: &[Liability]) -> WriteOutcome {
        self.save(liabilities)
    }

    pub fn add_liability(&self, new_liability: NewLiability) -> Created<Liability> {
        self.create(|id| new_liability.into_liability(id))
    }

    pub fn update_liability(&self, liability: Liability) -> UpdateOutcome {
        self.replace(liability)
    }

    pub fn delete_liability(&self, id: &str) -> Removal {
        self.remove::<Liability>(id)
    }

    // ------------------------------------------------------------------
    // Goals
    // ------------------------------------------------------------------

    pub fn get_goals(&self) -> Vec<FinancialGoal> {
        self.load().items
    }

    pub fn get_goals_loaded(&self) -> Loaded<FinancialGoal> {
        self.load()
    }

    pub fn save_goals(&self, goals: &[FinancialGoal]) -> WriteOutcome {
        self.save(goals)
    }

    pub fn add_goal(&self, new_goal: NewGoal) -> Created<FinancialGoal> {
        self.create(|id| new_goal.into_goal(id))
    }

    pub fn update_goal(&self, goal: FinancialGoal) -> UpdateOutcome {
        self.replace(goal)
    }

    pub fn delete_goal(&self, id: &str) -> Removal {
        self.remove::<FinancialGoal>(id)
    }

    /// Progress of `goal` as of the store clock's current day.
    pub fn goal_progress(&self, goal: &FinancialGoal) -> GoalProgress {
        goal_progress(goal, self.clock.today())
    }

    // ------------------------------------------------------------------
    // Monthly records and aggregation
    // ------------------------------------------------------------------

    pub fn get_monthly_records(&self) -> Vec<MonthlyRecord> {
        self.load().items
    }

    pub fn get_monthly_records_loaded(&self) -> Loaded<MonthlyRecord> {
        self.load()
    }

    /// Sum of asset values minus sum of liability values, read fresh.
    pub fn calculate_net_worth(&self) -> f64 {
        net_worth::net_worth(&self.get_assets(), &self.get_liabilities())
    }

    pub fn net_worth_summary(&self) -> NetWorthSummary {
        net_worth::summarize(&self.get_assets(), &self.get_liabilities())
    }

    pub fn asset_breakdown(&self) -> Vec<CategoryTotal> {
        net_worth::asset_breakdown(&self.get_assets())
    }

    pub fn liability_breakdown(&self) -> Vec<CategoryTotal> {
        net_worth::liability_breakdown(&self.get_liabilities())
    }

    pub fn net_worth_trend(&self) -> TrendSeries {
        net_worth::trend_series(&self.get_monthly_records())
    }

    /// Appends a snapshot of the current totals stamped with the clock's now.
    ///
    /// This is the only write path into the monthly records collection.
    pub fn record_monthly_net_worth(&self) -> Created<MonthlyRecord> {
        let summary = self.net_worth_summary();
        let record = MonthlyRecord::from_summary(&summary, self.clock.now());

        let mut records = self.get_monthly_records();
        records.push(record.clone());
        let write = self.save(&records);

        debug!(
            "Recorded net worth {} (assets {}, liabilities {})",
            record.net_worth, record.total_assets, record.total_liabilities
        );
        Created { record, write }
    }

    /// Forwards an external "storage changed" trigger to the event sink.
    pub fn notify_external_change(&self) {
        self.event_sink.emit(StoreEvent::ExternalChange);
    }
}
