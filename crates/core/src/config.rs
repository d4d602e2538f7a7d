//! Store configuration.

use log::warn;

use crate::constants::{
    ASSETS_KEY_SUFFIX, DEFAULT_KEY_PREFIX, GOALS_KEY_SUFFIX, LIABILITIES_KEY_SUFFIX,
    MONTHLY_RECORDS_KEY_SUFFIX,
};
use crate::events::CollectionKind;

pub const KEY_PREFIX_ENV: &str = "WEALTHMATE_KEY_PREFIX";
pub const SEED_EXAMPLES_ENV: &str = "WEALTHMATE_SEED_EXAMPLES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Namespace joined to each collection suffix, e.g. `wealthmate-assets`.
    pub key_prefix: String,
    /// Serve the built-in example records when a collection is absent.
    pub seed_examples: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            seed_examples: true,
        }
    }
}

impl StoreConfig {
    /// Loads `.env` (if present) and reads the `WEALTHMATE_*` variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let key_prefix = lookup(KEY_PREFIX_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or(defaults.key_prefix);

        let seed_examples = match lookup(SEED_EXAMPLES_ENV) {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                warn!(
                    "Ignoring invalid {} value '{}', using {}",
                    SEED_EXAMPLES_ENV, raw, defaults.seed_examples
                );
                defaults.seed_examples
            }),
            None => defaults.seed_examples,
        };

        Self {
            key_prefix,
            seed_examples,
        }
    }

    /// Storage key of a collection.
    pub fn key_for(&self, collection: CollectionKind) -> String {
        let suffix = match collection {
            CollectionKind::Assets => ASSETS_KEY_SUFFIX,
            CollectionKind::Liabilities => LIABILITIES_KEY_SUFFIX,
            CollectionKind::MonthlyRecords => MONTHLY_RECORDS_KEY_SUFFIX,
            CollectionKind::Goals => GOALS_KEY_SUFFIX,
        };
        format!("{}-{}", self.key_prefix, suffix)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_keys_match_persisted_layout() {
        let config = StoreConfig::default();
        assert_eq!(config.key_for(CollectionKind::Assets), "wealthmate-assets");
        assert_eq!(
            config.key_for(CollectionKind::Liabilities),
            "wealthmate-liabilities"
        );
        assert_eq!(
            config.key_for(CollectionKind::MonthlyRecords),
            "wealthmate-monthly-records"
        );
        assert_eq!(config.key_for(CollectionKind::Goals), "wealthmate-goals");
    }

    #[test]
    fn test_from_lookup_reads_overrides() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            (KEY_PREFIX_ENV, " sandbox "),
            (SEED_EXAMPLES_ENV, "off"),
        ]));
        assert_eq!(config.key_prefix, "sandbox");
        assert!(!config.seed_examples);
        assert_eq!(config.key_for(CollectionKind::Goals), "sandbox-goals");
    }

    #[test]
    fn test_from_lookup_falls_back_on_invalid_values() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            (KEY_PREFIX_ENV, "   "),
            (SEED_EXAMPLES_ENV, "maybe"),
        ]));
        assert_eq!(config, StoreConfig::default());
    }
}
