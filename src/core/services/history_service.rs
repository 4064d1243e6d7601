use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::{Config, DEFAULT_HISTORY_KEY, DEFAULT_HISTORY_LIMIT};
use crate::storage::KeyValueStore;

use super::CalculationResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCalculation {
    pub id: String,
    pub result: CalculationResult,
    pub saved_at: DateTime<Utc>,
}

/// Newest-first list of past calculations kept under a single store key.
///
/// Storage failures never reach the caller: reads fall back to an empty
/// history and writes are dropped with a warning.
pub struct HistoryService<S: KeyValueStore> {
    store: S,
    key: String,
    limit: usize,
}

impl<S: KeyValueStore> HistoryService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: DEFAULT_HISTORY_KEY.into(),
            limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    pub fn with_config(store: S, config: &Config) -> Self {
        Self {
            store,
            key: config.history_key.clone(),
            limit: config.history_limit.max(1),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Prepends `result` unless an identical snapshot is already stored.
    pub fn add_to_history(&self, result: CalculationResult) -> Option<SavedCalculation> {
        let mut history = self.get_history();
        if history.iter().any(|saved| saved.result == result) {
            debug!("skipping duplicate history entry");
            return None;
        }

        let entry = SavedCalculation {
            id: Uuid::new_v4().to_string(),
            result,
            saved_at: Utc::now(),
        };
        history.insert(0, entry.clone());
        history.truncate(self.limit);
        self.save(&history);
        Some(entry)
    }

    pub fn get_history(&self) -> Vec<SavedCalculation> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(error = %err, "failed to read history");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(history) => history,
            Err(err) => {
                warn!(error = %err, "discarding unreadable history");
                Vec::new()
            }
        }
    }

    /// Returns whether an entry with `id` existed.
    pub fn remove_from_history(&self, id: &str) -> bool {
        let mut history = self.get_history();
        let before = history.len();
        history.retain(|saved| saved.id != id);
        if history.len() == before {
            return false;
        }
        self.save(&history);
        true
    }

    pub fn clear_history(&self) {
        if let Err(err) = self.store.remove(&self.key) {
            warn!(error = %err, "failed to clear history");
        }
    }

    fn save(&self, history: &[SavedCalculation]) {
        let json = match serde_json::to_string(history) {
            Ok(json) => json,
            Err(err) => {
                warn!(error = %err, "failed to encode history");
                return;
            }
        };
        if let Err(err) = self.store.set(&self.key, &json) {
            warn!(error = %err, "failed to write history");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, Result as StorageResult, StorageError};

    fn result(daily: u64) -> CalculationResult {
        CalculationResult {
            daily_cost: daily,
            daily_cost_formatted: format!("¥{daily}/day"),
            monthly_cost: daily * 30,
            yearly_cost: daily * 365,
            product_name: Some("Item".into()),
            price: daily * 365,
            years: 1,
            months: 0,
            period_formatted: "1 year".into(),
        }
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Poisoned)
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Poisoned)
        }

        fn remove(&self, _key: &str) -> StorageResult<()> {
            Err(StorageError::Poisoned)
        }
    }

    #[test]
    fn newest_entry_comes_first() {
        let history = HistoryService::new(MemoryStore::new());
        history.add_to_history(result(1)).unwrap();
        history.add_to_history(result(2)).unwrap();
        let saved = history.get_history();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].result.daily_cost, 2);
        assert_ne!(saved[0].id, saved[1].id);
    }

    #[test]
    fn duplicates_are_ignored() {
        let history = HistoryService::new(MemoryStore::new());
        assert!(history.add_to_history(result(5)).is_some());
        assert!(history.add_to_history(result(5)).is_none());
        assert_eq!(history.get_history().len(), 1);
    }

    #[test]
    fn cap_keeps_newest() {
        let history = HistoryService::new(MemoryStore::new());
        for daily in 0..12 {
            history.add_to_history(result(daily));
        }
        let saved = history.get_history();
        assert_eq!(saved.len(), DEFAULT_HISTORY_LIMIT);
        assert_eq!(saved[0].result.daily_cost, 11);
        assert_eq!(saved[9].result.daily_cost, 2);
    }

    #[test]
    fn configured_limit_applies() {
        let config = Config {
            history_limit: 3,
            ..Config::default()
        };
        let history = HistoryService::with_config(MemoryStore::new(), &config);
        for daily in 0..5 {
            history.add_to_history(result(daily));
        }
        assert_eq!(history.get_history().len(), 3);
    }

    #[test]
    fn corrupt_data_reads_as_empty() {
        let store = MemoryStore::new();
        store.set(DEFAULT_HISTORY_KEY, "{not json").unwrap();
        let history = HistoryService::new(store);
        assert!(history.get_history().is_empty());
        assert!(history.add_to_history(result(1)).is_some());
        assert_eq!(history.get_history().len(), 1);
    }

    #[test]
    fn remove_and_clear() {
        let history = HistoryService::new(MemoryStore::new());
        let first = history.add_to_history(result(1)).unwrap();
        history.add_to_history(result(2)).unwrap();
        assert!(history.remove_from_history(&first.id));
        assert!(!history.remove_from_history(&first.id));
        assert_eq!(history.get_history().len(), 1);
        history.clear_history();
        assert!(history.get_history().is_empty());
    }

    #[test]
    fn store_failures_are_swallowed() {
        let history = HistoryService::new(BrokenStore);
        assert!(history.get_history().is_empty());
        assert!(history.add_to_history(result(1)).is_some());
        assert!(!history.remove_from_history("missing"));
        history.clear_history();
    }

    #[test]
    fn persisted_shape_is_camel_case() {
        let store = std::sync::Arc::new(MemoryStore::new());
        let history = HistoryService::new(store.clone());
        history.add_to_history(result(3)).unwrap();
        let raw = store.get(DEFAULT_HISTORY_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(json[0]["savedAt"].is_string());
        assert_eq!(json[0]["result"]["dailyCostFormatted"], "¥3/day");
    }
}
