mod common;

use std::fs;

use chrono::{Duration, Utc};
use nichiwari_core::{
    config::Config,
    core::{
        services::{CalculationResult, HistoryService, SavedCalculation},
        CalculateParams, Calculator,
    },
    storage::{JsonFileStore, KeyValueStore},
};

fn snapshot(daily: u64, name: &str) -> CalculationResult {
    CalculationResult {
        daily_cost: daily,
        daily_cost_formatted: format!("¥{daily}/day"),
        monthly_cost: daily * 30,
        yearly_cost: daily * 365,
        product_name: Some(name.into()),
        price: daily * 365,
        years: 1,
        months: 0,
        period_formatted: "1 year".into(),
    }
}

#[test]
fn history_survives_a_new_service_instance() {
    let (store, config) = common::setup_test_env();
    let root = config.base_dir().join("store");
    let saved = HistoryService::new(store)
        .add_to_history(snapshot(42, "Kettle"))
        .expect("stored");

    let reopened = HistoryService::new(JsonFileStore::new(root).unwrap());
    let history = reopened.get_history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0], saved);
    assert_eq!(history[0].saved_at, saved.saved_at);
}

#[test]
fn eviction_keeps_the_ten_newest() {
    let (store, _config) = common::setup_test_env();
    let history = HistoryService::new(store);
    for daily in 1..=15 {
        history.add_to_history(snapshot(daily, "Item"));
    }
    let dailies: Vec<u64> = history
        .get_history()
        .iter()
        .map(|entry| entry.result.daily_cost)
        .collect();
    assert_eq!(dailies, (6..=15).rev().collect::<Vec<_>>());
}

#[test]
fn corrupt_file_reads_as_empty() {
    let (store, _config) = common::setup_test_env();
    fs::write(store.path_for("nichiwari_history").unwrap(), "[{\"id\": 1").unwrap();
    let history = HistoryService::new(store);
    assert!(history.get_history().is_empty());
}

#[test]
fn persisted_entries_use_camel_case_and_rfc3339() {
    let (store, _config) = common::setup_test_env();
    let path = store.path_for("nichiwari_history").unwrap();
    let entry = SavedCalculation {
        id: "f47ac10b-58cc-4372-a567-0e02b2c3d479".into(),
        result: snapshot(7, "Pen"),
        saved_at: Utc::now() - Duration::days(1),
    };
    store
        .set(
            "nichiwari_history",
            &serde_json::to_string(&vec![entry.clone()]).unwrap(),
        )
        .unwrap();

    let raw = fs::read_to_string(path).unwrap();
    assert!(raw.contains("\"savedAt\""));
    assert!(raw.contains("\"dailyCostFormatted\""));
    assert!(raw.contains("\"productName\":\"Pen\""));

    let history = HistoryService::new(store).get_history();
    assert_eq!(history, vec![entry]);
}

#[test]
fn configured_key_and_limit() {
    let (store, _config) = common::setup_test_env();
    let config = Config {
        history_limit: 2,
        history_key: "custom_history".into(),
        ..Config::default()
    };
    let path = store.path_for("custom_history").unwrap();
    let history = HistoryService::with_config(store, &config);
    for daily in 1..=3 {
        history.add_to_history(snapshot(daily, "Item"));
    }
    assert_eq!(history.get_history().len(), 2);
    assert!(path.exists());
}

#[test]
fn calculator_writes_through_to_disk() {
    let (store, config) = common::setup_test_env();
    let root = config.base_dir().join("store");
    let boxed: Box<dyn KeyValueStore> = Box::new(store);
    let mut calculator = Calculator::new(
        HistoryService::new(boxed),
        nichiwari_core::core::services::TelemetryReporter::disabled(),
    );
    calculator.calculate(CalculateParams {
        name: Some("Robot vacuum".into()),
        price: 60_000.0,
        years: 5,
        months: 0,
    });
    calculator.calculate(CalculateParams {
        name: None,
        price: 60_000.0,
        years: 0,
        months: 12,
    });
    assert!(calculator.error().is_some());

    let history = HistoryService::new(JsonFileStore::new(root).unwrap()).get_history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].result.daily_cost, 32);
    assert_eq!(history[0].result.period_formatted, "5 years");
}
