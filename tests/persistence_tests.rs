mod common;

use std::fs;

use common::{household_snapshot, temp_dir, write_snapshot};
use finote_core::{
    config::{Config, ConfigManager},
    core::{services::IncomeBasis, utils::tmp_path},
    utils::persistence::load_snapshot_from_file,
    FinanceError,
};

#[test]
fn snapshot_survives_save_and_load() {
    let snapshot = household_snapshot();
    let path = write_snapshot(&snapshot);

    let loaded = load_snapshot_from_file(&path).expect("load snapshot");
    assert_eq!(loaded, snapshot);
    assert_eq!(loaded.active_subscriptions().count(), 2);
    assert!(!tmp_path(&path).exists());
}

#[test]
fn unknown_frequency_in_file_is_rejected() {
    let path = temp_dir().join("bad.json");
    fs::write(
        &path,
        r#"{
            "income_sources": [
                { "id": "7d5d3c7e-0b7a-4d7c-9a55-5b8a4f0f4a11", "source": "Side gig",
                  "amount": 200.0, "frequency": "biweekly" }
            ]
        }"#,
    )
    .unwrap();

    let err = load_snapshot_from_file(&path).unwrap_err();
    assert!(err.is_validation(), "unexpected: {err:?}");
    assert!(err.to_string().contains("Unsupported frequency: biweekly"));
}

#[test]
fn out_of_set_record_values_are_validation_errors() {
    let cases = [
        (
            "one_time_billing.json",
            r#"{ "subscriptions": [
                { "id": "0c6f2a55-3f0e-4d0a-8a1e-2f7a9d1b5c01", "name": "Course",
                  "amount": 90.0, "billing_cycle": "one-time",
                  "next_billing_date": "2024-05-01T00:00:00Z" }
            ] }"#,
            "Unsupported frequency: one-time",
        ),
        (
            "transfer.json",
            r#"{ "transactions": [
                { "id": "5b2d8c0e-1a7f-4c3e-9d5b-7e6f4a3c2b10", "type": "transfer",
                  "amount": 10.0, "category": "Moves", "date": "2024-05-01T00:00:00Z" }
            ] }"#,
            "transfer",
        ),
    ];
    for (name, body, needle) in cases {
        let path = temp_dir().join(name);
        fs::write(&path, body).unwrap();
        let err = load_snapshot_from_file(&path).unwrap_err();
        assert!(matches!(err, FinanceError::Validation { .. }), "{name}: {err:?}");
        assert!(err.to_string().contains(needle), "{name}: {err}");
    }
}

#[test]
fn truncated_file_is_a_storage_error() {
    let path = temp_dir().join("truncated.json");
    fs::write(&path, r#"{ "transactions": [ "#).unwrap();
    let err = load_snapshot_from_file(&path).unwrap_err();
    assert!(matches!(err, FinanceError::Storage(_)), "unexpected: {err:?}");
}

#[test]
fn missing_sections_default_to_empty() {
    let path = temp_dir().join("partial.json");
    fs::write(&path, r#"{ "transactions": [] }"#).unwrap();

    let loaded = load_snapshot_from_file(&path).unwrap();
    assert!(loaded.income_sources.is_empty());
    assert!(loaded.subscriptions.is_empty());
}

#[test]
fn config_defaults_when_file_missing() {
    let manager = ConfigManager::with_base_dir(&temp_dir());
    assert!(!manager.config_path().exists());
    assert_eq!(manager.load().unwrap(), Config::default());
}

#[test]
fn config_round_trips_through_disk() {
    let base = temp_dir();
    let manager = ConfigManager::with_base_dir(&base);
    let config = Config {
        recent_transactions_limit: 10,
        top_categories_limit: 3,
        income_basis: IncomeBasis::Recurring,
    };
    manager.save(&config).expect("save config");

    assert_eq!(manager.config_path(), base.join("config").join("config.json"));
    let reloaded = ConfigManager::with_base_dir(&base).load().unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn partial_config_fills_defaults() {
    let manager = ConfigManager::with_base_dir(&temp_dir());
    fs::create_dir_all(manager.config_path().parent().unwrap()).unwrap();
    fs::write(manager.config_path(), r#"{ "income_basis": "recurring" }"#).unwrap();

    let config = manager.load().unwrap();
    assert_eq!(config.income_basis, IncomeBasis::Recurring);
    assert_eq!(config.recent_transactions_limit, 5);
    assert_eq!(config.top_categories_limit, 5);
}
