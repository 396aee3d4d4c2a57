#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use chrono::{DateTime, TimeZone, Utc};
use finote_core::{
    ledger::{BillingCycle, Frequency, IncomeSource, LedgerSnapshot, Subscription, Transaction},
    utils::persistence,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated directory that outlives the calling test.
pub fn temp_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 10, 30, 0).unwrap()
}

/// The four-transaction ledger used throughout the docs: income 500, expenses
/// Food 120 + 30 and Transport 50.
pub fn reference_transactions() -> Vec<Transaction> {
    vec![
        Transaction::income(500.0, "Salary", at(2024, 4, 1)),
        Transaction::expense(120.0, "Food", at(2024, 4, 2)).with_description("Groceries"),
        Transaction::expense(30.0, "Food", at(2024, 4, 3)),
        Transaction::expense(50.0, "Transport", at(2024, 4, 4)),
    ]
}

pub fn household_snapshot() -> LedgerSnapshot {
    let mut transactions = Vec::new();
    for month in 1..=3 {
        transactions.push(Transaction::income(3000.0, "Salary", at(2024, month, 1)));
        transactions.push(Transaction::expense(1200.0, "Rent", at(2024, month, 2)));
        transactions.push(Transaction::expense(450.0, "Groceries", at(2024, month, 10)));
        transactions.push(Transaction::expense(350.0, "groceries", at(2024, month, 20)));
    }
    let mut cancelled = Subscription::new("Gym", 40.0, BillingCycle::Monthly, at(2024, 4, 1));
    cancelled.cancel();
    LedgerSnapshot::new(
        transactions,
        vec![
            IncomeSource::new("Salary", 3000.0, Frequency::Monthly),
            IncomeSource::new("Tax refund", 800.0, Frequency::OneTime),
        ],
        vec![
            Subscription::new("Streaming", 15.0, BillingCycle::Weekly, at(2024, 4, 3)),
            Subscription::new("Backup", 120.0, BillingCycle::Yearly, at(2024, 9, 1)),
            cancelled,
        ],
    )
}

/// Writes `snapshot` to a fresh temp file and returns its path.
pub fn write_snapshot(snapshot: &LedgerSnapshot) -> PathBuf {
    let path = temp_dir().join("snapshot.json");
    persistence::save_snapshot_to_file(snapshot, &path).expect("write snapshot");
    path
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
