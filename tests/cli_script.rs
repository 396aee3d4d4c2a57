mod common;

use assert_cmd::Command;
use common::{household_snapshot, temp_dir, write_snapshot};
use predicates::{prelude::*, str::contains};

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("finote_cli").unwrap();
    cmd.env("FINOTE_HOME", temp_dir());
    cmd
}

#[test]
fn dashboard_prints_json_summary() {
    let path = write_snapshot(&household_snapshot());
    let output = cli().arg("dashboard").arg(&path).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["balance"], 3000.0);
    assert_eq!(json["monthly_subscriptions"], 75.0);
    assert_eq!(json["recent_transactions"].as_array().unwrap().len(), 5);
}

#[test]
fn twin_accepts_overrides() {
    let path = write_snapshot(&household_snapshot());
    let output = cli()
        .arg("twin")
        .arg(&path)
        .args(["--income", "1000", "--expense", "400", "--start", "0"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["currentMetrics"]["savingsRate"], 60.0);
    assert_eq!(json["scenarios"]["baseline"]["finalBalance"], 7200.0);
}

#[test]
fn normalize_converts_weekly() {
    cli()
        .args(["normalize", "15", "weekly"])
        .assert()
        .success()
        .stdout(contains("65"));
}

#[test]
fn normalize_rejects_unknown_frequency() {
    cli()
        .args(["normalize", "10", "biweekly"])
        .assert()
        .failure()
        .stderr(contains("Unsupported frequency"));
}

#[test]
fn scenario_rejects_unknown_key() {
    cli()
        .args(["scenario", "moonshot", "100", "50"])
        .assert()
        .failure()
        .stderr(contains("Unknown scenario"));
}

#[test]
fn scenario_prints_months() {
    cli()
        .args(["scenario", "aggressive", "3000", "2000"])
        .assert()
        .success()
        .stdout(contains("\"finalBalance\": 13200.0"));
}

#[test]
fn version_reports_package_version() {
    cli()
        .arg("version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_command_prints_usage() {
    cli().assert().failure().stderr(contains("Usage: finote_cli"));
}

#[test]
fn twin_rejects_non_numeric_override() {
    let path = write_snapshot(&household_snapshot());
    cli()
        .arg("twin")
        .arg(&path)
        .args(["--income", "lots"])
        .assert()
        .failure()
        .stderr(contains("--income"));
}

#[test]
fn twin_reports_bad_records_as_validation() {
    let path = temp_dir().join("bad.json");
    std::fs::write(
        &path,
        r#"{ "income_sources": [
            { "id": "7d5d3c7e-0b7a-4d7c-9a55-5b8a4f0f4a11", "source": "Gig",
              "amount": 20.0, "frequency": "biweekly" }
        ] }"#,
    )
    .unwrap();
    cli()
        .arg("twin")
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("Validation failed").and(contains("Unsupported frequency: biweekly")));
}
