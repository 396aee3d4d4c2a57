use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use finote_core::{
    core::services::{DashboardOptions, DashboardService, ProjectionOptions, ProjectionService},
    ledger::{BillingCycle, Frequency, IncomeSource, LedgerSnapshot, Subscription, Transaction},
};

const CATEGORIES: [&str; 6] = ["Rent", "Groceries", "groceries", "Transport", "Utilities", "Fun"];

fn build_sample_snapshot(txn_count: usize) -> LedgerSnapshot {
    let start = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
    let transactions = (0..txn_count)
        .map(|idx| {
            let date = start + Duration::hours(idx as i64 * 7);
            if idx % 10 == 0 {
                Transaction::income(2500.0, "Salary", date)
            } else {
                let category = CATEGORIES[idx % CATEGORIES.len()];
                Transaction::expense(20.0 + (idx % 100) as f64, category, date)
            }
        })
        .collect();

    LedgerSnapshot::new(
        transactions,
        vec![IncomeSource::new("Salary", 2500.0, Frequency::Monthly)],
        vec![
            Subscription::new("Streaming", 15.0, BillingCycle::Weekly, start),
            Subscription::new("Backup", 120.0, BillingCycle::Yearly, start),
        ],
    )
}

fn bench_dashboard(c: &mut Criterion) {
    let snapshot = build_sample_snapshot(black_box(10_000));
    let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let options = DashboardOptions::default();

    c.bench_function("dashboard_10k", |b| {
        b.iter(|| {
            let dashboard =
                DashboardService::compute(&snapshot, now, &options).expect("dashboard");
            black_box(dashboard);
        })
    });
}

fn bench_twin(c: &mut Criterion) {
    let snapshot = build_sample_snapshot(black_box(10_000));
    let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let options = ProjectionOptions::default();

    c.bench_function("twin_10k", |b| {
        b.iter(|| {
            let report = ProjectionService::twin(&snapshot, now, &options).expect("twin");
            black_box(report);
        })
    });
}

criterion_group!(benches, bench_dashboard, bench_twin);
criterion_main!(benches);
