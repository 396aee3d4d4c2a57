//! Response shapes handed to the request layer, plus entry points that build them.
//!
//! Values are rounded here and nowhere else: money to cents, the savings rate to
//! one decimal place. The core keeps full precision.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::config::Config;
use crate::core::services::{
    CategoryShare, DashboardService, DashboardSnapshot, ProjectionOptions, ProjectionService,
    TwinMetrics, TwinReport,
};
use crate::core::simulation::{MonthProjection, Scenario, ScenarioProjection};
use crate::errors::Result;
use crate::ledger::{LedgerSnapshot, Transaction, TransactionKind};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardResponse {
    pub balance: f64,
    pub total_income: f64,
    pub total_expenses: f64,
    pub monthly_subscriptions: f64,
    pub category_breakdown: BTreeMap<String, f64>,
    pub top_categories: Vec<CategoryShare>,
    pub recent_transactions: Vec<RecentTransaction>,
    pub transaction_count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecentTransaction {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TwinResponse {
    pub current_metrics: CurrentMetricsView,
    pub scenarios: BTreeMap<Scenario, ScenarioView>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentMetricsView {
    pub monthly_income: f64,
    pub monthly_expense: f64,
    pub savings_rate: f64,
    pub subscriptions_cost: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioView {
    pub months: Vec<MonthView>,
    pub final_balance: f64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct MonthView {
    pub month: u32,
    pub balance: f64,
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
}

/// Rounds to cents.
pub fn round_money(value: f64) -> f64 {
    round_to(value, 2)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

impl DashboardResponse {
    pub fn from_snapshot(dashboard: &DashboardSnapshot, top_categories: usize) -> Self {
        Self {
            balance: round_money(dashboard.balance),
            total_income: round_money(dashboard.total_income),
            total_expenses: round_money(dashboard.total_expenses),
            monthly_subscriptions: round_money(dashboard.monthly_subscriptions),
            category_breakdown: dashboard
                .category_breakdown
                .iter()
                .map(|(category, amount)| (category.clone(), round_money(*amount)))
                .collect(),
            top_categories: dashboard
                .category_shares(Some(top_categories))
                .into_iter()
                .map(|share| CategoryShare {
                    amount: round_money(share.amount),
                    percentage: round_to(share.percentage, 1),
                    ..share
                })
                .collect(),
            recent_transactions: dashboard
                .recent_transactions
                .iter()
                .map(RecentTransaction::from)
                .collect(),
            transaction_count: dashboard.transaction_count,
        }
    }
}

impl From<&Transaction> for RecentTransaction {
    fn from(txn: &Transaction) -> Self {
        Self {
            id: txn.id,
            kind: txn.kind,
            category: txn.category.clone(),
            amount: round_money(txn.amount),
            date: txn.date,
        }
    }
}

impl From<&TwinMetrics> for CurrentMetricsView {
    fn from(metrics: &TwinMetrics) -> Self {
        Self {
            monthly_income: round_money(metrics.monthly_income),
            monthly_expense: round_money(metrics.monthly_expense),
            savings_rate: round_to(metrics.savings_rate, 1),
            subscriptions_cost: round_money(metrics.subscriptions_cost),
        }
    }
}

impl From<&MonthProjection> for MonthView {
    fn from(month: &MonthProjection) -> Self {
        Self {
            month: month.month_index,
            balance: round_money(month.balance),
            income: round_money(month.income),
            expenses: round_money(month.expenses),
            savings: round_money(month.savings),
        }
    }
}

impl From<&ScenarioProjection> for ScenarioView {
    fn from(projection: &ScenarioProjection) -> Self {
        Self {
            months: projection.months.iter().map(MonthView::from).collect(),
            final_balance: round_money(projection.final_balance),
        }
    }
}

impl From<&TwinReport> for TwinResponse {
    fn from(report: &TwinReport) -> Self {
        Self {
            current_metrics: CurrentMetricsView::from(&report.current_metrics),
            scenarios: report
                .scenarios
                .iter()
                .map(|(scenario, projection)| (*scenario, ScenarioView::from(projection)))
                .collect(),
        }
    }
}

/// Builds the dashboard response for a snapshot.
pub fn api_dashboard(
    snapshot: &LedgerSnapshot,
    now: DateTime<Utc>,
    config: &Config,
) -> Result<DashboardResponse> {
    let dashboard = DashboardService::compute(snapshot, now, &config.dashboard_options())?;
    Ok(DashboardResponse::from_snapshot(
        &dashboard,
        config.top_categories_limit,
    ))
}

/// Builds the twin response. `overrides` may pin income, expense or starting
/// balance; its income basis and dashboard settings are taken from `config`.
pub fn api_twin(
    snapshot: &LedgerSnapshot,
    now: DateTime<Utc>,
    config: &Config,
    overrides: &ProjectionOptions,
) -> Result<TwinResponse> {
    let options = ProjectionOptions {
        monthly_income: overrides.monthly_income,
        monthly_expense: overrides.monthly_expense,
        starting_balance: overrides.starting_balance,
        ..config.projection_options()
    };
    let report = ProjectionService::twin(snapshot, now, &options)?;
    Ok(TwinResponse::from(&report))
}
