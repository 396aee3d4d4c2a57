use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::dashboard_service::{DashboardOptions, DashboardService, DashboardSnapshot};
use crate::core::normalizer;
use crate::core::simulation::{self, CurrentMetrics, Scenario, ScenarioProjection};
use crate::errors::{FinanceError, Result};
use crate::ledger::{LedgerSnapshot, LedgerStore};

/// Where the projected monthly income comes from when no override is given.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IncomeBasis {
    /// Ledger income averaged over the months that have activity.
    #[default]
    Ledger,
    /// Monthly equivalent of the recorded income sources; one-time income is excluded.
    Recurring,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProjectionOptions {
    pub monthly_income: Option<f64>,
    pub monthly_expense: Option<f64>,
    pub starting_balance: Option<f64>,
    pub income_basis: IncomeBasis,
    pub dashboard: DashboardOptions,
}

/// Figures the scenarios were projected from.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct TwinMetrics {
    pub monthly_income: f64,
    pub monthly_expense: f64,
    pub savings_rate: f64,
    pub subscriptions_cost: f64,
    pub starting_balance: f64,
    pub months_covered: u32,
}

impl TwinMetrics {
    pub fn as_current(&self) -> CurrentMetrics {
        CurrentMetrics::new(
            self.monthly_income,
            self.monthly_expense,
            self.starting_balance,
        )
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TwinReport {
    pub dashboard: DashboardSnapshot,
    pub current_metrics: TwinMetrics,
    pub scenarios: BTreeMap<Scenario, ScenarioProjection>,
}

/// Runs the full aggregation and projection pipeline for one snapshot.
pub struct ProjectionService;

impl ProjectionService {
    pub fn twin(
        snapshot: &LedgerSnapshot,
        now: DateTime<Utc>,
        options: &ProjectionOptions,
    ) -> Result<TwinReport> {
        let dashboard = DashboardService::compute(snapshot, now, &options.dashboard)?;
        let current_metrics = Self::current_metrics(snapshot, &dashboard, options)?;

        let scenarios = simulation::project_all(&current_metrics.as_current())?
            .into_iter()
            .map(|projection| (projection.scenario, projection))
            .collect();

        info!(
            monthly_income = current_metrics.monthly_income,
            monthly_expense = current_metrics.monthly_expense,
            savings_rate = current_metrics.savings_rate,
            "generated twin projection"
        );
        Ok(TwinReport {
            dashboard,
            current_metrics,
            scenarios,
        })
    }

    pub fn twin_for_user(
        store: &dyn LedgerStore,
        user_id: &str,
        now: DateTime<Utc>,
        options: &ProjectionOptions,
    ) -> Result<TwinReport> {
        let snapshot = store.snapshot(user_id)?;
        Self::twin(&snapshot, now, options)
    }

    /// Derives per-month income, expense and savings rate from the dashboard,
    /// honouring caller overrides.
    pub fn current_metrics(
        snapshot: &LedgerSnapshot,
        dashboard: &DashboardSnapshot,
        options: &ProjectionOptions,
    ) -> Result<TwinMetrics> {
        let months_covered = match DashboardService::months_covered(&snapshot.transactions) {
            Ok(months) => months,
            Err(FinanceError::EmptyDataset) => {
                debug!("no transactions recorded; averaging over a single month");
                1
            }
            Err(err) => return Err(err),
        };
        let months = f64::from(months_covered);

        let monthly_income = match options.monthly_income {
            Some(income) => income,
            None => match options.income_basis {
                IncomeBasis::Ledger => dashboard.total_income / months,
                IncomeBasis::Recurring => normalizer::monthly_total(&snapshot.income_sources)?,
            },
        };
        let monthly_expense = options
            .monthly_expense
            .unwrap_or(dashboard.total_expenses / months);

        Ok(TwinMetrics {
            monthly_income,
            monthly_expense,
            savings_rate: savings_rate(monthly_income, monthly_expense),
            subscriptions_cost: dashboard.monthly_subscriptions,
            starting_balance: options.starting_balance.unwrap_or(dashboard.balance),
            months_covered,
        })
    }
}

/// Share of income left after expenses, in percent. Zero when there is no income.
pub fn savings_rate(monthly_income: f64, monthly_expense: f64) -> f64 {
    if monthly_income > 0.0 {
        (monthly_income - monthly_expense) / monthly_income * 100.0
    } else {
        0.0
    }
}
