use tracing::debug;

use super::types::{
    CurrentMetrics, MonthProjection, Scenario, ScenarioProjection, PROJECTION_MONTHS,
};
use crate::errors::{FinanceError, Result};

/// Projects the balance month by month under `scenario`.
///
/// Each month adds `(income - expense) * (1 + rate)` to the running balance.
/// Income and expenses are reported at their nominal values.
pub fn project(metrics: &CurrentMetrics, scenario: Scenario) -> Result<ScenarioProjection> {
    validate(metrics)?;

    let adjusted_delta = metrics.net_monthly() * (1.0 + scenario.growth_rate());
    let mut balance = metrics.starting_balance;
    let months: Vec<MonthProjection> = (1..=PROJECTION_MONTHS)
        .map(|month_index| {
            balance += adjusted_delta;
            MonthProjection {
                month_index,
                balance,
                income: metrics.monthly_income,
                expenses: metrics.monthly_expense,
                savings: adjusted_delta,
            }
        })
        .collect();

    debug!(%scenario, final_balance = balance, "projected scenario");
    Ok(ScenarioProjection {
        scenario,
        months,
        final_balance: balance,
    })
}

/// Parses `key` and projects it; unknown keys fail with `UnknownScenario`.
pub fn project_key(metrics: &CurrentMetrics, key: &str) -> Result<ScenarioProjection> {
    project(metrics, key.parse()?)
}

/// Runs every scenario in [`Scenario::ALL`] order. Runs share no state.
pub fn project_all(metrics: &CurrentMetrics) -> Result<Vec<ScenarioProjection>> {
    Scenario::ALL
        .into_iter()
        .map(|scenario| project(metrics, scenario))
        .collect()
}

fn validate(metrics: &CurrentMetrics) -> Result<()> {
    let fields = [
        ("monthly income", metrics.monthly_income),
        ("monthly expense", metrics.monthly_expense),
    ];
    for (name, value) in fields {
        if !value.is_finite() || value < 0.0 {
            return Err(FinanceError::validation(
                name,
                format!("must be a non-negative number, got {value}"),
            ));
        }
    }
    if !metrics.starting_balance.is_finite() {
        return Err(FinanceError::validation(
            "starting balance",
            format!("must be finite, got {}", metrics.starting_balance),
        ));
    }
    Ok(())
}
