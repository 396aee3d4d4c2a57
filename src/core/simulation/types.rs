use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::FinanceError;

/// Number of months every projection covers.
pub const PROJECTION_MONTHS: u32 = 12;

/// Named what-if assumption applied to projected net monthly savings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Scenario {
    Baseline,
    Optimistic,
    Conservative,
    Aggressive,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Baseline,
        Scenario::Optimistic,
        Scenario::Conservative,
        Scenario::Aggressive,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Scenario::Baseline => "baseline",
            Scenario::Optimistic => "optimistic",
            Scenario::Conservative => "conservative",
            Scenario::Aggressive => "aggressive",
        }
    }

    /// Fractional adjustment applied to each month's income minus expenses.
    pub fn growth_rate(self) -> f64 {
        match self {
            Scenario::Baseline => 0.0,
            Scenario::Optimistic => 0.05,
            Scenario::Conservative => -0.05,
            Scenario::Aggressive => 0.10,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Scenario {
    type Err = FinanceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.key().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| FinanceError::UnknownScenario(value.to_string()))
    }
}

impl TryFrom<String> for Scenario {
    type Error = FinanceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Current-state figures a projection starts from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CurrentMetrics {
    pub monthly_income: f64,
    pub monthly_expense: f64,
    #[serde(default)]
    pub starting_balance: f64,
}

impl CurrentMetrics {
    pub fn new(monthly_income: f64, monthly_expense: f64, starting_balance: f64) -> Self {
        Self {
            monthly_income,
            monthly_expense,
            starting_balance,
        }
    }

    pub fn net_monthly(&self) -> f64 {
        self.monthly_income - self.monthly_expense
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MonthProjection {
    pub month_index: u32,
    pub balance: f64,
    pub income: f64,
    pub expenses: f64,
    /// Scenario-adjusted net delta added to the balance this month.
    pub savings: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioProjection {
    pub scenario: Scenario,
    pub months: Vec<MonthProjection>,
    pub final_balance: f64,
}
