use serde::{Deserialize, Serialize};

use crate::core::services::{
    DashboardOptions, IncomeBasis, ProjectionOptions, DEFAULT_RECENT_LIMIT,
};

/// Stores user preferences that shape dashboard and projection output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_recent_limit")]
    pub recent_transactions_limit: usize,
    #[serde(default = "Config::default_top_categories")]
    pub top_categories_limit: usize,
    #[serde(default)]
    pub income_basis: IncomeBasis,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recent_transactions_limit: Self::default_recent_limit(),
            top_categories_limit: Self::default_top_categories(),
            income_basis: IncomeBasis::default(),
        }
    }
}

impl Config {
    pub fn default_recent_limit() -> usize {
        DEFAULT_RECENT_LIMIT
    }

    pub fn default_top_categories() -> usize {
        5
    }

    pub fn dashboard_options(&self) -> DashboardOptions {
        DashboardOptions {
            recent_limit: self.recent_transactions_limit,
        }
    }

    pub fn projection_options(&self) -> ProjectionOptions {
        ProjectionOptions {
            income_basis: self.income_basis,
            dashboard: self.dashboard_options(),
            ..ProjectionOptions::default()
        }
    }
}
