//! Twelve-month what-if balance projections.

pub mod engine;
pub mod types;

pub use engine::{project, project_all, project_key};
pub use types::{
    CurrentMetrics, MonthProjection, Scenario, ScenarioProjection, PROJECTION_MONTHS,
};
