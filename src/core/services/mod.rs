pub mod dashboard_service;
pub mod projection_service;

pub use dashboard_service::{
    CategoryShare, DashboardOptions, DashboardService, DashboardSnapshot, DEFAULT_RECENT_LIMIT,
};
pub use projection_service::{
    savings_rate, IncomeBasis, ProjectionOptions, ProjectionService, TwinMetrics, TwinReport,
};
