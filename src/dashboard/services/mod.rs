//! Orchestration services for the dashboard context.

mod summary;

pub use summary::{DashboardError, DashboardService};
