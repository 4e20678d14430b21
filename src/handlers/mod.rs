pub mod dashboard_handler;
pub mod employees_handler;
pub mod health;
pub mod metrics;
pub mod references_handler;
pub mod schedules_handler;

pub use health::health_check;
pub use metrics::{setup_metrics_recorder, MetricsState};
