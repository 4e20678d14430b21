pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod scheduling;
pub mod startup;
pub mod store;

use std::sync::Arc;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use handlers::MetricsState;
pub use store::SchedulerStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SchedulerStore>,
    pub config: AppConfig,
    pub metrics: Arc<MetricsState>,
}
