use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Validation error: {0}")]
    Validation(#[from] core_types::CoreError),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Analytics error: {0}")]
    Analytics(#[from] analytics::AnalyticsError),
}
