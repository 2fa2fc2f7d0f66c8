use thiserror::Error;

/// Application-level errors (command-line layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    RecurrenceError(#[from] cmucal_recurrence::error::RecurrenceError),

    #[error(transparent)]
    CoreError(#[from] cmucal_core::error::CoreError),

    #[error("Invalid request JSON: {0}")]
    RequestError(#[from] serde_json::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
