use thiserror::Error;

/// Core error type with minimal dependencies
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] config::ConfigError),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
