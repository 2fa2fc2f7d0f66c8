use thiserror::Error;

/// Recurrence derivation and parsing errors
#[derive(Error, Debug)]
pub enum RecurrenceError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("RRule error: {0}")]
    RRuleError(#[from] rrule::RRuleError),
}

pub type RecurrenceResult<T> = std::result::Result<T, RecurrenceError>;
