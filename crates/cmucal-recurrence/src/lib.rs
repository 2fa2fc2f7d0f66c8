pub mod error;
pub mod recurrence;
