use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RecurrenceError, RecurrenceResult};

/// Recurrence frequency (RFC 5545 §3.3.10 `FREQ`), limited to the units a
/// user can pick for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
            Self::Yearly => "YEARLY",
        }
    }

    /// Singular unit name used in summaries ("day", "week", ...).
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Daily => "day",
            Self::Weekly => "week",
            Self::Monthly => "month",
            Self::Yearly => "year",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        to_rrule_frequency(s)
    }
}

/// How a recurrence terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceEnds {
    Never,
    On,
    After,
}

impl RecurrenceEnds {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::On => "on",
            Self::After => "after",
        }
    }
}

impl fmt::Display for RecurrenceEnds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecurrenceEnds {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        to_db_recurrence_ends(s)
    }
}

/// ## Summary
/// Coerces a UI frequency label (`"daily"`, `"Weekly"`, ...) into a [`Frequency`].
///
/// Matching is case-insensitive. Unrecognized labels are rejected rather
/// than defaulted.
///
/// ## Errors
/// Returns `InvalidArgument` if the label is not one of the four frequencies.
pub fn to_rrule_frequency(label: &str) -> RecurrenceResult<Frequency> {
    match label.to_ascii_lowercase().as_str() {
        "daily" => Ok(Frequency::Daily),
        "weekly" => Ok(Frequency::Weekly),
        "monthly" => Ok(Frequency::Monthly),
        "yearly" => Ok(Frequency::Yearly),
        _ => Err(RecurrenceError::InvalidArgument(format!(
            "Invalid frequency: {label}"
        ))),
    }
}

/// ## Summary
/// Coerces a UI end-condition label (`"never"`, `"on"`, `"after"`) into a [`RecurrenceEnds`].
///
/// ## Errors
/// Returns `InvalidArgument` if the label is not a known end condition.
pub fn to_db_recurrence_ends(label: &str) -> RecurrenceResult<RecurrenceEnds> {
    match label.to_ascii_lowercase().as_str() {
        "never" => Ok(RecurrenceEnds::Never),
        "on" => Ok(RecurrenceEnds::On),
        "after" => Ok(RecurrenceEnds::After),
        _ => Err(RecurrenceError::InvalidArgument(format!(
            "Invalid ends: {label}"
        ))),
    }
}
