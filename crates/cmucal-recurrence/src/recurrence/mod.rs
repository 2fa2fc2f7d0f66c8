//! Recurrence rules for calendar events.
//!
//! Turns the recurrence settings a user picks for an event (frequency,
//! interval, weekdays, nth-weekday, end condition) into:
//! - a normalized record for the event API ([`DbRecurrence`])
//! - an English summary ("Every 2 weeks on Monday and Friday")
//! - an RFC 5545 RRULE value for calendar-library interop
//!
//! Everything here is pure: the anchor and its timezone are always passed
//! in, nothing is read from the clock or environment.

pub mod calendar;
mod derive;
mod interop;
pub mod model;
pub mod presets;
pub mod timezone;
mod validation;

pub use calendar::{
    days_in_month, is_last_weekday_in_month, nth_weekday_of_month, suggested_nth_week,
};
pub use derive::{derive_recurrence, nth_week_label, ordinal, to_rrule_string};
pub use interop::parse_by_day;
pub use model::{
    DbRecurrence, Frequency, NthWeek, RecurrenceEnds, RecurrenceInput, RecurrenceOutput,
    Weekday, WeekdayNum, to_db_recurrence_ends, to_rrule_frequency,
};
pub use presets::{RecurrencePreset, recurrence_presets};
pub use timezone::{end_of_day_utc, localize, resolve_timezone};
pub use validation::validate_input;
