//! Recurrence data model.
//!
//! These types describe a user's recurrence selection and the normalized
//! record derived from it. Enums carry their RFC 5545 tokens so the same
//! values flow into stored records and RRULE strings.

mod frequency;
mod input;
mod record;
mod weekday;

pub use frequency::{Frequency, RecurrenceEnds, to_db_recurrence_ends, to_rrule_frequency};
pub use input::RecurrenceInput;
pub use record::{DbRecurrence, RecurrenceOutput};
pub use weekday::{NthWeek, Weekday, WeekdayNum};
