use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

use super::{Frequency, NthWeek, RecurrenceEnds};

/// A user's recurrence selection, as assembled by the event form.
///
/// The anchor carries its own timezone; weekday, day-of-month and
/// end-of-day calculations are done in that zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceInput {
    pub frequency: Frequency,
    /// Repeat every N units of `frequency`.
    pub interval: u32,
    /// Weekday indices, 0 = Sunday through 6 = Saturday. Used for `Weekly`.
    pub selected_days: Vec<u8>,
    pub ends: RecurrenceEnds,
    /// Required when `ends` is `On`.
    pub end_date: Option<NaiveDate>,
    /// Required when `ends` is `After`.
    pub occurrences: Option<u32>,
    pub start_datetime: DateTime<Tz>,
    /// Used for `Monthly` only; `None` means "same day of the month".
    pub nth_week: Option<NthWeek>,
    pub event_id: i64,
}

impl RecurrenceInput {
    /// Creates an open-ended rule repeating every single unit of `frequency`.
    #[must_use]
    pub const fn new(frequency: Frequency, start_datetime: DateTime<Tz>, event_id: i64) -> Self {
        Self {
            frequency,
            interval: 1,
            selected_days: Vec::new(),
            ends: RecurrenceEnds::Never,
            end_date: None,
            occurrences: None,
            start_datetime,
            nth_week: None,
            event_id,
        }
    }

    #[must_use]
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    #[must_use]
    pub fn with_days(mut self, days: impl IntoIterator<Item = u8>) -> Self {
        self.selected_days = days.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_nth_week(mut self, nth_week: NthWeek) -> Self {
        self.nth_week = Some(nth_week);
        self
    }

    #[must_use]
    pub fn ending_on(mut self, end_date: NaiveDate) -> Self {
        self.ends = RecurrenceEnds::On;
        self.end_date = Some(end_date);
        self.occurrences = None;
        self
    }

    #[must_use]
    pub fn ending_after(mut self, occurrences: u32) -> Self {
        self.ends = RecurrenceEnds::After;
        self.occurrences = Some(occurrences);
        self.end_date = None;
        self
    }
}
