use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Frequency, WeekdayNum};

/// Normalized recurrence record, shaped like the `recurrence_rules` table
/// the event API stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbRecurrence {
    pub frequency: Frequency,
    pub interval: u32,
    /// Set iff the rule ends after a number of occurrences.
    pub count: Option<u32>,
    /// Set iff the rule ends on a date; the last instant of that local day, in UTC.
    pub until: Option<DateTime<Utc>>,
    pub event_id: i64,
    pub by_day: Option<Vec<WeekdayNum>>,
    pub by_month: Option<u32>,
    pub by_month_day: Option<u32>,
    pub start_datetime: DateTime<Utc>,
}

/// Everything derived from one recurrence selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceOutput {
    pub db_recurrence: DbRecurrence,
    pub summary: String,
}
