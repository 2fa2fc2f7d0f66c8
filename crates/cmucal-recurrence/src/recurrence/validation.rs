//! Input validation run before any derivation.

use super::model::{Frequency, RecurrenceEnds, RecurrenceInput, Weekday};
use crate::error::{RecurrenceError, RecurrenceResult};

/// ## Summary
/// Checks that a recurrence selection describes a usable rule.
///
/// ## Errors
/// Returns `InvalidArgument` when:
/// - `interval` is zero
/// - `ends` is `On` without an end date, or the end date precedes the anchor's local date
/// - `ends` is `After` without a positive occurrence count
/// - a weekly rule has no selected days, or a selected day is outside 0..=6
pub fn validate_input(input: &RecurrenceInput) -> RecurrenceResult<()> {
    if input.interval == 0 {
        return Err(invalid("interval must be at least 1"));
    }

    match input.ends {
        RecurrenceEnds::Never => {}
        RecurrenceEnds::On => {
            let end_date = input
                .end_date
                .ok_or_else(|| invalid("ends=on requires an end date"))?;
            let start_date = input.start_datetime.date_naive();
            if end_date < start_date {
                return Err(invalid(&format!(
                    "end date {end_date} is before the start date {start_date}"
                )));
            }
        }
        RecurrenceEnds::After => match input.occurrences {
            Some(n) if n > 0 => {}
            _ => return Err(invalid("ends=after requires a positive occurrence count")),
        },
    }

    if let Some(day) = input
        .selected_days
        .iter()
        .find(|day| Weekday::from_index(**day).is_none())
    {
        return Err(invalid(&format!("weekday index {day} is outside 0-6")));
    }

    if input.frequency == Frequency::Weekly && input.selected_days.is_empty() {
        return Err(invalid("weekly recurrence requires at least one selected day"));
    }

    tracing::trace!(
        frequency = %input.frequency,
        interval = input.interval,
        ends = %input.ends,
        "Recurrence input validated"
    );
    Ok(())
}

fn invalid(message: &str) -> RecurrenceError {
    RecurrenceError::InvalidArgument(message.to_string())
}
