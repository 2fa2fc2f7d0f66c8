//! Derivation of stored records, summaries and RRULE strings from a
//! recurrence selection.
//!
//! Both public entry points share [`derive_rule_fields`] so the by-rule
//! parts of the stored record and the RRULE string cannot drift apart.

mod rrule_string;
mod summary;

use chrono::{Datelike, Utc};

pub use rrule_string::{RuleEnd, format_rrule};
pub use summary::{nth_week_label, ordinal};

use super::model::{
    DbRecurrence, Frequency, RecurrenceEnds, RecurrenceInput, RecurrenceOutput, Weekday,
    WeekdayNum,
};
use super::timezone::end_of_day_utc;
use super::validation::validate_input;
use crate::error::RecurrenceResult;

/// By-rule parts shared by [`DbRecurrence`] and the RRULE string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleFields {
    pub by_day: Option<Vec<WeekdayNum>>,
    pub by_month: Option<u32>,
    pub by_month_day: Option<u32>,
}

/// ## Summary
/// Derives the `BYDAY` / `BYMONTH` / `BYMONTHDAY` parts for a selection.
///
/// - Weekly: every selected weekday, Sunday first
/// - Monthly with an nth week: the anchor's weekday at that position (`2TU`, `-1FR`)
/// - Monthly otherwise: the anchor's day of month
/// - Yearly: the anchor's month and day of month
/// - Daily: nothing
#[must_use]
pub fn derive_rule_fields(input: &RecurrenceInput) -> RuleFields {
    let anchor = &input.start_datetime;

    match input.frequency {
        Frequency::Daily => RuleFields::default(),
        Frequency::Weekly => RuleFields {
            by_day: Some(
                selected_weekdays(input)
                    .into_iter()
                    .map(WeekdayNum::every)
                    .collect(),
            ),
            ..RuleFields::default()
        },
        Frequency::Monthly => match input.nth_week {
            Some(nth) => RuleFields {
                by_day: Some(vec![WeekdayNum::nth(nth, anchor.weekday().into())]),
                ..RuleFields::default()
            },
            None => RuleFields {
                by_month_day: Some(anchor.day()),
                ..RuleFields::default()
            },
        },
        Frequency::Yearly => RuleFields {
            by_day: None,
            by_month: Some(anchor.month()),
            by_month_day: Some(anchor.day()),
        },
    }
}

/// Selected weekdays in Sunday-first order, de-duplicated.
fn selected_weekdays(input: &RecurrenceInput) -> Vec<Weekday> {
    let mut days: Vec<Weekday> = input
        .selected_days
        .iter()
        .filter_map(|index| Weekday::from_index(*index))
        .collect();
    days.sort_unstable();
    days.dedup();
    days
}

fn derive_end(input: &RecurrenceInput) -> RecurrenceResult<Option<RuleEnd>> {
    match input.ends {
        RecurrenceEnds::Never => Ok(None),
        RecurrenceEnds::After => Ok(input.occurrences.map(RuleEnd::Count)),
        RecurrenceEnds::On => input
            .end_date
            .map(|date| end_of_day_utc(date, input.start_datetime.timezone()).map(RuleEnd::Until))
            .transpose(),
    }
}

/// ## Summary
/// Derives the stored recurrence record and the summary sentence for a
/// recurrence selection.
///
/// ## Errors
/// Returns `InvalidArgument` if the selection fails validation or its end
/// date has no end of day in the anchor's timezone.
pub fn derive_recurrence(input: &RecurrenceInput) -> RecurrenceResult<RecurrenceOutput> {
    validate_input(input)?;

    let fields = derive_rule_fields(input);
    let end = derive_end(input)?;
    let summary = summary::summarize(input, &selected_weekdays(input));

    let db_recurrence = DbRecurrence {
        frequency: input.frequency,
        interval: input.interval,
        count: end.and_then(RuleEnd::count),
        until: end.and_then(RuleEnd::until),
        event_id: input.event_id,
        by_day: fields.by_day,
        by_month: fields.by_month,
        by_month_day: fields.by_month_day,
        start_datetime: input.start_datetime.with_timezone(&Utc),
    };

    tracing::debug!(
        event_id = input.event_id,
        frequency = %input.frequency,
        summary = %summary,
        "Derived recurrence"
    );

    Ok(RecurrenceOutput {
        db_recurrence,
        summary,
    })
}

/// ## Summary
/// Builds the RRULE value for a recurrence selection, e.g.
/// `FREQ=WEEKLY;INTERVAL=2;BYDAY=SU,SA;COUNT=5`.
///
/// ## Errors
/// Returns `InvalidArgument` under the same conditions as [`derive_recurrence`].
pub fn to_rrule_string(input: &RecurrenceInput) -> RecurrenceResult<String> {
    validate_input(input)?;

    let fields = derive_rule_fields(input);
    let end = derive_end(input)?;
    let rule = format_rrule(input.frequency, input.interval, &fields, end);

    tracing::trace!(event_id = input.event_id, rrule = %rule, "Built RRULE");
    Ok(rule)
}
