//! Quick recurrence options offered next to the custom recurrence form.

use chrono::{DateTime, Datelike};
use chrono_tz::Tz;

use super::calendar::suggested_nth_week;
use super::derive::derive_recurrence;
use super::model::{Frequency, RecurrenceInput, Weekday};
use crate::error::RecurrenceResult;

pub const DOES_NOT_REPEAT: &str = "Does not repeat";

/// One entry of the "Repeats" picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrencePreset {
    pub label: String,
    /// `None` for the non-repeating choice.
    pub input: Option<RecurrenceInput>,
}

/// ## Summary
/// Lists the quick recurrence options for an event starting at `anchor`.
///
/// In order: does not repeat, daily, weekly on the anchor's weekday,
/// monthly on its nth weekday (plus the last weekday when that applies),
/// yearly on its date, and every weekday. Each repeating label is the
/// summary the engine derives for that preset's input.
///
/// ## Errors
/// Returns an error if a preset fails derivation.
pub fn recurrence_presets(
    anchor: DateTime<Tz>,
    event_id: i64,
) -> RecurrenceResult<Vec<RecurrencePreset>> {
    let weekday = Weekday::from(anchor.weekday());

    let mut inputs = vec![
        RecurrenceInput::new(Frequency::Daily, anchor, event_id),
        RecurrenceInput::new(Frequency::Weekly, anchor, event_id).with_days([weekday.index()]),
    ];
    inputs.extend(
        suggested_nth_week(&anchor)
            .into_iter()
            .map(|nth| RecurrenceInput::new(Frequency::Monthly, anchor, event_id).with_nth_week(nth)),
    );
    inputs.push(RecurrenceInput::new(Frequency::Yearly, anchor, event_id));
    inputs.push(
        RecurrenceInput::new(Frequency::Weekly, anchor, event_id).with_days(
            [
                Weekday::Monday,
                Weekday::Tuesday,
                Weekday::Wednesday,
                Weekday::Thursday,
                Weekday::Friday,
            ]
            .map(Weekday::index),
        ),
    );

    let mut presets = Vec::with_capacity(inputs.len() + 1);
    presets.push(RecurrencePreset {
        label: DOES_NOT_REPEAT.to_string(),
        input: None,
    });
    for input in inputs {
        let label = derive_recurrence(&input)?.summary;
        presets.push(RecurrencePreset {
            label,
            input: Some(input),
        });
    }

    Ok(presets)
}
