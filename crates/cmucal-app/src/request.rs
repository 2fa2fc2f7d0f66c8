//! JSON request/response shapes for the `cmucal-recur` command.
//!
//! Requests carry the raw labels the event form produces (`"weekly"`,
//! `"after"`) and a naive local start time; they are coerced and anchored
//! here before reaching the engine.

use chrono::{NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use cmucal_recurrence::recurrence::{
    DbRecurrence, NthWeek, RecurrenceInput, derive_recurrence, localize, resolve_timezone,
    to_db_recurrence_ends, to_rrule_frequency, to_rrule_string,
};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;

#[derive(Debug, Clone, Deserialize)]
pub struct RecurrenceRequest {
    pub frequency: String,
    #[serde(default = "default_interval")]
    pub interval: u32,
    #[serde(default)]
    pub selected_days: Vec<u8>,
    #[serde(default = "default_ends")]
    pub ends: String,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub occurrences: Option<u32>,
    /// Local wall-clock start, e.g. `2026-10-13T18:00:00`.
    pub start_datetime: NaiveDateTime,
    /// IANA name; the configured default applies when absent.
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub nth_week: Option<i8>,
    pub event_id: i64,
}

const fn default_interval() -> u32 {
    1
}

fn default_ends() -> String {
    "never".to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct RecurrenceResponse {
    pub db_recurrence: DbRecurrence,
    pub summary: String,
    pub rrule: String,
}

impl RecurrenceRequest {
    /// ## Summary
    /// Coerces labels and anchors the start time in the request's timezone.
    ///
    /// ## Errors
    /// Returns an error for unknown labels, an unknown timezone, an invalid
    /// nth week, or a start time that falls in a DST gap.
    pub fn into_input(self, default_tz: Tz) -> AppResult<RecurrenceInput> {
        let tz = match self.timezone.as_deref() {
            Some(name) => resolve_timezone(name)?,
            None => default_tz,
        };
        let nth_week = self.nth_week.map(NthWeek::try_from).transpose()?;

        Ok(RecurrenceInput {
            frequency: to_rrule_frequency(&self.frequency)?,
            interval: self.interval,
            selected_days: self.selected_days,
            ends: to_db_recurrence_ends(&self.ends)?,
            end_date: self.end_date,
            occurrences: self.occurrences,
            start_datetime: localize(self.start_datetime, tz)?,
            nth_week,
            event_id: self.event_id,
        })
    }
}

/// ## Summary
/// Runs one request through the engine.
///
/// ## Errors
/// Returns an error if the request cannot be coerced or fails derivation.
pub fn handle_request(request: RecurrenceRequest, default_tz: Tz) -> AppResult<RecurrenceResponse> {
    let input = request.into_input(default_tz)?;
    let output = derive_recurrence(&input)?;
    let rrule = to_rrule_string(&input)?;

    tracing::info!(
        event_id = input.event_id,
        summary = %output.summary,
        rrule = %rrule,
        "Recurrence request handled"
    );

    Ok(RecurrenceResponse {
        db_recurrence: output.db_recurrence,
        summary: output.summary,
        rrule,
    })
}

/// ## Summary
/// Parses a JSON request and runs it through the engine.
///
/// ## Errors
/// Returns an error if the JSON is malformed or the request fails.
pub fn handle_json(json: &str, default_tz: Tz) -> AppResult<RecurrenceResponse> {
    let request: RecurrenceRequest = serde_json::from_str(json)?;
    tracing::debug!(?request, "Parsed recurrence request");
    handle_request(request, default_tz)
}
