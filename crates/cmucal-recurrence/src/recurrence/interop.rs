//! Round-tripping stored recurrence records back into RRULE form.

use chrono_tz::Tz;
use rrule::{RRule, RRuleSet, Unvalidated};

use super::derive::{RuleEnd, RuleFields, format_rrule};
use super::model::{DbRecurrence, WeekdayNum};
use crate::error::RecurrenceResult;

impl DbRecurrence {
    fn rule_fields(&self) -> RuleFields {
        RuleFields {
            by_day: self.by_day.clone(),
            by_month: self.by_month,
            by_month_day: self.by_month_day,
        }
    }

    fn rule_end(&self) -> Option<RuleEnd> {
        self.count
            .map(RuleEnd::Count)
            .or_else(|| self.until.map(RuleEnd::Until))
    }

    /// ## Summary
    /// Rebuilds the RRULE value for a stored record.
    ///
    /// Uses the same part order as [`super::to_rrule_string`], so a record
    /// derived from an input yields the same string as the input itself.
    #[must_use]
    pub fn to_rrule_string(&self) -> String {
        format_rrule(self.frequency, self.interval, &self.rule_fields(), self.rule_end())
    }

    /// ## Summary
    /// Builds a validated `rrule::RRuleSet` anchored at the stored start time,
    /// expressed in `tz`.
    ///
    /// `tz` must be the anchor's timezone: `BYDAY`/`BYMONTHDAY` were taken from
    /// the local date, and expansion keeps the local wall-clock time across
    /// DST changes. Occurrence expansion is left to the caller.
    ///
    /// ## Errors
    /// Returns an error if the `rrule` crate rejects the rule.
    pub fn to_rrule_set(&self, tz: Tz) -> RecurrenceResult<RRuleSet> {
        let rule_text = self.to_rrule_string();
        tracing::trace!(event_id = self.event_id, rrule = %rule_text, %tz, "Building RRuleSet");

        let rrule = rule_text.parse::<RRule<Unvalidated>>()?;
        let dt_start = self.start_datetime.with_timezone(&rrule::Tz::Tz(tz));

        Ok(rrule.build(dt_start)?)
    }
}

/// ## Summary
/// Parses stored `by_day` entries (`["MO", "3FR", "-1TU"]`).
///
/// Blank entries are skipped.
///
/// ## Errors
/// Returns `ParseError` for the first entry that is not a valid weekday token.
pub fn parse_by_day<S: AsRef<str>>(entries: &[S]) -> RecurrenceResult<Vec<WeekdayNum>> {
    entries
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|entry| !entry.trim().is_empty())
        .map(str::parse::<WeekdayNum>)
        .collect()
}
