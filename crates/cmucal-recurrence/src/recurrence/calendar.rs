//! Month-position helpers for nth-weekday rules.

use chrono::{Datelike, NaiveDate};

use super::model::NthWeek;

/// Returns which occurrence of its weekday `date` is within its month (1-5).
#[must_use]
pub fn nth_weekday_of_month<D: Datelike>(date: &D) -> u32 {
    date.day().div_ceil(7)
}

/// Returns the number of days in the given month, `None` for an invalid month.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month.checked_add(1)?)
    };

    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
    (last.month() == month).then_some(last.day())
}

/// Returns true when no later day in the same month falls on `date`'s weekday.
#[must_use]
pub fn is_last_weekday_in_month<D: Datelike>(date: &D) -> bool {
    days_in_month(date.year(), date.month()).is_some_and(|last_day| date.day() + 7 > last_day)
}

/// ## Summary
/// Lists the nth-week choices a form should offer for an anchor date.
///
/// Always includes the anchor's ordinal position; adds [`NthWeek::Last`] when
/// the anchor is also the final such weekday of its month.
#[must_use]
pub fn suggested_nth_week<D: Datelike>(date: &D) -> Vec<NthWeek> {
    let mut choices: Vec<NthWeek> = NthWeek::from_position(nth_weekday_of_month(date))
        .into_iter()
        .collect();

    if is_last_weekday_in_month(date) {
        choices.push(NthWeek::Last);
    }

    tracing::trace!(?choices, "Suggested nth-week choices");
    choices
}
