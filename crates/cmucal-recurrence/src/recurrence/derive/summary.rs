//! Human-readable recurrence summaries ("Every 2 weeks on Monday and Friday").

use chrono::Datelike;

use crate::recurrence::model::{Frequency, NthWeek, RecurrenceInput, Weekday};

/// ## Summary
/// Formats `n` with its English ordinal suffix: `1st`, `2nd`, `3rd`, `4th`.
///
/// Numbers ending in 11, 12 or 13 always take `th` (`11th`, `112th`) while
/// `21st`, `22nd` and `23rd` follow the last digit.
#[must_use]
pub fn ordinal(n: u32) -> String {
    let suffix = if (11..=13).contains(&(n % 100)) {
        "th"
    } else {
        match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{n}{suffix}")
}

/// Returns `"last"` or the ordinal of the week position (`"2nd"`).
#[must_use]
pub fn nth_week_label(nth: NthWeek) -> String {
    nth.position().map_or_else(|| "last".to_string(), ordinal)
}

/// Builds the full sentence from the leading and trailing clauses.
pub(super) fn summarize(input: &RecurrenceInput, weekdays: &[Weekday]) -> String {
    let every = leading_clause(input.frequency, input.interval);
    let on = trailing_clause(input, weekdays);

    if on.is_empty() {
        every
    } else {
        format!("{every} {on}")
    }
}

fn leading_clause(frequency: Frequency, interval: u32) -> String {
    if interval > 1 {
        format!("Every {interval} {}s", frequency.unit())
    } else {
        format!("Every {}", frequency.unit())
    }
}

fn trailing_clause(input: &RecurrenceInput, weekdays: &[Weekday]) -> String {
    let anchor = &input.start_datetime;

    match input.frequency {
        Frequency::Daily => String::new(),
        Frequency::Weekly => {
            let names: Vec<&str> = weekdays.iter().copied().map(Weekday::name).collect();
            format!("on {}", join_with_and(&names))
        }
        Frequency::Monthly => match input.nth_week {
            Some(nth) => format!(
                "on the {} {}",
                nth_week_label(nth),
                Weekday::from(anchor.weekday()).name()
            ),
            None => format!("on the {}", ordinal(anchor.day())),
        },
        Frequency::Yearly => format!("on {} {}", anchor.format("%B"), anchor.day()),
    }
}

/// Joins with ", " except for the final pair, which gets " and " (no Oxford comma).
fn join_with_and(items: &[&str]) -> String {
    match items.split_last() {
        None => String::new(),
        Some((last, [])) => (*last).to_string(),
        Some((last, rest)) => format!("{} and {last}", rest.join(", ")),
    }
}
