//! RRULE value serialization (RFC 5545 §3.3.10).

use chrono::{DateTime, Utc};

use super::RuleFields;
use crate::recurrence::model::Frequency;

/// How a rule terminates, once resolved to wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleEnd {
    Count(u32),
    Until(DateTime<Utc>),
}

impl RuleEnd {
    #[must_use]
    pub const fn count(self) -> Option<u32> {
        match self {
            Self::Count(n) => Some(n),
            Self::Until(_) => None,
        }
    }

    #[must_use]
    pub const fn until(self) -> Option<DateTime<Utc>> {
        match self {
            Self::Until(until) => Some(until),
            Self::Count(_) => None,
        }
    }
}

/// ## Summary
/// Serializes rule parts in a fixed order: `FREQ`, `INTERVAL`, `BYDAY`,
/// `BYMONTH`, `BYMONTHDAY`, then `UNTIL` or `COUNT`.
///
/// `UNTIL` is written in basic UTC form (`20261231T045959Z`).
#[must_use]
pub fn format_rrule(
    frequency: Frequency,
    interval: u32,
    fields: &RuleFields,
    end: Option<RuleEnd>,
) -> String {
    let mut parts = vec![format!("FREQ={frequency}"), format!("INTERVAL={interval}")];

    if let Some(by_day) = fields.by_day.as_deref().filter(|days| !days.is_empty()) {
        let days: Vec<String> = by_day.iter().map(ToString::to_string).collect();
        parts.push(format!("BYDAY={}", days.join(",")));
    }
    if let Some(month) = fields.by_month {
        parts.push(format!("BYMONTH={month}"));
    }
    if let Some(day) = fields.by_month_day {
        parts.push(format!("BYMONTHDAY={day}"));
    }

    match end {
        Some(RuleEnd::Until(until)) => {
            parts.push(format!("UNTIL={}", until.format("%Y%m%dT%H%M%SZ")));
        }
        Some(RuleEnd::Count(count)) => parts.push(format!("COUNT={count}")),
        None => {}
    }

    parts.join(";")
}
