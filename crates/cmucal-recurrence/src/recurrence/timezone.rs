//! Timezone resolution and local-to-UTC conversion for recurrence anchors.
//!
//! The engine never reads an ambient timezone; callers resolve one here and
//! pass it in with the anchor.

use std::str::FromStr;

use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{RecurrenceError, RecurrenceResult};

/// ## Summary
/// Resolves an IANA timezone identifier to a `chrono_tz::Tz`.
///
/// ## Errors
/// Returns `UnknownTimezone` if the identifier cannot be resolved.
pub fn resolve_timezone(tzid: &str) -> RecurrenceResult<Tz> {
    Tz::from_str(tzid.trim()).map_err(|_e| RecurrenceError::UnknownTimezone(tzid.to_string()))
}

/// ## Summary
/// Attaches a timezone to a local wall-clock time.
///
/// On a DST fold the first occurrence is used (RFC 5545 §3.3.5).
///
/// ## Errors
/// Returns `InvalidArgument` if the local time falls in a DST gap.
pub fn localize(local: NaiveDateTime, tz: Tz) -> RecurrenceResult<DateTime<Tz>> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(dt),
        LocalResult::None => Err(RecurrenceError::InvalidArgument(format!(
            "{local} does not exist in timezone {tz}"
        ))),
    }
}

/// ## Summary
/// Returns the last second of `date` in `tz` as a UTC instant.
///
/// On a DST fold the later occurrence is used, so the whole local day is
/// covered.
///
/// ## Errors
/// Returns `InvalidArgument` if 23:59:59 does not exist on that date in `tz`.
pub fn end_of_day_utc(date: NaiveDate, tz: Tz) -> RecurrenceResult<DateTime<Utc>> {
    let local = date.and_hms_opt(23, 59, 59).ok_or_else(|| {
        RecurrenceError::InvalidArgument(format!("No end of day for {date}"))
    })?;

    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(_, dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::None => Err(RecurrenceError::InvalidArgument(format!(
            "{local} does not exist in timezone {tz}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_standard_timezone() {
        let tz = resolve_timezone("America/New_York").expect("should resolve");
        assert_eq!(tz, Tz::America__New_York);
    }

    #[test]
    fn test_resolve_trims_whitespace() {
        let tz = resolve_timezone(" Europe/Berlin\n").expect("should resolve");
        assert_eq!(tz, Tz::Europe__Berlin);
    }

    #[test]
    fn test_resolve_rejects_non_iana_name() {
        let err = resolve_timezone("/mozilla.org/Europe/Berlin").unwrap_err();
        assert!(matches!(err, RecurrenceError::UnknownTimezone(_)));
    }

    #[test]
    fn test_resolve_unknown_timezone() {
        let err = resolve_timezone("Mars/Olympus_Mons").unwrap_err();
        assert!(matches!(err, RecurrenceError::UnknownTimezone(name) if name == "Mars/Olympus_Mons"));
    }

    #[test]
    fn test_localize_winter_and_summer() {
        let winter = NaiveDate::from_ymd_opt(2026, 1, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let summer = NaiveDate::from_ymd_opt(2026, 7, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();

        let winter = localize(winter, Tz::America__New_York).unwrap();
        let summer = localize(summer, Tz::America__New_York).unwrap();

        assert_eq!(
            winter.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2026, 1, 15, 15, 0, 0).unwrap()
        );
        assert_eq!(
            summer.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2026, 7, 15, 14, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_localize_dst_gap_rejected() {
        // 2026-03-08 02:30 is skipped in New York
        let gap = NaiveDate::from_ymd_opt(2026, 3, 8)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();

        assert!(matches!(
            localize(gap, Tz::America__New_York),
            Err(RecurrenceError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_localize_dst_fold_uses_first_occurrence() {
        // 2026-11-01 01:30 happens twice in New York; first is EDT (UTC-4)
        let fold = NaiveDate::from_ymd_opt(2026, 11, 1)
            .unwrap()
            .and_hms_opt(1, 30, 0)
            .unwrap();

        let dt = localize(fold, Tz::America__New_York).unwrap();
        assert_eq!(
            dt.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2026, 11, 1, 5, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_end_of_day_utc() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();

        assert_eq!(
            end_of_day_utc(date, Tz::America__New_York).unwrap(),
            Utc.with_ymd_and_hms(2026, 3, 6, 4, 59, 59).unwrap()
        );
        assert_eq!(
            end_of_day_utc(date, Tz::UTC).unwrap(),
            Utc.with_ymd_and_hms(2026, 3, 5, 23, 59, 59).unwrap()
        );
    }
}
