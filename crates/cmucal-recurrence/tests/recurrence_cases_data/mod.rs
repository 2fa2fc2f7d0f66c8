use chrono::{DateTime, NaiveDate, TimeZone};
use chrono_tz::Tz;
use cmucal_recurrence::recurrence::{Frequency, NthWeek, RecurrenceInput};

pub struct RecurrenceCase {
    pub name: &'static str,
    pub input: fn() -> RecurrenceInput,
    pub rrule: &'static str,
    pub summary: &'static str,
    pub expected: &'static [&'static str],
}

fn new_york(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Tz> {
    Tz::America__New_York
        .with_ymd_and_hms(year, month, day, hour, 0, 0)
        .unwrap()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[expect(clippy::too_many_lines)]
pub fn recurrence_cases() -> Vec<RecurrenceCase> {
    vec![
        RecurrenceCase {
            name: "weekly_mon_wed_fri",
            input: || {
                RecurrenceInput::new(Frequency::Weekly, new_york(2026, 10, 12, 9), 1)
                    .with_days([1, 3, 5])
                    .ending_after(4)
            },
            rrule: "FREQ=WEEKLY;INTERVAL=1;BYDAY=MO,WE,FR;COUNT=4",
            summary: "Every week on Monday, Wednesday and Friday",
            expected: &[
                "2026-10-12T13:00:00+00:00",
                "2026-10-14T13:00:00+00:00",
                "2026-10-16T13:00:00+00:00",
                "2026-10-19T13:00:00+00:00",
            ],
        },
        RecurrenceCase {
            name: "biweekly_weekend",
            input: || {
                RecurrenceInput::new(Frequency::Weekly, new_york(2026, 10, 17, 9), 2)
                    .with_interval(2)
                    .with_days([0, 6])
                    .ending_after(5)
            },
            rrule: "FREQ=WEEKLY;INTERVAL=2;BYDAY=SU,SA;COUNT=5",
            summary: "Every 2 weeks on Sunday and Saturday",
            expected: &[
                "2026-10-17T13:00:00+00:00",
                "2026-10-18T13:00:00+00:00",
                "2026-10-31T13:00:00+00:00",
                "2026-11-01T14:00:00+00:00",
                "2026-11-14T14:00:00+00:00",
            ],
        },
        RecurrenceCase {
            name: "monthly_second_tuesday",
            input: || {
                RecurrenceInput::new(Frequency::Monthly, new_york(2026, 10, 13, 9), 3)
                    .with_nth_week(NthWeek::Second)
                    .ending_after(3)
            },
            rrule: "FREQ=MONTHLY;INTERVAL=1;BYDAY=2TU;COUNT=3",
            summary: "Every month on the 2nd Tuesday",
            expected: &[
                "2026-10-13T13:00:00+00:00",
                "2026-11-10T14:00:00+00:00",
                "2026-12-08T14:00:00+00:00",
            ],
        },
        RecurrenceCase {
            name: "monthly_last_friday_until",
            input: || {
                RecurrenceInput::new(Frequency::Monthly, new_york(2026, 10, 30, 9), 4)
                    .with_nth_week(NthWeek::Last)
                    .ending_on(date(2027, 1, 31))
            },
            rrule: "FREQ=MONTHLY;INTERVAL=1;BYDAY=-1FR;UNTIL=20270201T045959Z",
            summary: "Every month on the last Friday",
            expected: &[
                "2026-10-30T13:00:00+00:00",
                "2026-11-27T14:00:00+00:00",
                "2026-12-25T14:00:00+00:00",
                "2027-01-29T14:00:00+00:00",
            ],
        },
        RecurrenceCase {
            name: "monthly_thirty_first_skips_short_months",
            input: || {
                RecurrenceInput::new(Frequency::Monthly, new_york(2026, 10, 31, 9), 5)
                    .ending_after(3)
            },
            rrule: "FREQ=MONTHLY;INTERVAL=1;BYMONTHDAY=31;COUNT=3",
            summary: "Every month on the 31st",
            expected: &[
                "2026-10-31T13:00:00+00:00",
                "2026-12-31T14:00:00+00:00",
                "2027-01-31T14:00:00+00:00",
            ],
        },
        RecurrenceCase {
            name: "monthly_same_day_evening",
            input: || {
                RecurrenceInput::new(Frequency::Monthly, new_york(2026, 10, 13, 22), 9)
                    .ending_after(3)
            },
            rrule: "FREQ=MONTHLY;INTERVAL=1;BYMONTHDAY=13;COUNT=3",
            summary: "Every month on the 13th",
            expected: &[
                "2026-10-14T02:00:00+00:00",
                "2026-11-14T03:00:00+00:00",
                "2026-12-14T03:00:00+00:00",
            ],
        },
        RecurrenceCase {
            name: "monthly_last_friday_evening",
            input: || {
                RecurrenceInput::new(Frequency::Monthly, new_york(2026, 10, 30, 22), 10)
                    .with_nth_week(NthWeek::Last)
                    .ending_after(3)
            },
            rrule: "FREQ=MONTHLY;INTERVAL=1;BYDAY=-1FR;COUNT=3",
            summary: "Every month on the last Friday",
            expected: &[
                "2026-10-31T02:00:00+00:00",
                "2026-11-28T03:00:00+00:00",
                "2026-12-26T03:00:00+00:00",
            ],
        },
        RecurrenceCase {
            name: "yearly_leap_day",
            input: || {
                RecurrenceInput::new(Frequency::Yearly, new_york(2028, 2, 29, 9), 6)
                    .ending_after(2)
            },
            rrule: "FREQ=YEARLY;INTERVAL=1;BYMONTH=2;BYMONTHDAY=29;COUNT=2",
            summary: "Every year on February 29",
            expected: &["2028-02-29T14:00:00+00:00", "2032-02-29T14:00:00+00:00"],
        },
        RecurrenceCase {
            name: "every_third_day",
            input: || {
                RecurrenceInput::new(Frequency::Daily, new_york(2026, 10, 12, 9), 7)
                    .with_interval(3)
                    .ending_after(3)
            },
            rrule: "FREQ=DAILY;INTERVAL=3;COUNT=3",
            summary: "Every 3 days",
            expected: &[
                "2026-10-12T13:00:00+00:00",
                "2026-10-15T13:00:00+00:00",
                "2026-10-18T13:00:00+00:00",
            ],
        },
        RecurrenceCase {
            name: "daily_utc_until_includes_last_day",
            input: || {
                RecurrenceInput::new(
                    Frequency::Daily,
                    Tz::UTC.with_ymd_and_hms(2026, 12, 30, 8, 0, 0).unwrap(),
                    8,
                )
                .ending_on(date(2027, 1, 1))
            },
            rrule: "FREQ=DAILY;INTERVAL=1;UNTIL=20270101T235959Z",
            summary: "Every day",
            expected: &[
                "2026-12-30T08:00:00+00:00",
                "2026-12-31T08:00:00+00:00",
                "2027-01-01T08:00:00+00:00",
            ],
        },
    ]
}
