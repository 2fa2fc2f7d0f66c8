use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RecurrenceError, RecurrenceResult};

/// Day of the week, indexed the way the event form indexes its toggles
/// (0 = Sunday through 6 = Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns the weekday for a form index, `None` outside 0..=6.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    /// Two-letter RFC 5545 token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sunday => "SU",
            Self::Monday => "MO",
            Self::Tuesday => "TU",
            Self::Wednesday => "WE",
            Self::Thursday => "TH",
            Self::Friday => "FR",
            Self::Saturday => "SA",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Parses a two-letter token, case-insensitively.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|day| day.token().eq_ignore_ascii_case(token))
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Position of a weekday within its month for nth-weekday rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum NthWeek {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Last,
}

impl NthWeek {
    /// Ordinal as written in a `BYDAY` token (`-1` for last).
    #[must_use]
    pub const fn value(self) -> i8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Fifth => 5,
            Self::Last => -1,
        }
    }

    /// 1-based position in the month, `None` for [`NthWeek::Last`].
    #[must_use]
    pub const fn position(self) -> Option<u32> {
        match self {
            Self::First => Some(1),
            Self::Second => Some(2),
            Self::Third => Some(3),
            Self::Fourth => Some(4),
            Self::Fifth => Some(5),
            Self::Last => None,
        }
    }

    /// Maps a 1-based position in the month to its `NthWeek`.
    #[must_use]
    pub const fn from_position(position: u32) -> Option<Self> {
        match position {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            4 => Some(Self::Fourth),
            5 => Some(Self::Fifth),
            _ => None,
        }
    }
}

impl TryFrom<i8> for NthWeek {
    type Error = RecurrenceError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            3 => Ok(Self::Third),
            4 => Ok(Self::Fourth),
            5 => Ok(Self::Fifth),
            -1 => Ok(Self::Last),
            _ => Err(RecurrenceError::InvalidArgument(format!(
                "Invalid nth week: {value} (expected 1-5 or -1)"
            ))),
        }
    }
}

impl From<NthWeek> for i8 {
    fn from(nth: NthWeek) -> Self {
        nth.value()
    }
}

/// A `BYDAY` entry: a weekday with an optional ordinal (`MO`, `2TU`, `-1FR`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeekdayNum {
    pub ordinal: Option<i8>,
    pub weekday: Weekday,
}

impl WeekdayNum {
    #[must_use]
    pub const fn every(weekday: Weekday) -> Self {
        Self {
            ordinal: None,
            weekday,
        }
    }

    #[must_use]
    pub const fn nth(nth: NthWeek, weekday: Weekday) -> Self {
        Self {
            ordinal: Some(nth.value()),
            weekday,
        }
    }
}

impl fmt::Display for WeekdayNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ordinal) = self.ordinal {
            write!(f, "{ordinal}")?;
        }
        f.write_str(self.weekday.token())
    }
}

impl FromStr for WeekdayNum {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_weekday_num(s)
    }
}

impl TryFrom<String> for WeekdayNum {
    type Error = RecurrenceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_weekday_num(&value)
    }
}

impl From<WeekdayNum> for String {
    fn from(value: WeekdayNum) -> Self {
        value.to_string()
    }
}

/// Parses a single weekday with optional ordinal (e.g., "MO", "1MO", "-1FR").
fn parse_weekday_num(s: &str) -> RecurrenceResult<WeekdayNum> {
    let s = s.trim();
    let invalid = || RecurrenceError::ParseError(format!("Invalid BYDAY entry: {s:?}"));

    // The weekday is always the trailing two characters
    let split = s.len().checked_sub(2).ok_or_else(invalid)?;
    let ordinal_str = s.get(..split).ok_or_else(invalid)?;
    let weekday_str = s.get(split..).ok_or_else(invalid)?;

    let weekday = Weekday::parse(weekday_str).ok_or_else(invalid)?;

    let ordinal = if ordinal_str.is_empty() {
        None
    } else {
        let ordinal = ordinal_str.parse::<i8>().map_err(|e| {
            RecurrenceError::ParseError(format!("Invalid BYDAY ordinal in {s:?}: {e}"))
        })?;
        if ordinal == 0 || !(-53..=53).contains(&ordinal) {
            return Err(invalid());
        }
        Some(ordinal)
    };

    Ok(WeekdayNum { ordinal, weekday })
}
