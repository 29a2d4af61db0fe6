/// Time-of-day parsing for window boundaries
use std::fmt;

use chrono::{NaiveTime, Timelike};

use crate::error::{Result, WindowError};

/// Wall-clock time with no date, second precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
    second: u32,
}

/// Accepted textual layouts, tried in this order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    /// 15:04:05
    Clock24Seconds,
    /// 15:04
    Clock24,
    /// 3:04:05pm
    Clock12Seconds,
    /// 3:04pm
    Clock12,
    /// 3pm
    Clock12Hour,
}

const LAYOUTS: [Layout; 5] = [
    Layout::Clock24Seconds,
    Layout::Clock24,
    Layout::Clock12Seconds,
    Layout::Clock12,
    Layout::Clock12Hour,
];

impl Layout {
    fn parse(self, text: &str) -> Option<TimeOfDay> {
        match self {
            Layout::Clock24Seconds => parse_twenty_four(text, "%H:%M:%S", 3),
            Layout::Clock24 => parse_twenty_four(text, "%H:%M", 2),
            Layout::Clock12Seconds => parse_twelve_hour(text, 3),
            Layout::Clock12 => parse_twelve_hour(text, 2),
            Layout::Clock12Hour => parse_twelve_hour(text, 1),
        }
    }
}

/// Parse `H:MM[:SS]` through chrono once the field shape has been checked.
/// chrono reads `:60` as a leap second, which is not a valid boundary.
fn parse_twenty_four(text: &str, format: &str, parts: usize) -> Option<TimeOfDay> {
    clock_fields(text, parts)?;
    let time = NaiveTime::parse_from_str(text, format).ok()?;
    if time.nanosecond() >= 1_000_000_000 {
        return None;
    }
    TimeOfDay::new(time.hour(), time.minute(), time.second())
}

/// Split `h[:mm[:ss]]` into exactly `parts` fields: a one or two digit hour,
/// then two-digit minutes and seconds. Missing fields are zero.
fn clock_fields(text: &str, parts: usize) -> Option<(u32, u32, u32)> {
    let fields: Vec<&str> = text.split(':').collect();
    if fields.len() != parts {
        return None;
    }

    let hour = numeric_field(fields[0], 1)?;
    let minute = match fields.get(1) {
        Some(field) => numeric_field(field, 2)?,
        None => 0,
    };
    let second = match fields.get(2) {
        Some(field) => numeric_field(field, 2)?,
        None => 0,
    };
    Some((hour, minute, second))
}

/// Parse `h[:mm[:ss]]am|pm` with exactly `parts` colon-separated fields.
/// Hours 0-12 are accepted, so `00:01am` reads as one minute past midnight.
fn parse_twelve_hour(text: &str, parts: usize) -> Option<TimeOfDay> {
    let lower = text.to_ascii_lowercase();
    let (body, pm) = if let Some(body) = lower.strip_suffix("pm") {
        (body, true)
    } else if let Some(body) = lower.strip_suffix("am") {
        (body, false)
    } else {
        return None;
    };

    let (hour, minute, second) = clock_fields(body.trim_end(), parts)?;
    if hour > 12 || minute > 59 || second > 59 {
        return None;
    }

    let hour = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };
    TimeOfDay::new(hour, minute, second)
}

/// Digits only, between `min_len` and two characters
fn numeric_field(field: &str, min_len: usize) -> Option<u32> {
    if field.len() < min_len || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0, second: 0 };

    pub fn new(hour: u32, minute: u32, second: u32) -> Option<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return None;
        }
        Some(Self { hour, minute, second })
    }

    /// Parse a boundary such as `09:00`, `17:30:15`, `9am` or `11:59pm`.
    /// `field` names the boundary in the error (`start` or `end`).
    pub fn parse(text: &str, field: &'static str) -> Result<Self> {
        let trimmed = text.trim();
        LAYOUTS
            .iter()
            .find_map(|layout| layout.parse(trimmed))
            .ok_or_else(|| WindowError::TimeParse {
                field,
                input: text.to_string(),
            })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    pub fn to_naive(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, self.second).unwrap_or(NaiveTime::MIN)
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Drops sub-second precision; a leap second reads as :59
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second().min(59),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}
