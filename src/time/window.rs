/// Recurring, timezone-aware active window
use std::fmt;

use chrono::{DateTime, Datelike, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::{Result, WindowError};
use crate::time::clock::TimeOfDay;
use crate::time::weekdays::WeekdaySet;

/// Which weekday governs the after-midnight tail of an overnight window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvernightDayRule {
    /// Both halves are checked against the local weekday of the instant.
    /// With `mon,tue,wed,thu 23:59-00:01`, Friday 00:00 is outside.
    #[default]
    LocalDay,
    /// The tail belongs to the day the window opened on: times at or before
    /// `end` are active when yesterday is an allowed day.
    CarryOver,
}

/// A weekday set plus a daily start/end range, evaluated in one timezone.
///
/// `start > end` describes an overnight window that spans local midnight.
/// Both boundaries are inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    days: WeekdaySet,
    start: TimeOfDay,
    end: TimeOfDay,
    location: Tz,
    day_rule: OvernightDayRule,
}

impl TimeWindow {
    /// Build a window from configuration strings.
    ///
    /// Fails on the first bad field: an unknown or missing weekday, a start
    /// or end time in no accepted layout, or an unknown IANA timezone.
    pub fn new<I, S>(days: I, start: &str, end: &str, timezone: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let built = Self::build(days, start, end, timezone);
        match &built {
            Ok(window) => debug!("Time window created: {}", window),
            Err(e) => warn!("Invalid time window [{}]: {}", e.error_code(), e),
        }
        built
    }

    fn build<I, S>(days: I, start: &str, end: &str, timezone: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let days = WeekdaySet::parse(days)?;
        let start = TimeOfDay::parse(start, "start")?;
        let end = TimeOfDay::parse(end, "end")?;
        let location = parse_timezone(timezone)?;

        Ok(Self {
            days,
            start,
            end,
            location,
            day_rule: OvernightDayRule::default(),
        })
    }

    pub fn with_day_rule(mut self, day_rule: OvernightDayRule) -> Self {
        self.day_rule = day_rule;
        self
    }

    /// Check whether `instant` falls inside the window. Never fails.
    pub fn contains<Z: TimeZone>(&self, instant: &DateTime<Z>) -> bool {
        let local = instant.with_timezone(&self.location);
        let today = local.weekday();
        let time = TimeOfDay::from(local.time());

        let active = self.contains_local(today, time);
        trace!("{} on {:?} at {} -> {}", self, today, time, active);
        active
    }

    pub fn contains_now(&self) -> bool {
        self.contains(&Utc::now())
    }

    /// Evaluate against zone-local calendar fields.
    pub fn contains_local(&self, today: Weekday, time: TimeOfDay) -> bool {
        if !self.is_overnight() {
            return self.days.contains(today) && self.start <= time && time <= self.end;
        }

        let tail_day = match self.day_rule {
            OvernightDayRule::LocalDay => today,
            OvernightDayRule::CarryOver => today.pred(),
        };
        let after_start = time >= self.start && self.days.contains(today);
        let before_end = time <= self.end && self.days.contains(tail_day);
        after_start || before_end
    }

    pub fn is_overnight(&self) -> bool {
        self.start > self.end
    }

    pub fn days(&self) -> WeekdaySet {
        self.days
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn timezone(&self) -> Tz {
        self.location
    }

    pub fn day_rule(&self) -> OvernightDayRule {
        self.day_rule
    }
}

fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| WindowError::UnknownTimezone(name.to_string()))
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "days={} start={} end={} tz={}",
            self.days,
            self.start,
            self.end,
            self.location.name()
        )?;
        if self.day_rule != OvernightDayRule::LocalDay {
            write!(f, " overnight={:?}", self.day_rule)?;
        }
        Ok(())
    }
}
