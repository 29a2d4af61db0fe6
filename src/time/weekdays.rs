/// Weekday set parsing and lookup
use std::fmt;

use chrono::Weekday;

use crate::error::{Result, WindowError};

/// Monday-first order, matching `Weekday::num_days_from_monday`
const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Accepted tokens, already lowercased
const WEEKDAY_TOKENS: &[(&str, Weekday)] = &[
    ("mo", Weekday::Mon),
    ("mon", Weekday::Mon),
    ("monday", Weekday::Mon),
    ("tu", Weekday::Tue),
    ("tue", Weekday::Tue),
    ("tues", Weekday::Tue),
    ("tuesday", Weekday::Tue),
    ("we", Weekday::Wed),
    ("wed", Weekday::Wed),
    ("wednesday", Weekday::Wed),
    ("th", Weekday::Thu),
    ("thu", Weekday::Thu),
    ("thur", Weekday::Thu),
    ("thurs", Weekday::Thu),
    ("thursday", Weekday::Thu),
    ("fr", Weekday::Fri),
    ("fri", Weekday::Fri),
    ("friday", Weekday::Fri),
    ("sa", Weekday::Sat),
    ("sat", Weekday::Sat),
    ("saturday", Weekday::Sat),
    ("su", Weekday::Sun),
    ("sun", Weekday::Sun),
    ("sunday", Weekday::Sun),
];

/// Map a single day token (case-insensitive, surrounding whitespace ignored)
pub fn parse_weekday(token: &str) -> Result<Weekday> {
    let normalized = token.trim().to_lowercase();
    WEEKDAY_TOKENS
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, day)| *day)
        .ok_or_else(|| WindowError::UnknownWeekday(token.trim().to_string()))
}

fn short_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "mon",
        Weekday::Tue => "tue",
        Weekday::Wed => "wed",
        Weekday::Thu => "thu",
        Weekday::Fri => "fri",
        Weekday::Sat => "sat",
        Weekday::Sun => "sun",
    }
}

fn bit(day: Weekday) -> u8 {
    1 << day.num_days_from_monday()
}

/// Set of allowed weekdays, one bit per day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Parse a list of day tokens. Duplicates are fine, blank tokens are
    /// skipped, and at least one day must remain.
    pub fn parse<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::empty();
        for token in tokens {
            let token = token.as_ref();
            if token.trim().is_empty() {
                continue;
            }
            set.insert(parse_weekday(token)?);
        }

        if set.is_empty() {
            return Err(WindowError::EmptyWeekdays);
        }
        Ok(set)
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0 |= bit(day);
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & bit(day) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Days in Monday-first order
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        WEEK.iter().copied().filter(move |day| self.contains(*day))
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<T: IntoIterator<Item = Weekday>>(iter: T) -> Self {
        let mut set = Self::empty();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(short_name).collect();
        write!(f, "{}", names.join(","))
    }
}
