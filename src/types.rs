/// Configuration types for declaring time windows
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::time::{OvernightDayRule, TimeWindow};

/// Weekday list as either a TOML array or a comma-separated string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DayList {
    List(Vec<String>),
    Csv(String),
}

impl DayList {
    pub fn tokens(&self) -> Vec<&str> {
        match self {
            DayList::List(days) => days.iter().map(String::as_str).collect(),
            DayList::Csv(days) => days.split(',').collect(),
        }
    }
}

/// Configuration for a single window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub days: DayList,
    pub start: String,
    pub end: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub overnight_days: OvernightDayRule,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl WindowConfig {
    pub fn build(&self) -> Result<TimeWindow> {
        let window = TimeWindow::new(self.days.tokens(), &self.start, &self.end, &self.timezone)?;
        Ok(window.with_day_rule(self.overnight_days))
    }
}

impl TryFrom<&WindowConfig> for TimeWindow {
    type Error = crate::error::WindowError;

    fn try_from(config: &WindowConfig) -> Result<Self> {
        config.build()
    }
}

/// A window built from configuration, keyed by its name
#[derive(Debug, Clone)]
pub struct NamedWindow {
    pub name: String,
    pub window: TimeWindow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_list_forms() {
        let csv = DayList::Csv("mon,tue, wed".to_string());
        assert_eq!(csv.tokens(), vec!["mon", "tue", " wed"]);

        let list = DayList::List(vec!["fri".to_string()]);
        assert_eq!(list.tokens(), vec!["fri"]);
    }

    #[test]
    fn test_build_from_json() {
        let config: WindowConfig = serde_json::from_str(
            r#"{"days": "mon,we,fri", "start": "10:01", "end": "11:30am",
                "timezone": "America/Los_Angeles", "overnight_days": "carry_over"}"#,
        )
        .unwrap();
        let window = TimeWindow::try_from(&config).unwrap();
        assert_eq!(window.days().len(), 3);
        assert_eq!(window.day_rule(), OvernightDayRule::CarryOver);
        assert_eq!(window.timezone().name(), "America/Los_Angeles");
    }

    #[test]
    fn test_defaults() {
        let config: WindowConfig =
            serde_json::from_str(r#"{"days": ["sat", "sun"], "start": "00:00", "end": "23:59:59"}"#)
                .unwrap();
        assert_eq!(config.timezone, "UTC");
        assert_eq!(config.overnight_days, OvernightDayRule::LocalDay);
        assert!(config.name.is_none());
        assert!(config.build().is_ok());
    }
}
