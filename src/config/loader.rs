/// Configuration loading from TOML file
use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{Result, WindowError};
use crate::types::{NamedWindow, WindowConfig};

/// Name given to a window declared without one
const DEFAULT_NAME: &str = "default";

/// File layout: a single `[window]` table, a `[[windows]]` array, or both
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    window: Option<WindowConfig>,
    #[serde(default)]
    windows: Vec<WindowConfig>,
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Vec<NamedWindow>> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let windows = parse_config(&content)?;

    info!("Loaded {} time window(s) from {}", windows.len(), path.as_ref().display());
    Ok(windows)
}

pub fn parse_config(content: &str) -> Result<Vec<NamedWindow>> {
    let file: ConfigFile = toml::from_str(content)
        .map_err(|e| WindowError::ConfigError(format!("Failed to parse config: {}", e)))?;

    let configs: Vec<&WindowConfig> = file.window.iter().chain(file.windows.iter()).collect();
    validate_config(&configs)?;

    configs
        .into_iter()
        .enumerate()
        .map(|(i, config)| -> Result<NamedWindow> {
            let name = window_name(config, i);
            let window = config.build().map_err(|e| {
                WindowError::ConfigError(format!("window {:?}: {} ({})", name, e, e.error_code()))
            })?;
            Ok(NamedWindow { name, window })
        })
        .collect()
}

fn window_name(config: &WindowConfig, index: usize) -> String {
    match &config.name {
        Some(name) => name.clone(),
        None if index == 0 => DEFAULT_NAME.to_string(),
        None => format!("window_{}", index),
    }
}

fn validate_config(configs: &[&WindowConfig]) -> Result<()> {
    if configs.is_empty() {
        return Err(WindowError::ConfigError(
            "no [window] or [[windows]] entries".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for (i, config) in configs.iter().enumerate() {
        let name = window_name(config, i);
        if !seen.insert(name.clone()) {
            return Err(WindowError::ConfigError(format!("duplicate window name: {}", name)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::OvernightDayRule;
    use std::io::Write;

    #[test]
    fn test_single_window() {
        let windows = parse_config(
            r#"
            [window]
            days = ["mon", "tue", "wed", "thu", "fri"]
            start = "9am"
            end = "5pm"
            timezone = "America/Los_Angeles"
            "#,
        )
        .unwrap();

        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].name, "default");
        assert_eq!(windows[0].window.days().len(), 5);
    }

    #[test]
    fn test_window_array() {
        let windows = parse_config(
            r#"
            [[windows]]
            name = "deploy"
            days = "mon,tue,wed,thu"
            start = "10:00"
            end = "16:00"

            [[windows]]
            name = "maintenance"
            days = ["sat"]
            start = "11pm"
            end = "3am"
            timezone = "Europe/Berlin"
            overnight_days = "carry_over"
            "#,
        )
        .unwrap();

        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].name, "deploy");
        assert_eq!(windows[0].window.timezone().name(), "UTC");
        assert!(windows[1].window.is_overnight());
        assert_eq!(windows[1].window.day_rule(), OvernightDayRule::CarryOver);
    }

    #[test]
    fn test_invalid_window_names_field() {
        let err = parse_config(
            r#"
            [window]
            days = ["mon"]
            start = "9am"
            end = "5pm"
            timezone = "Nowhere/City"
            "#,
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("default"));
        assert!(message.contains("TZ_001"));
    }

    #[test]
    fn test_rejects_empty_and_duplicates() {
        assert!(matches!(parse_config(""), Err(WindowError::ConfigError(_))));

        let err = parse_config(
            r#"
            [[windows]]
            name = "a"
            days = "mon"
            start = "9am"
            end = "5pm"

            [[windows]]
            name = "a"
            days = "tue"
            start = "9am"
            end = "5pm"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [window]
            name = "deploy"
            days = "mon,tue,wed,thu,fri"
            start = "9am"
            end = "5pm"
            timezone = "America/Los_Angeles"
            "#
        )
        .unwrap();

        let windows = load_config(file.path()).unwrap();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].name, "deploy");
        assert_eq!(windows[0].window.start().hour(), 9);
        assert_eq!(windows[0].window.end().hour(), 17);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config("/nonexistent/windows.toml").unwrap_err();
        assert_eq!(err.error_code(), "FILE_001");
    }
}
