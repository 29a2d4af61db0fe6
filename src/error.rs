/// Centralized error types for time window construction
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WindowError {
    // Weekday Errors
    #[error("Unknown weekday: {0:?}")]
    UnknownWeekday(String),

    #[error("Weekday list is empty")]
    EmptyWeekdays,

    // Time-of-day Errors
    #[error("Unable to parse {field} time: {input:?}")]
    TimeParse { field: &'static str, input: String },

    // Timezone Errors
    #[error("Unknown timezone: {0:?}")]
    UnknownTimezone(String),

    // Configuration Errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("File I/O error: {0}")]
    FileError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WindowError>;

impl WindowError {
    /// Configuration field the error refers to
    pub fn field(&self) -> &str {
        match self {
            WindowError::UnknownWeekday(_) | WindowError::EmptyWeekdays => "days",
            WindowError::TimeParse { field, .. } => field,
            WindowError::UnknownTimezone(_) => "timezone",
            WindowError::ConfigError(_) | WindowError::FileError(_) => "config",
        }
    }

    /// Get error code for logging/monitoring
    pub fn error_code(&self) -> &str {
        match self {
            WindowError::UnknownWeekday(_) => "DAY_001",
            WindowError::EmptyWeekdays => "DAY_002",
            WindowError::TimeParse { .. } => "TIME_001",
            WindowError::UnknownTimezone(_) => "TZ_001",
            WindowError::ConfigError(_) => "CFG_001",
            WindowError::FileError(_) => "FILE_001",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_and_fields() {
        let err = WindowError::TimeParse { field: "end", input: "25:00".to_string() };
        assert_eq!(err.error_code(), "TIME_001");
        assert_eq!(err.field(), "end");
        assert_eq!(err.to_string(), "Unable to parse end time: \"25:00\"");

        let err = WindowError::UnknownWeekday("funday".to_string());
        assert_eq!(err.field(), "days");
        assert_eq!(err.error_code(), "DAY_001");

        assert_eq!(WindowError::UnknownTimezone("Mars/Base".into()).field(), "timezone");
    }
}
