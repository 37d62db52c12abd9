use thiserror::Error;

/// Errors that can occur when turning raw parameters into a time window.
///
/// The cursor itself never fails; these only surface while parsing the
/// strings and configuration that feed it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("Invalid date: {0} (expected YYYY-MM-DD or an RFC 3339 timestamp)")]
    InvalidDate(String),
    #[error("Invalid timestamp: {0} (expected RFC 3339)")]
    InvalidTimestamp(String),
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
    #[error("Unknown range preset: {0} (expected one of 2d, 7d, 14d, full)")]
    UnknownPreset(String),
}

/// Result type for window operations.
pub type Result<T> = std::result::Result<T, WindowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_display() {
        assert_eq!(
            WindowError::InvalidDate("2024-13-01".to_string()).to_string(),
            "Invalid date: 2024-13-01 (expected YYYY-MM-DD or an RFC 3339 timestamp)"
        );
    }

    #[test]
    fn test_unknown_timezone_display() {
        assert_eq!(
            WindowError::UnknownTimezone("Mars/Olympus".to_string()).to_string(),
            "Unknown timezone: Mars/Olympus"
        );
    }

    #[test]
    fn test_unknown_preset_display() {
        assert_eq!(
            WindowError::UnknownPreset("3w".to_string()).to_string(),
            "Unknown range preset: 3w (expected one of 2d, 7d, 14d, full)"
        );
    }
}
