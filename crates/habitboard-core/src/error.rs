//! Core error types for habitboard-core.
//!
//! The derivation engine itself never fails on missing data; these errors
//! cover the boundaries around it (configuration, snapshot loading and
//! input validation).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habitboard-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Snapshot-related errors
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Instance store lookups that failed for a given day
    #[error("Instance lookup failed for {date}: {message}")]
    Lookup {
        date: chrono::NaiveDate,
        message: String,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Home directory could not be determined
    #[error("Could not determine the home directory")]
    NoHomeDir,
}

/// Snapshot-specific errors.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Snapshot file could not be read
    #[error("Failed to read snapshot at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot content is not a valid export
    #[error("Malformed snapshot: {0}")]
    Malformed(#[source] serde_json::Error),

    /// No snapshot path was given on the command line or in the config
    #[error("No snapshot configured; pass --snapshot or set snapshot.path")]
    NotConfigured,

    /// Instance refers to a habit that is not part of the snapshot
    #[error("Instance {instance_id} refers to unknown habit {habit_id}")]
    OrphanInstance { instance_id: String, habit_id: String },

    /// Two habits share an id
    #[error("Duplicate habit id {0}")]
    DuplicateHabit(String),

    /// Two instances share an id
    #[error("Duplicate instance id {0}")]
    DuplicateInstance(String),

    /// Single-target habit with more than one instance on a day
    #[error("Habit {habit_id} has more than one instance on {date}")]
    DuplicateDay {
        habit_id: String,
        date: chrono::NaiveDate,
    },
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Date string could not be parsed
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// Year outside the supported calendar range
    #[error("Year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Unknown habit identifier
    #[error("Unknown habit: {0}")]
    UnknownHabit(String),
}

/// Parse a `YYYY-MM-DD` date, rejecting anything else.
///
/// # Errors
/// Returns [`ValidationError::InvalidDate`] for malformed input.
pub fn parse_date(value: &str) -> Result<chrono::NaiveDate, ValidationError> {
    chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        ValidationError::InvalidDate {
            value: value.to_string(),
        }
    })
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_accepts_iso_day() {
        let date = parse_date("2025-06-27").unwrap();
        assert_eq!(date, chrono::NaiveDate::from_ymd_opt(2025, 6, 27).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(matches!(
            parse_date("27/06/2025"),
            Err(ValidationError::InvalidDate { .. })
        ));
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_error_display_includes_context() {
        let err: CoreError = ValidationError::UnknownHabit("h9".to_string()).into();
        assert_eq!(err.to_string(), "Validation error: Unknown habit: h9");
    }
}
