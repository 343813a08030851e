mod config;
pub mod snapshot;

pub use config::{Config, DisplayConfig, SnapshotConfig, StreakConfig, TrackingConfig};
pub use snapshot::Snapshot;

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/habitboard[-dev]/` based on HABITBOARD_ENV.
///
/// Set HABITBOARD_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?.join(".config");

    let env = std::env::var("HABITBOARD_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("habitboard-dev")
    } else {
        base_dir.join("habitboard")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::SaveFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
