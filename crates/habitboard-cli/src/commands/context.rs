//! Shared loading for commands that read a snapshot.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use habitboard_core::{parse_date, Config, CoreError, Snapshot, SnapshotError, TrackingWindow};

/// Config, snapshot and tracking window resolved for one invocation.
pub struct Context {
    pub config: Config,
    pub snapshot: Snapshot,
    pub window: TrackingWindow,
}

impl Context {
    /// Load config and snapshot; `today` defaults to the local date.
    pub fn load(snapshot: Option<PathBuf>, today: Option<&str>) -> Result<Self, CoreError> {
        let config = Config::load()?;
        let path = snapshot
            .or_else(|| config.snapshot.path.as_ref().map(PathBuf::from))
            .ok_or(SnapshotError::NotConfigured)?;
        let snapshot = Snapshot::load(&path)?;
        let today = date_or_today(today)?;
        let window = config.window(today);

        tracing::debug!(%today, default_start = %window.default_start, "context ready");

        Ok(Self {
            config,
            snapshot,
            window,
        })
    }
}

/// Parse an optional `YYYY-MM-DD` argument, defaulting to the local date.
pub fn date_or_today(value: Option<&str>) -> Result<NaiveDate, CoreError> {
    match value {
        Some(v) => Ok(parse_date(v)?),
        None => Ok(Local::now().date_naive()),
    }
}
