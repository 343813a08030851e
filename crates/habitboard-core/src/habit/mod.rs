//! Habit and instance read models.
//!
//! These mirror the records owned by the remote instance store. The engine
//! only ever reads point-in-time snapshots of them.

mod index;

pub use index::{DayTally, InstanceIndex, InstanceLookup};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Identifier of a habit as assigned by the instance store.
pub type HabitId = String;

/// First day any habit can have a meaningful status unless it sets its own
/// `tracking_start_date`.
pub fn default_tracking_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 27).unwrap_or(NaiveDate::MIN)
}

/// How often a habit is expected to be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Custom,
}

/// How instances get recorded. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingType {
    #[default]
    Manual,
    Automated,
    Hybrid,
}

/// Habit polarity. Affects presentation, never completion semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    #[default]
    Good,
    Bad,
}

/// A recurring tracked behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,

    /// Display name
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub frequency: Frequency,

    #[serde(default)]
    pub tracking_type: TrackingType,

    /// Completions expected per tracking period (>= 1)
    #[serde(default = "default_target_count")]
    pub target_count: u32,

    /// Inactive habits keep their history but are left out of roll-ups
    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub good_bad: Polarity,

    /// Days before this carry no status; falls back to the global cutoff
    #[serde(default)]
    pub tracking_start_date: Option<NaiveDate>,
}

fn default_target_count() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

impl Habit {
    /// Create an active, daily, single-target habit.
    pub fn new(id: impl Into<HabitId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            frequency: Frequency::Daily,
            tracking_type: TrackingType::Manual,
            target_count: 1,
            is_active: true,
            good_bad: Polarity::Good,
            tracking_start_date: None,
        }
    }

    /// Builder-style setter for the per-habit tracking start.
    pub fn starting(mut self, date: NaiveDate) -> Self {
        self.tracking_start_date = Some(date);
        self
    }

    /// Builder-style setter for the daily target.
    pub fn with_target(mut self, target_count: u32) -> Self {
        self.target_count = target_count;
        self
    }

    /// Builder-style setter marking the habit inactive.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Effective tracking start, given the global default.
    pub fn tracking_start_or(&self, default_start: NaiveDate) -> NaiveDate {
        self.tracking_start_date.unwrap_or(default_start)
    }

    /// Reject shapes the engine cannot reason about.
    ///
    /// # Errors
    /// Returns an error when `target_count` is zero or the id is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "id".to_string(),
                message: "habit id must not be empty".to_string(),
            });
        }
        if self.target_count == 0 {
            return Err(ValidationError::InvalidValue {
                field: "target_count".to_string(),
                message: format!("habit {} must expect at least one completion", self.id),
            });
        }
        Ok(())
    }
}

/// A single dated record for one habit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitInstance {
    pub id: String,
    pub habit_id: HabitId,
    pub date: NaiveDate,
    pub completed: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

impl HabitInstance {
    /// Create an instance without notes.
    pub fn new(
        id: impl Into<String>,
        habit_id: impl Into<HabitId>,
        date: NaiveDate,
        completed: bool,
    ) -> Self {
        Self {
            id: id.into(),
            habit_id: habit_id.into(),
            date,
            completed,
            notes: None,
        }
    }
}
