//! Point-in-time export of the instance store.
//!
//! The remote store owns habits and instances; callers hand the engine a
//! JSON snapshot of both. Malformed dates and unknown enum tags are
//! rejected here rather than guessed at inside the engine.

use std::collections::BTreeSet;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SnapshotError, ValidationError};
use crate::habit::{Habit, HabitInstance, InstanceIndex};

/// Habits and instances as exported from the instance store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub exported_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub habits: Vec<Habit>,
    #[serde(default)]
    pub instances: Vec<HabitInstance>,
}

impl Snapshot {
    /// Parse and validate a JSON snapshot.
    ///
    /// # Errors
    /// Returns an error for malformed JSON, invalid or repeated habits,
    /// repeated instance ids, instances that refer to habits missing from
    /// the snapshot, and a second instance on one day of a single-target
    /// habit.
    pub fn from_json(content: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(content).map_err(SnapshotError::Malformed)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Read and validate a snapshot file.
    ///
    /// # Errors
    /// See [`Snapshot::from_json`]; also fails if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            habits = snapshot.habits.len(),
            instances = snapshot.instances.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Write the snapshot as pretty JSON.
    ///
    /// # Errors
    /// Fails if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let mut habit_ids = BTreeSet::new();
        for habit in &self.habits {
            habit.validate()?;
            if !habit_ids.insert(habit.id.as_str()) {
                return Err(SnapshotError::DuplicateHabit(habit.id.clone()).into());
            }
        }

        let mut instance_ids = BTreeSet::new();
        let mut single_days = BTreeSet::new();
        for instance in &self.instances {
            let Some(habit) = self.habit(&instance.habit_id) else {
                return Err(SnapshotError::OrphanInstance {
                    instance_id: instance.id.clone(),
                    habit_id: instance.habit_id.clone(),
                }
                .into());
            };
            if !instance_ids.insert(instance.id.as_str()) {
                return Err(SnapshotError::DuplicateInstance(instance.id.clone()).into());
            }
            if habit.target_count == 1
                && !single_days.insert((instance.habit_id.as_str(), instance.date))
            {
                return Err(SnapshotError::DuplicateDay {
                    habit_id: instance.habit_id.clone(),
                    date: instance.date,
                }
                .into());
            }
        }
        Ok(())
    }

    /// Look up a habit by id.
    pub fn habit(&self, habit_id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == habit_id)
    }

    /// Look up a habit by id, failing on unknown ids.
    ///
    /// # Errors
    /// Returns [`ValidationError::UnknownHabit`].
    pub fn require_habit(&self, habit_id: &str) -> Result<&Habit, ValidationError> {
        self.habit(habit_id)
            .ok_or_else(|| ValidationError::UnknownHabit(habit_id.to_string()))
    }

    /// Instances for one habit.
    pub fn instances_for(&self, habit_id: &str) -> Vec<HabitInstance> {
        self.instances
            .iter()
            .filter(|i| i.habit_id == habit_id)
            .cloned()
            .collect()
    }

    /// Instance recorded for a habit on a day, if any.
    pub fn instance_on(&self, habit_id: &str, date: NaiveDate) -> Option<&HabitInstance> {
        self.instances
            .iter()
            .find(|i| i.habit_id == habit_id && i.date == date)
    }

    /// Index all instances by day and habit.
    pub fn index(&self) -> InstanceIndex {
        InstanceIndex::from_instances(&self.instances)
    }
}
