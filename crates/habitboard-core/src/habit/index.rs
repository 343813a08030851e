//! Per-day instance tallies and the lookup seam used by the streak walk.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{HabitId, HabitInstance};
use crate::error::Result;

/// Instances recorded for one habit on one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTally {
    /// Number of instances on record (completed or not)
    pub recorded: u32,
    /// Number of those marked completed
    pub completed: u32,
}

impl DayTally {
    /// Count one more instance.
    pub fn record(&mut self, completed: bool) {
        self.recorded += 1;
        if completed {
            self.completed += 1;
        }
    }

    /// Whether any instance exists at all.
    pub fn is_empty(&self) -> bool {
        self.recorded == 0
    }
}

impl From<&HabitInstance> for DayTally {
    fn from(instance: &HabitInstance) -> Self {
        let mut tally = DayTally::default();
        tally.record(instance.completed);
        tally
    }
}

/// Source of per-day instance data.
///
/// Implementations backed by a remote store may fail; the streak walk treats
/// a failed day as not fully completed.
pub trait InstanceLookup {
    /// Tallies for every habit with at least one instance on `date`.
    fn tallies_on(&self, date: NaiveDate) -> Result<BTreeMap<HabitId, DayTally>>;
}

/// In-memory index of a flat instance list, grouped by day then habit.
#[derive(Debug, Clone, Default)]
pub struct InstanceIndex {
    by_day: BTreeMap<NaiveDate, BTreeMap<HabitId, DayTally>>,
}

impl InstanceIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Group `instances` by (date, habit).
    pub fn from_instances<'a, I>(instances: I) -> Self
    where
        I: IntoIterator<Item = &'a HabitInstance>,
    {
        let mut index = Self::new();
        for instance in instances {
            index.insert(instance);
        }
        index
    }

    /// Add one instance to the index.
    pub fn insert(&mut self, instance: &HabitInstance) {
        self.by_day
            .entry(instance.date)
            .or_default()
            .entry(instance.habit_id.clone())
            .or_default()
            .record(instance.completed);
    }

    /// Tally for a habit on a day, `None` when nothing was recorded.
    pub fn tally(&self, habit_id: &str, date: NaiveDate) -> Option<DayTally> {
        self.by_day
            .get(&date)
            .and_then(|habits| habits.get(habit_id))
            .copied()
    }

    /// Tallies for all habits on a day (empty map if none).
    pub fn day(&self, date: NaiveDate) -> BTreeMap<HabitId, DayTally> {
        self.by_day.get(&date).cloned().unwrap_or_default()
    }

    /// Number of distinct days with at least one instance.
    pub fn days_recorded(&self) -> usize {
        self.by_day.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
    }
}

impl InstanceLookup for InstanceIndex {
    fn tallies_on(&self, date: NaiveDate) -> Result<BTreeMap<HabitId, DayTally>> {
        Ok(self.day(date))
    }
}
