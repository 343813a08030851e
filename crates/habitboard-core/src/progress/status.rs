//! Per-day status classification.
//!
//! Every other view (daily roll-up, streak, year grid) goes through
//! [`classify_tally`], so there is exactly one definition of each status.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::habit::{DayTally, Habit, HabitInstance};

/// Derived status of a habit on a day. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Target met
    Completed,
    /// Explicitly recorded as missed (or target unmet)
    NotCompleted,
    /// Trackable, but nothing recorded
    Pending,
    /// Before the tracking start or in the future
    NotTracked,
}

impl DayStatus {
    /// Stable serialization tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Completed => "completed",
            DayStatus::NotCompleted => "not_completed",
            DayStatus::Pending => "pending",
            DayStatus::NotTracked => "not_tracked",
        }
    }

    /// Whether the day falls inside the habit's trackable window.
    pub fn is_tracked(&self) -> bool {
        !matches!(self, DayStatus::NotTracked)
    }

    /// Character for ASCII heat-map rendering.
    pub fn heat_char(&self) -> char {
        match self {
            DayStatus::Completed => '█',
            DayStatus::NotCompleted => 'x',
            DayStatus::Pending => '░',
            DayStatus::NotTracked => '·',
        }
    }
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a single-target habit's day from an optional instance.
pub fn classify(
    date: NaiveDate,
    tracking_start: NaiveDate,
    today: NaiveDate,
    instance: Option<&HabitInstance>,
) -> DayStatus {
    classify_tally(date, tracking_start, today, instance.map(DayTally::from), 1)
}

/// Classify a day from the tally of its instances.
///
/// Rules, first match wins: before start or after today is not tracked;
/// no instances is pending; `completed >= target_count` is completed;
/// anything else on record is not completed.
pub fn classify_tally(
    date: NaiveDate,
    tracking_start: NaiveDate,
    today: NaiveDate,
    tally: Option<DayTally>,
    target_count: u32,
) -> DayStatus {
    if date < tracking_start || date > today {
        return DayStatus::NotTracked;
    }

    match tally {
        None => DayStatus::Pending,
        Some(t) if t.is_empty() => DayStatus::Pending,
        Some(t) if t.completed >= target_count.max(1) => DayStatus::Completed,
        Some(_) => DayStatus::NotCompleted,
    }
}

/// Fraction of the daily target met, clamped to `0.0..=1.0`.
pub fn target_progress(tally: Option<DayTally>, target_count: u32) -> f64 {
    let target = target_count.max(1);
    let done = tally.map(|t| t.completed.min(target)).unwrap_or(0);
    done as f64 / target as f64
}

/// The reference frame shared by every call site: today and the global
/// tracking cutoff used when a habit sets no start of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingWindow {
    pub today: NaiveDate,
    pub default_start: NaiveDate,
}

impl TrackingWindow {
    pub fn new(today: NaiveDate, default_start: NaiveDate) -> Self {
        Self {
            today,
            default_start,
        }
    }

    /// Effective start for `habit`.
    pub fn start_for(&self, habit: &Habit) -> NaiveDate {
        habit.tracking_start_or(self.default_start)
    }

    /// Status of `habit` on `date` given its tally for that day.
    pub fn status(&self, habit: &Habit, date: NaiveDate, tally: Option<DayTally>) -> DayStatus {
        classify_tally(date, self.start_for(habit), self.today, tally, habit.target_count)
    }
}
