//! Daily roll-up across habits.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::percent;
use super::status::{target_progress, DayStatus, TrackingWindow};
use crate::habit::{DayTally, Habit, HabitId};

/// Roll-up counts over active habits for one day.
///
/// `completed + missed + pending == total` always holds; active habits that
/// are outside their tracking window are counted in `not_tracked` only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotals {
    pub completed: u32,
    pub missed: u32,
    pub pending: u32,
    pub total: u32,
    pub not_tracked: u32,
}

impl DailyTotals {
    fn count(&mut self, status: DayStatus) {
        match status {
            DayStatus::Completed => self.completed += 1,
            DayStatus::NotCompleted => self.missed += 1,
            DayStatus::Pending => self.pending += 1,
            DayStatus::NotTracked => {
                self.not_tracked += 1;
                return;
            }
        }
        self.total += 1;
    }

    /// `round(100 * completed / total)`, 0 when nothing is trackable.
    pub fn completion_rate(&self) -> u32 {
        percent(self.completed, self.total)
    }

    /// Every active habit was completed and at least one was trackable.
    ///
    /// An active habit that is not yet tracked on this day disqualifies it.
    pub fn is_fully_completed(&self) -> bool {
        self.total > 0
            && self.completed == self.total
            && self.missed == 0
            && self.pending == 0
            && self.not_tracked == 0
    }
}

/// Per-habit statuses plus totals for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    /// Status of every supplied habit, active or not
    pub per_habit: BTreeMap<HabitId, DayStatus>,
    /// Share of the daily target met, per habit (0.0-1.0)
    pub progress: BTreeMap<HabitId, f64>,
    pub totals: DailyTotals,
    pub completion_rate: u32,
}

/// Classify every habit on `date` and roll up the active ones.
///
/// `tallies` holds the instances recorded on `date`, keyed by habit.
pub fn aggregate_day(
    window: &TrackingWindow,
    date: NaiveDate,
    habits: &[Habit],
    tallies: &BTreeMap<HabitId, DayTally>,
) -> DailySummary {
    let mut per_habit = BTreeMap::new();
    let mut progress = BTreeMap::new();
    let mut totals = DailyTotals::default();

    for habit in habits {
        let tally = tallies.get(&habit.id).copied();
        let status = window.status(habit, date, tally);

        per_habit.insert(habit.id.clone(), status);
        progress.insert(habit.id.clone(), target_progress(tally, habit.target_count));

        if habit.is_active {
            totals.count(status);
        }
    }

    DailySummary {
        date,
        per_habit,
        progress,
        totals,
        completion_rate: totals.completion_rate(),
    }
}
