//! Year-long calendar grid for heat-map rendering.
//!
//! Columns are Sunday-start weeks where week 1 is the week containing
//! January 1st; rows are weekdays with Sunday = 0. This is a rendering
//! convention, not ISO 8601 week numbering.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::percent;
use super::status::{classify_tally, DayStatus};
use crate::error::ValidationError;
use crate::habit::{DayTally, HabitInstance};

/// Number of week columns in a year grid.
pub const GRID_WEEKS: usize = 53;

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One classified day in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub status: DayStatus,
}

/// Tracked/completed counts for a calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// 1-12
    pub month: u32,
    pub tracked_days: u32,
    pub completed_days: u32,
    pub completion_rate: u32,
}

/// Classified year for one habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearGrid {
    pub year: i32,
    pub habit_id: String,
    /// `GRID_WEEKS` columns of 7 weekday cells; `None` outside the year.
    ///
    /// Dec 31 of a leap year starting on a Saturday falls in a 54th week and
    /// has no cell here. It is still counted in the totals, month summaries
    /// and `longest_streak`.
    pub days: Vec<[Option<DayCell>; 7]>,
    pub total_tracked_days: u32,
    pub completed_days: u32,
    pub missed_days: u32,
    pub pending_days: u32,
    pub completion_rate: u32,
    /// Longest run of consecutive completed days within the year
    pub longest_streak: u32,
    pub months: Vec<MonthSummary>,
}

impl YearGrid {
    /// Cell at a week column and weekday row.
    pub fn cell(&self, week: usize, weekday: usize) -> Option<&DayCell> {
        self.days.get(week)?.get(weekday)?.as_ref()
    }

    /// Cell holding `date`, if it is part of this grid.
    pub fn cell_for(&self, date: NaiveDate) -> Option<&DayCell> {
        if date.year() != self.year {
            return None;
        }
        let (week, weekday) = grid_position(date)?;
        self.cell(week, weekday)
    }

    /// Render the grid as an ASCII heat map.
    pub fn render_ascii(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("\nHabit {} - {}\n", self.habit_id, self.year));
        output.push_str(&"=".repeat(GRID_WEEKS + 5));
        output.push('\n');

        for (weekday, name) in DAY_NAMES.iter().enumerate() {
            output.push_str(&format!("{:<4} ", name));
            for week in &self.days {
                let ch = week[weekday].map(|c| c.status.heat_char()).unwrap_or(' ');
                output.push(ch);
            }
            output.push('\n');
        }

        output.push_str(&"=".repeat(GRID_WEEKS + 5));
        output.push('\n');
        output.push_str("Legend: █ completed  x missed  ░ pending  · not tracked\n\n");
        output.push_str(&format!(
            "Tracked days: {}  Completed: {}  Missed: {}  Pending: {}\n",
            self.total_tracked_days, self.completed_days, self.missed_days, self.pending_days
        ));
        output.push_str(&format!(
            "Completion rate: {}%  Longest streak: {} days\n",
            self.completion_rate, self.longest_streak
        ));

        output
    }
}

/// `(week column, weekday row)` for a date, or `None` if the week falls
/// outside the 53-column grid.
pub fn grid_position(date: NaiveDate) -> Option<(usize, usize)> {
    let jan1 = NaiveDate::from_yo_opt(date.year(), 1)?;
    let offset = jan1.weekday().num_days_from_sunday();
    let week = ((date.ordinal0() + offset) / 7) as usize;
    let weekday = date.weekday().num_days_from_sunday() as usize;

    (week < GRID_WEEKS).then_some((week, weekday))
}

/// Builds [`YearGrid`]s. Pure; identical inputs give identical grids.
#[derive(Debug, Clone)]
pub struct YearGridBuilder {
    /// Completions per day required for a `completed` cell
    pub target_count: u32,
}

impl Default for YearGridBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl YearGridBuilder {
    /// Builder for single-target habits.
    pub fn new() -> Self {
        Self { target_count: 1 }
    }

    /// Builder for habits expecting several completions per day.
    pub fn with_target(target_count: u32) -> Self {
        Self {
            target_count: target_count.max(1),
        }
    }

    /// Classify every day of `year` for `habit_id`.
    ///
    /// Instances belonging to other habits are ignored.
    ///
    /// # Errors
    /// Returns [`ValidationError::YearOutOfRange`] if the year cannot be
    /// represented as a full calendar year.
    pub fn build(
        &self,
        year: i32,
        habit_id: &str,
        instances: &[HabitInstance],
        tracking_start: NaiveDate,
        today: NaiveDate,
    ) -> Result<YearGrid, ValidationError> {
        let jan1 =
            NaiveDate::from_ymd_opt(year, 1, 1).ok_or(ValidationError::YearOutOfRange(year))?;
        NaiveDate::from_ymd_opt(year, 12, 31).ok_or(ValidationError::YearOutOfRange(year))?;

        let mut tallies: BTreeMap<NaiveDate, DayTally> = BTreeMap::new();
        for instance in instances
            .iter()
            .filter(|i| i.habit_id == habit_id && i.date.year() == year)
        {
            tallies.entry(instance.date).or_default().record(instance.completed);
        }

        let mut days = vec![[None; 7]; GRID_WEEKS];
        let mut months: Vec<MonthSummary> = (1..=12)
            .map(|month| MonthSummary {
                month,
                tracked_days: 0,
                completed_days: 0,
                completion_rate: 0,
            })
            .collect();
        let mut total_tracked_days = 0;
        let mut completed_days = 0;
        let mut missed_days = 0;
        let mut pending_days = 0;
        let mut longest_streak = 0;
        let mut run = 0;

        for date in jan1.iter_days().take_while(|d| d.year() == year) {
            let status = classify_tally(
                date,
                tracking_start,
                today,
                tallies.get(&date).copied(),
                self.target_count,
            );

            match grid_position(date) {
                Some((week, weekday)) => days[week][weekday] = Some(DayCell { date, status }),
                None => tracing::warn!(%date, "date falls outside the week grid, cell dropped"),
            }

            let month = &mut months[date.month0() as usize];
            if status.is_tracked() {
                total_tracked_days += 1;
                month.tracked_days += 1;
            }
            match status {
                DayStatus::Completed => {
                    completed_days += 1;
                    month.completed_days += 1;
                    run += 1;
                    longest_streak = longest_streak.max(run);
                }
                DayStatus::NotCompleted => {
                    missed_days += 1;
                    run = 0;
                }
                DayStatus::Pending => {
                    pending_days += 1;
                    run = 0;
                }
                DayStatus::NotTracked => run = 0,
            }
        }

        for month in &mut months {
            month.completion_rate = percent(month.completed_days, month.tracked_days);
        }

        Ok(YearGrid {
            year,
            habit_id: habit_id.to_string(),
            days,
            total_tracked_days,
            completed_days,
            missed_days,
            pending_days,
            completion_rate: percent(completed_days, total_tracked_days),
            longest_streak,
            months,
        })
    }
}

/// Build a single-target year grid.
///
/// # Errors
/// See [`YearGridBuilder::build`].
pub fn build_year_grid(
    year: i32,
    habit_id: &str,
    instances: &[HabitInstance],
    tracking_start: NaiveDate,
    today: NaiveDate,
) -> Result<YearGrid, ValidationError> {
    YearGridBuilder::new().build(year, habit_id, instances, tracking_start, today)
}
