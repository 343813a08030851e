//! Habit progress derivation.
//!
//! Turns sparse dated instances into per-day statuses, daily roll-ups, the
//! all-habits streak and year-long heat-map grids. Everything here is a pure
//! function of its inputs.

mod daily;
mod status;
mod streak;
mod year_grid;

pub use status::{classify, classify_tally, target_progress, DayStatus, TrackingWindow};

pub use daily::{aggregate_day, DailySummary, DailyTotals};

pub use streak::{current_streak, StreakCalculator, StreakResult, DEFAULT_MAX_LOOKBACK};

pub use year_grid::{
    build_year_grid, grid_position, DayCell, MonthSummary, YearGrid, YearGridBuilder, GRID_WEEKS,
};

/// `round(100 * part / whole)`, 0 when `whole == 0`.
pub(crate) fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    (f64::from(part) * 100.0 / f64::from(whole)).round() as u32
}
