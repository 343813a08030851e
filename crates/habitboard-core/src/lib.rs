//! # Habitboard Core Library
//!
//! This library derives habit progress from sparse, dated completion
//! records exported by the instance store. It backs the `habitboard` CLI
//! and any dashboard that needs the same answers.
//!
//! ## Architecture
//!
//! - **Habit**: read models for habits and instances, plus a per-day index
//! - **Progress**: status classification, daily roll-ups, the all-habits
//!   streak and year-long heat-map grids
//! - **Storage**: TOML-based configuration and JSON snapshot loading
//!
//! ## Key Components
//!
//! - [`classify`]: The single definition of a day's status
//! - [`aggregate_day`]: Daily roll-up over active habits
//! - [`StreakCalculator`]: Current run of fully completed days
//! - [`YearGridBuilder`]: 53 x 7 calendar grid for one habit and year
//! - [`Config`]: Application configuration management

pub mod error;
pub mod habit;
pub mod progress;
pub mod storage;

pub use error::{parse_date, ConfigError, CoreError, SnapshotError, ValidationError};
pub use habit::{
    default_tracking_start, DayTally, Frequency, Habit, HabitId, HabitInstance, InstanceIndex,
    InstanceLookup, Polarity, TrackingType,
};
pub use progress::{
    aggregate_day, build_year_grid, classify, classify_tally, current_streak, DailySummary,
    DailyTotals, DayCell, DayStatus, MonthSummary, StreakCalculator, StreakResult, TrackingWindow,
    YearGrid, YearGridBuilder, DEFAULT_MAX_LOOKBACK, GRID_WEEKS,
};
pub use storage::{Config, Snapshot};
