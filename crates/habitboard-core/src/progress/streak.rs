//! Lock-step streak across the current set of active habits.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::daily::aggregate_day;
use super::status::TrackingWindow;
use crate::habit::{Habit, InstanceLookup};

/// Days examined by default before the walk gives up.
pub const DEFAULT_MAX_LOOKBACK: u32 = 30;

/// Consecutive fully completed days ending at the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakResult {
    pub length: u32,
    pub reference_date: NaiveDate,
    /// Earliest day of the run, `None` when `length == 0`
    pub start_date: Option<NaiveDate>,
    /// The lookback limit was reached while still counting
    pub truncated: bool,
}

impl StreakResult {
    fn empty(reference_date: NaiveDate) -> Self {
        Self {
            length: 0,
            reference_date,
            start_date: None,
            truncated: false,
        }
    }
}

/// Walks backward day by day until a day is not fully completed.
#[derive(Debug, Clone)]
pub struct StreakCalculator {
    /// Maximum number of days examined
    pub max_lookback: u32,
}

impl Default for StreakCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl StreakCalculator {
    /// Create a calculator with the default 30-day lookback.
    pub fn new() -> Self {
        Self {
            max_lookback: DEFAULT_MAX_LOOKBACK,
        }
    }

    /// Create a calculator with a custom lookback.
    pub fn with_lookback(max_lookback: u32) -> Self {
        Self { max_lookback }
    }

    /// Length of the current run of fully completed days.
    ///
    /// Only active habits take part. A day qualifies when every active habit
    /// is `completed`; the first day that does not qualify ends the walk,
    /// and so does a day whose instances could not be fetched.
    pub fn current_streak<L>(
        &self,
        window: &TrackingWindow,
        reference_date: NaiveDate,
        habits: &[Habit],
        lookup: &L,
    ) -> StreakResult
    where
        L: InstanceLookup + ?Sized,
    {
        let active: Vec<Habit> = habits.iter().filter(|h| h.is_active).cloned().collect();
        let mut result = StreakResult::empty(reference_date);

        if active.is_empty() {
            tracing::debug!(%reference_date, "no active habits, streak is zero");
            return result;
        }

        for offset in 0..self.max_lookback {
            let Some(day) = reference_date.checked_sub_days(Days::new(u64::from(offset))) else {
                // Calendar exhausted before the lookback limit.
                return result;
            };

            let tallies = match lookup.tallies_on(day) {
                Ok(tallies) => tallies,
                Err(e) => {
                    tracing::warn!(%day, error = %e, "instance lookup failed, ending streak walk");
                    return result;
                }
            };

            let summary = aggregate_day(window, day, &active, &tallies);
            if !summary.totals.is_fully_completed() {
                tracing::debug!(%day, totals = ?summary.totals, "streak ends");
                return result;
            }

            result.length += 1;
            result.start_date = Some(day);
        }

        result.truncated = result.length > 0;
        result
    }
}

/// Convenience wrapper using [`StreakCalculator`] with `max_lookback`.
pub fn current_streak<L>(
    window: &TrackingWindow,
    reference_date: NaiveDate,
    habits: &[Habit],
    lookup: &L,
    max_lookback: u32,
) -> StreakResult
where
    L: InstanceLookup + ?Sized,
{
    StreakCalculator::with_lookback(max_lookback).current_streak(
        window,
        reference_date,
        habits,
        lookup,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, Result};
    use crate::habit::{DayTally, HabitId, HabitInstance, InstanceIndex};
    use std::collections::BTreeMap;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    fn window() -> TrackingWindow {
        TrackingWindow::new(d(30), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    fn done(habit: &str, day: u32) -> HabitInstance {
        HabitInstance::new(format!("{habit}-{day}"), habit, d(day), true)
    }

    /// Lookup that fails on one specific day.
    struct FlakyLookup {
        inner: InstanceIndex,
        broken: NaiveDate,
    }

    impl InstanceLookup for FlakyLookup {
        fn tallies_on(&self, date: NaiveDate) -> Result<BTreeMap<HabitId, DayTally>> {
            if date == self.broken {
                return Err(CoreError::Lookup {
                    date,
                    message: "connection reset".to_string(),
                });
            }
            self.inner.tallies_on(date)
        }
    }

    #[test]
    fn test_no_habits_is_zero() {
        let index = InstanceIndex::new();
        let result = StreakCalculator::new().current_streak(&window(), d(28), &[], &index);
        assert_eq!(result.length, 0);
        assert_eq!(result.start_date, None);
    }

    #[test]
    fn test_only_inactive_habits_is_zero() {
        let habits = vec![Habit::new("a", "A").inactive()];
        let index = InstanceIndex::from_instances(&[done("a", 28)]);
        let result = StreakCalculator::new().current_streak(&window(), d(28), &habits, &index);
        assert_eq!(result.length, 0);
    }

    #[test]
    fn test_pending_habit_breaks_streak() {
        let habits = vec![Habit::new("a", "A"), Habit::new("b", "B")];
        let instances = vec![done("a", 28), done("b", 28), done("a", 27)];
        let index = InstanceIndex::from_instances(&instances);

        let result = StreakCalculator::new().current_streak(&window(), d(28), &habits, &index);
        assert_eq!(result.length, 1);
        assert_eq!(result.start_date, Some(d(28)));
        assert!(!result.truncated);
    }

    #[test]
    fn test_gap_is_not_skipped() {
        let habits = vec![Habit::new("a", "A")];
        let instances = vec![done("a", 28), done("a", 26), done("a", 25)];
        let index = InstanceIndex::from_instances(&instances);

        let result = StreakCalculator::new().current_streak(&window(), d(28), &habits, &index);
        assert_eq!(result.length, 1);
    }

    #[test]
    fn test_explicit_miss_breaks_streak() {
        let habits = vec![Habit::new("a", "A")];
        let instances = vec![
            done("a", 28),
            HabitInstance::new("m", "a", d(27), false),
            done("a", 26),
        ];
        let index = InstanceIndex::from_instances(&instances);

        let result = StreakCalculator::new().current_streak(&window(), d(28), &habits, &index);
        assert_eq!(result.length, 1);
    }

    #[test]
    fn test_lookback_caps_walk() {
        let habits = vec![Habit::new("a", "A")];
        let instances: Vec<_> = (1..=28).map(|day| done("a", day)).collect();
        let index = InstanceIndex::from_instances(&instances);

        let result =
            StreakCalculator::with_lookback(5).current_streak(&window(), d(28), &habits, &index);
        assert_eq!(result.length, 5);
        assert_eq!(result.start_date, Some(d(24)));
        assert!(result.truncated);

        let zero =
            StreakCalculator::with_lookback(0).current_streak(&window(), d(28), &habits, &index);
        assert_eq!(zero.length, 0);
        assert!(!zero.truncated);
    }

    #[test]
    fn test_lookup_failure_stops_walk() {
        let habits = vec![Habit::new("a", "A")];
        let instances: Vec<_> = (20..=28).map(|day| done("a", day)).collect();
        let lookup = FlakyLookup {
            inner: InstanceIndex::from_instances(&instances),
            broken: d(25),
        };

        let result = StreakCalculator::new().current_streak(&window(), d(28), &habits, &lookup);
        assert_eq!(result.length, 3);
        assert_eq!(result.start_date, Some(d(26)));
    }

    #[test]
    fn test_walk_stops_at_calendar_start() {
        let habits = vec![Habit::new("a", "A")];
        let first = NaiveDate::MIN;
        let window = TrackingWindow::new(first, first);
        let index = InstanceIndex::from_instances(&[HabitInstance::new("m", "a", first, true)]);

        let result =
            StreakCalculator::with_lookback(5).current_streak(&window, first, &habits, &index);
        assert_eq!(result.length, 1);
        assert_eq!(result.start_date, Some(first));
        assert!(!result.truncated);
    }

    #[test]
    fn test_future_reference_is_zero() {
        let habits = vec![Habit::new("a", "A")];
        let index = InstanceIndex::from_instances(&[done("a", 30)]);
        let tomorrow = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let result = current_streak(&window(), tomorrow, &habits, &index, 30);
        assert_eq!(result.length, 0);
    }
}
