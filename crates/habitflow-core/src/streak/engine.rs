//! Streak and completion-rate calculation.
//!
//! Both scans run over the window `[start_date, today]` and classify every
//! day through [`DayStatus`]. Today without a log is treated leniently: the
//! user may simply not have logged it yet, so it never breaks a streak. Any
//! earlier day without a log counts the same as an explicit skip.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::day_status::{days_backward, days_forward, DayLookup, DayStatus};
use crate::habit::{HabitLog, HabitSnapshot, StreakFreeze};

/// Current and longest streak for one habit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Completed days walking back from today until the first breaking day
    pub current_streak: u32,
    /// Longest run of completed days across the whole window
    pub longest_streak: u32,
}

/// Display statistics for one habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitStats {
    pub habit_id: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Percentage of days since the start date marked completed
    pub completion_rate: u32,
}

/// Stateless streak calculator. Every call is independent of the others.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreakEngine;

impl StreakEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute the current and longest streak.
    ///
    /// # Arguments
    /// * `logs` - All logs for the habit, in any order
    /// * `freezes` - All freezes for the habit
    /// * `start_date` - First day of the window
    /// * `today` - Evaluation date, last day of the window
    ///
    /// # Returns
    /// Zero for both values when the window is empty (`start_date > today`).
    pub fn compute_streaks(
        &self,
        logs: &[HabitLog],
        freezes: &[StreakFreeze],
        start_date: NaiveDate,
        today: NaiveDate,
    ) -> StreakSummary {
        let lookup = DayLookup::new(logs, freezes, today);

        StreakSummary {
            current_streak: current_streak(&lookup, start_date, today),
            longest_streak: longest_streak(&lookup, start_date, today),
        }
    }

    /// Percentage (rounded) of days in `[start_date, today]` with a completed log.
    ///
    /// Freezes are ignored here; only real completions count. Every
    /// completed log is counted as given, so the result relies on the store
    /// keeping at most one log per date inside the window.
    pub fn compute_completion_rate(
        &self,
        logs: &[HabitLog],
        start_date: NaiveDate,
        today: NaiveDate,
    ) -> u32 {
        if start_date > today {
            return 0;
        }

        let total_days = (today - start_date).num_days() + 1;
        if total_days <= 0 {
            return 0;
        }

        let completed_days = logs.iter().filter(|log| log.completed).count();
        (completed_days as f64 / total_days as f64 * 100.0).round() as u32
    }

    /// Classify every day of the window, oldest first.
    pub fn day_statuses(
        &self,
        logs: &[HabitLog],
        freezes: &[StreakFreeze],
        start_date: NaiveDate,
        today: NaiveDate,
    ) -> Vec<(NaiveDate, DayStatus)> {
        let lookup = DayLookup::new(logs, freezes, today);
        days_forward(start_date, today)
            .map(|date| (date, lookup.status(date)))
            .collect()
    }

    /// Streaks and completion rate for one snapshot.
    pub fn compute_stats(&self, snapshot: &HabitSnapshot, today: NaiveDate) -> HabitStats {
        let start_date = snapshot.habit.start_date;
        let summary = self.compute_streaks(&snapshot.logs, &snapshot.freezes, start_date, today);
        let completion_rate = self.compute_completion_rate(&snapshot.logs, start_date, today);

        tracing::debug!(
            habit_id = %snapshot.habit.id,
            current = summary.current_streak,
            longest = summary.longest_streak,
            rate = completion_rate,
            "computed habit stats"
        );

        HabitStats {
            habit_id: snapshot.habit.id.clone(),
            current_streak: summary.current_streak,
            longest_streak: summary.longest_streak,
            completion_rate,
        }
    }

    /// Stats for many habits, best current streak first (ties by habit id).
    pub fn compute_all(&self, snapshots: &[HabitSnapshot], today: NaiveDate) -> Vec<HabitStats> {
        let mut results: Vec<HabitStats> = snapshots
            .iter()
            .map(|snapshot| self.compute_stats(snapshot, today))
            .collect();

        results.sort_by(|a, b| {
            b.current_streak
                .cmp(&a.current_streak)
                .then_with(|| a.habit_id.cmp(&b.habit_id))
        });
        results
    }
}

fn current_streak(lookup: &DayLookup, start_date: NaiveDate, today: NaiveDate) -> u32 {
    let mut streak = 0;
    for date in days_backward(start_date, today) {
        let status = lookup.status(date);
        if status.breaks_streak() {
            break;
        }
        if status == DayStatus::Completed {
            streak += 1;
        }
    }
    streak
}

fn longest_streak(lookup: &DayLookup, start_date: NaiveDate, today: NaiveDate) -> u32 {
    let mut running = 0;
    let mut longest = 0;
    for date in days_forward(start_date, today) {
        let status = lookup.status(date);
        if status.breaks_streak() {
            running = 0;
            continue;
        }
        match status {
            DayStatus::Completed => {
                running += 1;
                longest = longest.max(running);
            }
            DayStatus::Frozen => longest = longest.max(running),
            _ => {}
        }
    }
    longest
}
