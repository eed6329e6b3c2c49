//! Per-day classification shared by the streak scans.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::iter;

use crate::habit::{HabitLog, StreakFreeze};

/// How a single calendar day affects a streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Logged as completed; extends the streak
    Completed,
    /// Frozen and not completed; preserves the streak without extending it
    Frozen,
    /// Logged as skipped and not frozen; breaks the streak
    Skipped,
    /// Today, not logged yet and not frozen; neither breaks nor extends
    Pending,
    /// Past day with no log and no freeze; breaks the streak
    Missed,
}

impl DayStatus {
    /// Whether this day ends a running streak.
    pub fn breaks_streak(&self) -> bool {
        matches!(self, DayStatus::Skipped | DayStatus::Missed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Completed => "completed",
            DayStatus::Frozen => "frozen",
            DayStatus::Skipped => "skipped",
            DayStatus::Pending => "pending",
            DayStatus::Missed => "missed",
        }
    }

    /// Single-character glyph for compact calendar output.
    pub fn glyph(&self) -> char {
        match self {
            DayStatus::Completed => '#',
            DayStatus::Frozen => '*',
            DayStatus::Skipped => 'x',
            DayStatus::Pending => '?',
            DayStatus::Missed => '.',
        }
    }
}

/// Date-indexed view over one habit's logs and freezes.
pub(crate) struct DayLookup {
    logs: HashMap<NaiveDate, bool>,
    frozen: HashSet<NaiveDate>,
    today: NaiveDate,
}

impl DayLookup {
    pub(crate) fn new(logs: &[HabitLog], freezes: &[StreakFreeze], today: NaiveDate) -> Self {
        let mut by_date = HashMap::with_capacity(logs.len());
        for log in logs {
            if by_date.insert(log.date, log.completed).is_some() {
                tracing::warn!(date = %log.date, "duplicate habit log, last entry wins");
            }
        }

        Self {
            logs: by_date,
            frozen: freezes.iter().map(|f| f.date).collect(),
            today,
        }
    }

    pub(crate) fn status(&self, date: NaiveDate) -> DayStatus {
        let logged = self.logs.get(&date).copied();

        // Completion is checked before the freeze, and the freeze before
        // an explicit skip.
        if logged == Some(true) {
            DayStatus::Completed
        } else if self.frozen.contains(&date) {
            DayStatus::Frozen
        } else if logged == Some(false) {
            DayStatus::Skipped
        } else if date == self.today {
            DayStatus::Pending
        } else {
            DayStatus::Missed
        }
    }
}

/// Dates from `start` up to `end`, inclusive. Empty when `start > end`.
pub(crate) fn days_forward(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    iter::successors(Some(start), |d| d.succ_opt()).take_while(move |d| *d <= end)
}

/// Dates from `end` down to `start`, inclusive. Empty when `start > end`.
pub(crate) fn days_backward(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    iter::successors(Some(end), |d| d.pred_opt()).take_while(move |d| *d >= start)
}
