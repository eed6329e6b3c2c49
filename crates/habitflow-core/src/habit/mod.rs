//! Habit data model.
//!
//! Mirrors the rows the hosted store keeps per habit: one optional log per
//! calendar date, one optional freeze per calendar date, and the habit's
//! start date. Dates serialize as ISO `yyyy-MM-dd` strings.

mod snapshot;

pub use snapshot::{load_snapshots, parse_snapshots, HabitSnapshot};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// ISO calendar date format used on every boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A habit tracked daily from `start_date` onward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Earliest date the streak and completion window considers.
    pub start_date: NaiveDate,
}

impl Habit {
    pub fn new(id: impl Into<String>, name: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start_date,
        }
    }
}

/// One day's record for a habit.
///
/// `completed == false` means the day was explicitly skipped. A missing log
/// is a different thing: the day was never recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitLog {
    pub date: NaiveDate,
    pub completed: bool,
}

impl HabitLog {
    pub fn completed(date: NaiveDate) -> Self {
        Self {
            date,
            completed: true,
        }
    }

    pub fn skipped(date: NaiveDate) -> Self {
        Self {
            date,
            completed: false,
        }
    }
}

/// A date exempt from breaking the streak (vacation, sick day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StreakFreeze {
    pub date: NaiveDate,
}

impl StreakFreeze {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

/// Parse a `yyyy-MM-dd` string into a calendar date.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        ValidationError::InvalidDate {
            value: value.to_string(),
        }
    })
}
