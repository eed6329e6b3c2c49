//! Streak engine for habits.
//!
//! Pure functions over a habit's logs, freezes, start date and an explicit
//! "today". No I/O and no state between calls, so stats for many habits can
//! be computed in any order or in parallel.

mod day_status;
mod engine;

pub use day_status::DayStatus;
pub use engine::{HabitStats, StreakEngine, StreakSummary};
