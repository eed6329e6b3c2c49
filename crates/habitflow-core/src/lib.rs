//! # Habitflow Core Library
//!
//! This library provides the core business logic for the Habitflow habit
//! tracker. It follows a CLI-first philosophy: every computation is
//! available through the standalone `habitflow` binary, and any richer
//! front end is a thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Streak Engine**: Pure, deterministic streak and completion-rate
//!   calculation over a habit's logs and freezes with an explicit "today"
//! - **Habit Model**: Logs, freezes and snapshots as exported by the
//!   hosted store
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`StreakEngine`]: Current/longest streak and completion rate
//! - [`HabitSnapshot`]: Read-only input bundle for one habit
//! - [`Config`]: Application configuration management

pub mod habit;
pub mod streak;
pub mod storage;
pub mod error;

pub use habit::{parse_iso_date, Habit, HabitLog, HabitSnapshot, StreakFreeze};
pub use streak::{DayStatus, HabitStats, StreakEngine, StreakSummary};
pub use storage::{Config, OutputFormat};
pub use error::{ConfigError, CoreError, ValidationError};
