//! Read-only habit snapshots handed to the streak engine.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{Habit, HabitLog, StreakFreeze};
use crate::error::Result;

/// Everything the engine needs for one habit: the habit row plus its full
/// log and freeze history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitSnapshot {
    pub habit: Habit,
    #[serde(default)]
    pub logs: Vec<HabitLog>,
    #[serde(default)]
    pub freezes: Vec<StreakFreeze>,
}

impl HabitSnapshot {
    pub fn new(habit: Habit) -> Self {
        Self {
            habit,
            logs: Vec::new(),
            freezes: Vec::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    Many(Vec<HabitSnapshot>),
    One(Box<HabitSnapshot>),
}

/// Parse snapshot JSON holding either one snapshot object or an array.
pub fn parse_snapshots(json: &str) -> Result<Vec<HabitSnapshot>> {
    let parsed: SnapshotFile = serde_json::from_str(json)?;
    Ok(match parsed {
        SnapshotFile::Many(snapshots) => snapshots,
        SnapshotFile::One(snapshot) => vec![*snapshot],
    })
}

/// Load snapshots from a JSON export on disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold valid
/// snapshot JSON (including malformed dates).
pub fn load_snapshots(path: impl AsRef<Path>) -> Result<Vec<HabitSnapshot>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let snapshots = parse_snapshots(&content)?;
    tracing::debug!(
        path = %path.display(),
        habits = snapshots.len(),
        "loaded habit snapshots"
    );
    Ok(snapshots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    const SINGLE: &str = r#"{
        "habit": {"id": "run", "name": "Morning run", "start_date": "2024-01-01"},
        "logs": [{"date": "2024-01-01", "completed": true}],
        "freezes": [{"date": "2024-01-02"}]
    }"#;

    #[test]
    fn test_parse_single_snapshot() {
        let snapshots = parse_snapshots(SINGLE).unwrap();
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].habit.id, "run");
        assert_eq!(snapshots[0].logs.len(), 1);
        assert_eq!(snapshots[0].freezes.len(), 1);
    }

    #[test]
    fn test_parse_snapshot_array_with_defaults() {
        let json = r#"[
            {"habit": {"id": "a", "start_date": "2024-01-01"}},
            {"habit": {"id": "b", "start_date": "2024-02-01"}, "logs": []}
        ]"#;
        let snapshots = parse_snapshots(json).unwrap();
        assert_eq!(snapshots.len(), 2);
        assert!(snapshots[0].logs.is_empty());
        assert!(snapshots[1].freezes.is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        let json = r#"{"habit": {"id": "a", "start_date": "2024-01-32"}}"#;
        assert!(matches!(parse_snapshots(json), Err(CoreError::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_snapshots("/nonexistent/habits.json").unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
