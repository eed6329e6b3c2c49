//! Integration tests for the streak engine.
//!
//! Drives the public API the way the CLI does: snapshots exported as JSON,
//! loaded from disk, then evaluated against a fixed "today".

use chrono::NaiveDate;
use habitflow_core::habit::load_snapshots;
use habitflow_core::{parse_iso_date, DayStatus, HabitLog, StreakEngine, StreakFreeze};
use std::io::Write;

fn date(s: &str) -> NaiveDate {
    parse_iso_date(s).unwrap()
}

fn write_export(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

const EXPORT: &str = r#"[
  {
    "habit": {"id": "meditate", "name": "Meditate", "start_date": "2024-01-01"},
    "logs": [
      {"date": "2024-01-01", "completed": true},
      {"date": "2024-01-02", "completed": true},
      {"date": "2024-01-03", "completed": true},
      {"date": "2024-01-04", "completed": true},
      {"date": "2024-01-07", "completed": true},
      {"date": "2024-01-08", "completed": true},
      {"date": "2024-01-09", "completed": true},
      {"date": "2024-01-10", "completed": true}
    ],
    "freezes": [{"date": "2024-01-05"}]
  },
  {
    "habit": {"id": "journal", "name": "Journal", "start_date": "2024-01-01"},
    "logs": [{"date": "2024-01-05", "completed": false}]
  },
  {
    "habit": {"id": "stretch", "name": "Stretch", "start_date": "2024-01-01"},
    "logs": [
      {"date": "2024-01-10", "completed": true},
      {"date": "2024-01-09", "completed": true},
      {"date": "2024-01-08", "completed": true},
      {"date": "2024-01-07", "completed": true},
      {"date": "2024-01-06", "completed": true},
      {"date": "2024-01-05", "completed": true},
      {"date": "2024-01-04", "completed": true},
      {"date": "2024-01-03", "completed": true},
      {"date": "2024-01-02", "completed": true},
      {"date": "2024-01-01", "completed": true}
    ]
  }
]"#;

#[test]
fn test_full_export_workflow() {
    let file = write_export(EXPORT);
    let snapshots = load_snapshots(file.path()).unwrap();
    assert_eq!(snapshots.len(), 3);

    let engine = StreakEngine::new();
    let stats = engine.compute_all(&snapshots, date("2024-01-10"));

    assert_eq!(stats[0].habit_id, "stretch");
    assert_eq!(stats[0].current_streak, 10);
    assert_eq!(stats[0].longest_streak, 10);
    assert_eq!(stats[0].completion_rate, 100);

    assert_eq!(stats[1].habit_id, "meditate");
    assert_eq!(stats[1].current_streak, 4);
    assert_eq!(stats[1].longest_streak, 4);
    assert_eq!(stats[1].completion_rate, 80);

    assert_eq!(stats[2].habit_id, "journal");
    assert_eq!(stats[2].current_streak, 0);
    assert_eq!(stats[2].longest_streak, 0);
    assert_eq!(stats[2].completion_rate, 0);
}

#[test]
fn test_next_morning_before_logging() {
    let file = write_export(EXPORT);
    let snapshots = load_snapshots(file.path()).unwrap();
    let stretch = snapshots.iter().find(|s| s.habit.id == "stretch").unwrap();

    let engine = StreakEngine::new();
    let stats = engine.compute_stats(stretch, date("2024-01-11"));
    assert_eq!(stats.current_streak, 10);
    assert_eq!(stats.longest_streak, 10);
    assert_eq!(stats.completion_rate, 91);

    // A full day later with nothing logged, the streak is gone.
    let stats = engine.compute_stats(stretch, date("2024-01-12"));
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.longest_streak, 10);
}

#[test]
fn test_vacation_week_preserves_streak() {
    let engine = StreakEngine::new();
    let start = date("2024-03-01");

    let mut logs: Vec<HabitLog> = (0..5)
        .map(|i| HabitLog::completed(start + chrono::Duration::days(i)))
        .collect();
    let freezes: Vec<StreakFreeze> = (5..12)
        .map(|i| StreakFreeze::new(start + chrono::Duration::days(i)))
        .collect();
    logs.extend((12..15).map(|i| HabitLog::completed(start + chrono::Duration::days(i))));

    let today = start + chrono::Duration::days(14);
    let summary = engine.compute_streaks(&logs, &freezes, start, today);
    assert_eq!(summary.current_streak, 8);
    assert_eq!(summary.longest_streak, 8);
    // Freezes do not help the completion rate: 8 of 15 days.
    assert_eq!(engine.compute_completion_rate(&logs, start, today), 53);
}

#[test]
fn test_calendar_across_month_boundary() {
    let engine = StreakEngine::new();
    let logs = vec![
        HabitLog::completed(date("2024-01-30")),
        HabitLog::skipped(date("2024-01-31")),
        HabitLog::completed(date("2024-02-01")),
    ];
    let freezes = vec![StreakFreeze::new(date("2024-01-31"))];

    let calendar = engine.day_statuses(&logs, &freezes, date("2024-01-30"), date("2024-02-02"));
    let statuses: Vec<DayStatus> = calendar.iter().map(|(_, s)| *s).collect();
    assert_eq!(
        statuses,
        vec![
            DayStatus::Completed,
            DayStatus::Frozen,
            DayStatus::Completed,
            DayStatus::Pending,
        ]
    );

    let summary = engine.compute_streaks(&logs, &freezes, date("2024-01-30"), date("2024-02-02"));
    assert_eq!(summary.current_streak, 2);
    assert_eq!(summary.longest_streak, 2);
}

#[test]
fn test_single_snapshot_file() {
    let file = write_export(
        r#"{"habit": {"id": "solo", "start_date": "2024-01-01"},
            "logs": [{"date": "2024-01-01", "completed": true}]}"#,
    );
    let snapshots = load_snapshots(file.path()).unwrap();
    assert_eq!(snapshots.len(), 1);

    let stats = StreakEngine::new().compute_stats(&snapshots[0], date("2024-01-01"));
    assert_eq!(stats.current_streak, 1);
    assert_eq!(stats.longest_streak, 1);
    assert_eq!(stats.completion_rate, 100);
}
