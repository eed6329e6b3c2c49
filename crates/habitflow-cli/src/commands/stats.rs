use chrono::NaiveDate;
use clap::Subcommand;
use habitflow_core::habit::load_snapshots;
use habitflow_core::{parse_iso_date, Config, OutputFormat, StreakEngine};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Current streak, longest streak and completion rate per habit
    Show {
        /// JSON export with one habit snapshot or an array of them
        file: PathBuf,
        /// Evaluation date (YYYY-MM-DD), defaults to the local date
        #[arg(long)]
        today: Option<String>,
        /// Output as JSON regardless of config
        #[arg(long)]
        json: bool,
    },
    /// Day-by-day status for one habit
    Calendar {
        /// JSON export with one habit snapshot or an array of them
        file: PathBuf,
        /// Habit id (defaults to the first habit in the file)
        #[arg(long)]
        habit: Option<String>,
        /// Evaluation date (YYYY-MM-DD), defaults to the local date
        #[arg(long)]
        today: Option<String>,
        /// Output as JSON regardless of config
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct CalendarDay {
    date: NaiveDate,
    status: habitflow_core::DayStatus,
}

fn resolve_today(today: Option<String>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match today {
        Some(value) => Ok(parse_iso_date(&value)?),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

pub fn run(action: StatsAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let engine = StreakEngine::new();

    match action {
        StatsAction::Show { file, today, json } => {
            let today = resolve_today(today)?;
            let snapshots = load_snapshots(&file)?;
            tracing::debug!(habits = snapshots.len(), %today, "computing stats");
            let stats = engine.compute_all(&snapshots, today);

            if json || config.output.format == OutputFormat::Json {
                print_json(&stats, config.output.pretty)?;
            } else {
                println!("{:<20} {:>8} {:>8} {:>6}", "HABIT", "CURRENT", "LONGEST", "RATE");
                for s in &stats {
                    println!(
                        "{:<20} {:>8} {:>8} {:>5}%",
                        s.habit_id, s.current_streak, s.longest_streak, s.completion_rate
                    );
                }
            }
        }
        StatsAction::Calendar {
            file,
            habit,
            today,
            json,
        } => {
            let today = resolve_today(today)?;
            let snapshots = load_snapshots(&file)?;
            let snapshot = match &habit {
                Some(id) => snapshots.iter().find(|s| &s.habit.id == id),
                None => snapshots.first(),
            }
            .ok_or_else(|| match &habit {
                Some(id) => format!("habit not found: {id}"),
                None => "no habits in file".to_string(),
            })?;

            let days = engine.day_statuses(
                &snapshot.logs,
                &snapshot.freezes,
                snapshot.habit.start_date,
                today,
            );

            if json || config.output.format == OutputFormat::Json {
                let days: Vec<CalendarDay> = days
                    .into_iter()
                    .map(|(date, status)| CalendarDay { date, status })
                    .collect();
                print_json(&days, config.output.pretty)?;
            } else {
                println!("{} ({})", snapshot.habit.id, snapshot.habit.name);
                for (date, status) in days {
                    println!("{date}  {}  {}", status.glyph(), status.as_str());
                }
            }
        }
    }
    Ok(())
}
