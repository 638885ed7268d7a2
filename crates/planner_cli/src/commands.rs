//! Subcommands: each one is a single input event followed by a re-render of
//! the affected view.

use crate::render::Render;
use anyhow::Result;
use chrono::NaiveTime;
use clap::Subcommand;
use log::info;
use owo_colors::OwoColorize;
use planner_core::{
    ActivityId, EventOutcome, KvRepository, MealSlot, PlannerEvent, PlannerSession, WATER_GOAL,
};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show today's schedule, water intake and meals
    Show {
        /// Print the stored record as JSON instead
        #[arg(long)]
        json: bool,
    },
    /// Add an activity
    Add {
        /// Start time, 24-hour HH:MM
        #[arg(value_parser = parse_time_input)]
        time: String,
        /// Activity name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Mark an activity as completed
    Done {
        /// Row number from `show`, or activity id
        activity: ActivityRef,
    },
    /// Mark an activity as not completed
    Undo {
        /// Row number from `show`, or activity id
        activity: ActivityRef,
    },
    /// Delete an activity
    Delete {
        /// Row number from `show`, or activity id
        activity: ActivityRef,
    },
    /// Click a water glass; clicking the last filled glass unfills it
    Water {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=i64::from(WATER_GOAL)))]
        glass: u8,
    },
    /// Set the plan for a meal; omit the text to clear it
    Meal {
        /// breakfast, lunch or dinner
        slot: MealSlot,
        #[arg(allow_hyphen_values = true)]
        text: Vec<String>,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Show { .. } => "show",
            Self::Add { .. } => "add",
            Self::Done { .. } => "done",
            Self::Undo { .. } => "undo",
            Self::Delete { .. } => "delete",
            Self::Water { .. } => "water",
            Self::Meal { .. } => "meal",
        }
    }
}

/// Reference to a schedule entry as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityRef {
    /// 1-based row of the sorted schedule.
    Row(usize),
    Id(ActivityId),
}

impl FromStr for ActivityRef {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if let Ok(row) = value.parse::<usize>() {
            if row == 0 {
                return Err("rows start at 1".to_string());
            }
            return Ok(Self::Row(row));
        }
        ActivityId::parse_str(value)
            .map(Self::Id)
            .map_err(|_| format!("`{value}` is neither a row number nor an activity id"))
    }
}

/// Accepts `H:MM` or `HH:MM` and normalizes to zero-padded `HH:MM`.
pub fn parse_time_input(value: &str) -> Result<String, String> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map(|time| time.format("%H:%M").to_string())
        .map_err(|_| format!("`{value}` is not a 24-hour HH:MM time"))
}

/// Dispatches `command` against the session and returns the text to print.
pub fn run<R: KvRepository>(session: &mut PlannerSession<R>, command: Command) -> Result<String> {
    info!("event=cli_command module=cli status=start command={}", command.name());

    match command {
        Command::Show { json } => {
            if json {
                Ok(serde_json::to_string_pretty(session.record())?)
            } else {
                Ok(session.render().render())
            }
        }
        Command::Add { time, name } => {
            let outcome = session.dispatch(PlannerEvent::AddActivity {
                time,
                name: name.join(" "),
            })?;
            Ok(schedule_output(session, &outcome))
        }
        Command::Done { activity } => set_completed(session, activity, true),
        Command::Undo { activity } => set_completed(session, activity, false),
        Command::Delete { activity } => {
            let outcome = match resolve(session, activity) {
                Some(id) => session.dispatch(PlannerEvent::RemoveActivity { id })?,
                None => EventOutcome::Ignored,
            };
            Ok(schedule_output(session, &outcome))
        }
        Command::Water { glass } => {
            session.dispatch(PlannerEvent::ClickGlass { index: glass })?;
            Ok(session.render().water.render())
        }
        Command::Meal { slot, text } => {
            session.dispatch(PlannerEvent::MealInput {
                slot,
                text: text.join(" "),
            })?;
            Ok(session.render().meals.render())
        }
    }
}

fn set_completed<R: KvRepository>(
    session: &mut PlannerSession<R>,
    activity: ActivityRef,
    completed: bool,
) -> Result<String> {
    let outcome = match resolve(session, activity) {
        Some(id) => session.dispatch(PlannerEvent::SetCompleted { id, completed })?,
        None => EventOutcome::Ignored,
    };
    Ok(schedule_output(session, &outcome))
}

fn resolve<R: KvRepository>(session: &PlannerSession<R>, activity: ActivityRef) -> Option<ActivityId> {
    match activity {
        ActivityRef::Row(row) => session.render().schedule.id_at(row),
        ActivityRef::Id(id) => Some(id),
    }
}

fn schedule_output<R: KvRepository>(session: &PlannerSession<R>, outcome: &EventOutcome) -> String {
    let schedule = session.render().schedule.render();
    match outcome {
        EventOutcome::Ignored => format!("{}\n{schedule}", "Nothing changed.".yellow()),
        EventOutcome::ActivityRemoved(activity) => {
            format!("{} {}\n{schedule}", "Removed".red(), activity.name)
        }
        _ => schedule,
    }
}
