//! Schedule view: sorted activity rows or an empty-state placeholder.

use crate::model::record::{ActivityId, PlannerRecord};
use std::fmt::{Display, Formatter};

/// Placeholder shown when the day has no activities.
pub const EMPTY_SCHEDULE_MESSAGE: &str =
    "Your schedule is empty. Add an activity to get started!";

/// One rendered activity row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    /// 1-based position in the sorted list.
    pub position: usize,
    pub id: ActivityId,
    /// Raw `HH:MM` value.
    pub time: String,
    /// 12-hour label, e.g. `8:30 AM`.
    pub time_label: String,
    pub name: String,
    pub completed: bool,
}

/// Rendered schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleView {
    Empty,
    Rows(Vec<ScheduleRow>),
}

impl ScheduleView {
    /// Sorts activities by time (stable) and builds one row per activity.
    pub fn render(record: &PlannerRecord) -> Self {
        if record.schedule.is_empty() {
            return Self::Empty;
        }

        let rows = record
            .sorted_schedule()
            .into_iter()
            .enumerate()
            .map(|(index, activity)| ScheduleRow {
                position: index + 1,
                id: activity.id,
                time: activity.time.clone(),
                time_label: format_time(&activity.time),
                name: activity.name.clone(),
                completed: activity.completed,
            })
            .collect();
        Self::Rows(rows)
    }

    pub fn rows(&self) -> &[ScheduleRow] {
        match self {
            Self::Empty => &[],
            Self::Rows(rows) => rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Resolves a 1-based display position to the activity id shown there.
    pub fn id_at(&self, position: usize) -> Option<ActivityId> {
        self.rows()
            .iter()
            .find(|row| row.position == position)
            .map(|row| row.id)
    }
}

impl Display for ScheduleView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "{EMPTY_SCHEDULE_MESSAGE}"),
            Self::Rows(rows) => {
                for (index, row) in rows.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    let mark = if row.completed { 'x' } else { ' ' };
                    write!(
                        f,
                        "{:>2}. [{mark}] {:>8}  {}",
                        row.position, row.time_label, row.name
                    )?;
                }
                Ok(())
            }
        }
    }
}

/// Formats a 24-hour `HH:MM` value as a 12-hour label.
///
/// Hour 0 becomes 12 AM, hours 13-23 become 1-11 PM; minutes are kept
/// verbatim. Values not shaped like `HH:MM` are returned unchanged.
pub fn format_time(time: &str) -> String {
    let Some((hours, minutes)) = time.split_once(':') else {
        return time.to_string();
    };
    let Ok(hour) = hours.trim().parse::<u32>() else {
        return time.to_string();
    };
    if hour > 23 {
        return time.to_string();
    }

    let period = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour % 12 {
        0 => 12,
        other => other,
    };
    format!("{display_hour}:{minutes} {period}")
}
