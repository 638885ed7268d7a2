//! Colored terminal rendering for planner views.
//!
//! Core views carry plain `Display` output; this module layers owo_colors
//! styling on top for interactive use.

use owo_colors::OwoColorize;
use planner_core::{MealPlannerView, PlannerScreen, ScheduleView, WaterTrackerView, WATER_GOAL};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for ScheduleView {
    fn render(&self) -> String {
        if self.is_empty() {
            return self.to_string().dimmed().to_string();
        }

        self.rows()
            .iter()
            .map(|row| {
                let position = format!("{:>2}.", row.position);
                let time = format!("{:>8}", row.time_label);
                if row.completed {
                    format!(
                        "{} {} {}  {}",
                        position.dimmed(),
                        "[x]".green(),
                        time.dimmed(),
                        row.name.strikethrough().dimmed()
                    )
                } else {
                    format!(
                        "{} [ ] {}  {}",
                        position.dimmed(),
                        time.blue(),
                        row.name.bold()
                    )
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Render for WaterTrackerView {
    fn render(&self) -> String {
        let glasses = self
            .cells
            .iter()
            .map(|cell| {
                if cell.filled {
                    "[#]".cyan().to_string()
                } else {
                    "[ ]".dimmed().to_string()
                }
            })
            .collect::<String>();
        let count = format!("{} / {WATER_GOAL} glasses", self.count);
        format!("{glasses}  {}", count.bold())
    }
}

impl Render for MealPlannerView {
    fn render(&self) -> String {
        self.fields
            .iter()
            .map(|field| {
                let label = format!("{:<11}", format!("{}:", field.slot.label()));
                if field.text.is_empty() {
                    format!("{}{}", label.bold(), "-".dimmed())
                } else {
                    format!("{}{}", label.bold(), field.text)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Render for PlannerScreen {
    fn render(&self) -> String {
        [
            self.date_display.bold().underline().to_string(),
            String::new(),
            "Schedule".bold().to_string(),
            self.schedule.render(),
            String::new(),
            "Water".bold().to_string(),
            self.water.render(),
            String::new(),
            "Meals".bold().to_string(),
            self.meals.render(),
        ]
        .join("\n")
    }
}
