//! Planner session bootstrap and event dispatch.
//!
//! # Responsibility
//! - Compute the active day: display string and storage key.
//! - Load the day's record and own it for the lifetime of the session.
//! - Apply host input events as handle-then-persist cycles and render the
//!   full screen on demand.
//!
//! # Invariants
//! - Exactly one record is active per session.
//! - Every state change is persisted before `dispatch` returns.
//! - Rejected input (blank fields, unknown ids) changes nothing and is not
//!   persisted.

use crate::model::record::{Activity, ActivityId, MealSlot, PlannerRecord};
use crate::repo::kv_repo::{KvRepository, RepoError};
use crate::repo::planner_store::{PlannerStore, StorageKey};
use crate::service::planner_state::PlannerState;
use crate::view::meals::MealPlannerView;
use crate::view::schedule::ScheduleView;
use crate::view::water::{next_water_count, WaterCellError, WaterTrackerView};
use chrono::{Local, NaiveDate};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// The calendar day a session operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerDay {
    date: NaiveDate,
}

impl PlannerDay {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Today in the local time zone; the storage key rolls over at local midnight.
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn storage_key(&self) -> StorageKey {
        StorageKey::for_date(self.date)
    }

    /// Long form, e.g. `Saturday, June 1, 2024`.
    pub fn display_date(&self) -> String {
        self.date.format("%A, %B %-d, %Y").to_string()
    }
}

/// User input accepted by a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannerEvent {
    AddActivity { time: String, name: String },
    SetCompleted { id: ActivityId, completed: bool },
    RemoveActivity { id: ActivityId },
    /// Click on water glass `index` (1-based).
    ClickGlass { index: u8 },
    MealInput { slot: MealSlot, text: String },
}

impl PlannerEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::AddActivity { .. } => "add_activity",
            Self::SetCompleted { .. } => "set_completed",
            Self::RemoveActivity { .. } => "remove_activity",
            Self::ClickGlass { .. } => "click_glass",
            Self::MealInput { .. } => "meal_input",
        }
    }
}

/// What a dispatched event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    ActivityAdded(ActivityId),
    ActivityUpdated(ActivityId),
    ActivityRemoved(Activity),
    WaterChanged(u8),
    MealSaved(MealSlot),
    /// Precondition failed; nothing changed and nothing was persisted.
    Ignored,
}

#[derive(Debug)]
pub enum SessionError {
    /// Persisting the record failed. In-memory state keeps the change.
    Persist(RepoError),
    InvalidGlass(WaterCellError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Persist(err) => write!(f, "failed to save planner: {err}"),
            Self::InvalidGlass(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Persist(err) => Some(err),
            Self::InvalidGlass(err) => Some(err),
        }
    }
}

impl From<RepoError> for SessionError {
    fn from(value: RepoError) -> Self {
        Self::Persist(value)
    }
}

impl From<WaterCellError> for SessionError {
    fn from(value: WaterCellError) -> Self {
        Self::InvalidGlass(value)
    }
}

/// Everything the host displays for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerScreen {
    pub date_display: String,
    pub schedule: ScheduleView,
    pub water: WaterTrackerView,
    pub meals: MealPlannerView,
}

impl Display for PlannerScreen {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.date_display)?;
        writeln!(f)?;
        writeln!(f, "Schedule")?;
        writeln!(f, "{}", self.schedule)?;
        writeln!(f)?;
        writeln!(f, "Water")?;
        writeln!(f, "{}", self.water)?;
        writeln!(f)?;
        writeln!(f, "Meals")?;
        write!(f, "{}", self.meals)
    }
}

/// Loaded planner day bound to its store.
pub struct PlannerSession<R: KvRepository> {
    store: PlannerStore<R>,
    day: PlannerDay,
    key: StorageKey,
    state: PlannerState,
}

impl<R: KvRepository> PlannerSession<R> {
    /// Loads (or defaults) the record for `day`.
    pub fn open(store: PlannerStore<R>, day: PlannerDay) -> Self {
        let key = day.storage_key();
        let state = PlannerState::new(store.load(&key));
        info!("event=session_open module=app status=ok key={key}");
        Self {
            store,
            day,
            key,
            state,
        }
    }

    pub fn day(&self) -> PlannerDay {
        self.day
    }

    pub fn storage_key(&self) -> &StorageKey {
        &self.key
    }

    pub fn state(&self) -> &PlannerState {
        &self.state
    }

    pub fn record(&self) -> &PlannerRecord {
        self.state.record()
    }

    /// Applies one input event and persists the result when state changed.
    ///
    /// Meal input always persists, even when the text is unchanged.
    pub fn dispatch(&mut self, event: PlannerEvent) -> Result<EventOutcome, SessionError> {
        let event_name = event.name();
        let outcome = match event {
            PlannerEvent::AddActivity { time, name } => {
                match self.state.add_activity(&time, &name) {
                    Some(id) => EventOutcome::ActivityAdded(id),
                    None => EventOutcome::Ignored,
                }
            }
            PlannerEvent::SetCompleted { id, completed } => {
                if self.state.set_activity_completed(id, completed) {
                    EventOutcome::ActivityUpdated(id)
                } else {
                    EventOutcome::Ignored
                }
            }
            PlannerEvent::RemoveActivity { id } => match self.state.remove_activity(id) {
                Some(removed) => EventOutcome::ActivityRemoved(removed),
                None => EventOutcome::Ignored,
            },
            PlannerEvent::ClickGlass { index } => {
                let next = next_water_count(self.state.water(), index)?;
                EventOutcome::WaterChanged(self.state.set_water(i64::from(next)))
            }
            PlannerEvent::MealInput { slot, text } => {
                self.state.set_meal(slot, text);
                EventOutcome::MealSaved(slot)
            }
        };

        if outcome == EventOutcome::Ignored {
            debug!(
                "event=planner_event module=app status=skip kind={event_name} key={}",
                self.key
            );
            return Ok(outcome);
        }

        self.store.save(&self.key, self.state.record())?;
        info!(
            "event=planner_event module=app status=ok kind={event_name} key={}",
            self.key
        );
        Ok(outcome)
    }

    /// Renders every view from the current record.
    pub fn render(&self) -> PlannerScreen {
        let record = self.state.record();
        PlannerScreen {
            date_display: self.day.display_date(),
            schedule: ScheduleView::render(record),
            water: WaterTrackerView::render(record),
            meals: MealPlannerView::render(record),
        }
    }
}
