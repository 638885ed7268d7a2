//! Core domain logic for the daily planner.
//! This crate is the single source of truth for planner invariants.

pub mod app;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use app::{EventOutcome, PlannerDay, PlannerEvent, PlannerScreen, PlannerSession, SessionError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::record::{
    clamp_water, Activity, ActivityId, MealSlot, MealSlotParseError, Meals, PlannerRecord,
    WATER_GOAL,
};
pub use repo::kv_repo::{KvRepository, RepoError, RepoResult, SqliteKvRepository};
pub use repo::planner_store::{PlannerStore, StorageKey, STORAGE_KEY_PREFIX};
pub use service::planner_state::PlannerState;
pub use view::meals::{MealField, MealPlannerView};
pub use view::schedule::{format_time, ScheduleRow, ScheduleView, EMPTY_SCHEDULE_MESSAGE};
pub use view::water::{next_water_count, WaterCell, WaterCellError, WaterTrackerView};
