//! Planner use-case services.
//!
//! # Responsibility
//! - Own the in-memory record of the active day and its mutation rules.
//! - Stay storage-agnostic; persistence is driven by `app::PlannerSession`.

pub mod planner_state;
