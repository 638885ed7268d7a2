//! Render models for the planner screen.
//!
//! # Responsibility
//! - Turn a `PlannerRecord` into deterministic, host-agnostic view models.
//! - Provide plain-text `Display` output for terminal hosts.
//!
//! # Invariants
//! - Rendering is a pure function of the record: every render rebuilds the
//!   whole view, and two renders of the same record are equal.

pub mod meals;
pub mod schedule;
pub mod water;
