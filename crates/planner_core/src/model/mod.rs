//! Per-day planner data model.
//!
//! # Responsibility
//! - Define the persisted record shape shared by storage, state and views.
//! - Keep the JSON wire layout compatible with previously stored day blobs.
//!
//! # Invariants
//! - Every activity is identified by a stable `ActivityId`.
//! - `water` stays within `0..=WATER_GOAL`.

pub mod record;
