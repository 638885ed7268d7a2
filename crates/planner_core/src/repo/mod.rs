//! Repository layer: the planner's storage adapter.
//!
//! # Responsibility
//! - `kv_repo`: opaque text blobs addressed by string keys.
//! - `planner_store`: date-keyed load/save of `PlannerRecord` on top of a
//!   key/value repository.
//!
//! # Invariants
//! - Loading never fails; absent or unreadable data yields the default record.
//! - Saving overwrites the prior value for the key and propagates storage
//!   errors to the caller.

pub mod kv_repo;
pub mod planner_store;
