//! Date-keyed planner record persistence.
//!
//! # Responsibility
//! - Derive storage keys (`plannerData_<YYYY-MM-DD>`) from calendar dates.
//! - Decode stored blobs into `PlannerRecord`, falling back to defaults.
//! - Encode and overwrite records on save.
//!
//! # Invariants
//! - `load` never returns an error.
//! - `save` followed by `load` for the same key yields an equal record.

use crate::model::record::PlannerRecord;
use crate::repo::kv_repo::{KvRepository, RepoResult};
use chrono::NaiveDate;
use log::{error, info, warn};
use std::fmt::{Display, Formatter};

/// Prefix shared by every day key.
pub const STORAGE_KEY_PREFIX: &str = "plannerData_";

/// Storage key of one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    /// Builds `plannerData_<ISO date>` for `date`.
    pub fn for_date(date: NaiveDate) -> Self {
        Self(format!("{STORAGE_KEY_PREFIX}{}", date.format("%Y-%m-%d")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StorageKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Planner persistence facade over a key/value repository.
pub struct PlannerStore<R: KvRepository> {
    repo: R,
}

impl<R: KvRepository> PlannerStore<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads the record stored under `key`.
    ///
    /// Absent keys, undecodable blobs and storage read failures all yield
    /// `PlannerRecord::default()`; the latter two are logged.
    pub fn load(&self, key: &StorageKey) -> PlannerRecord {
        let raw = match self.repo.get(key.as_str()) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("event=planner_load module=storage status=ok key={key} source=default");
                return PlannerRecord::default();
            }
            Err(err) => {
                error!(
                    "event=planner_load module=storage status=error key={key} source=default error={err}"
                );
                return PlannerRecord::default();
            }
        };

        match serde_json::from_str::<PlannerRecord>(&raw) {
            Ok(mut record) => {
                record.normalize();
                info!(
                    "event=planner_load module=storage status=ok key={key} source=stored activities={} water={}",
                    record.schedule.len(),
                    record.water
                );
                record
            }
            Err(err) => {
                warn!(
                    "event=planner_load module=storage status=skip key={key} source=default reason=malformed error={err}"
                );
                PlannerRecord::default()
            }
        }
    }

    /// Serializes `record` and overwrites the value stored under `key`.
    pub fn save(&self, key: &StorageKey, record: &PlannerRecord) -> RepoResult<()> {
        let encoded = serde_json::to_string(record)?;
        match self.repo.put(key.as_str(), &encoded) {
            Ok(()) => {
                info!(
                    "event=planner_save module=storage status=ok key={key} bytes={}",
                    encoded.len()
                );
                Ok(())
            }
            Err(err) => {
                error!("event=planner_save module=storage status=error key={key} error={err}");
                Err(err)
            }
        }
    }
}
