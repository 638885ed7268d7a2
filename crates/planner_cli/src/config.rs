//! Runtime configuration resolved from flags, environment and platform dirs.

use std::path::PathBuf;

const APP_DIR_NAME: &str = "daily-planner";
const DB_FILE_NAME: &str = "planner.sqlite3";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl PlannerConfig {
    /// Fills unset values from the platform data directory.
    ///
    /// Falls back to the temp directory when the platform exposes no data dir.
    pub fn resolve(
        db_path: Option<PathBuf>,
        log_dir: Option<PathBuf>,
        log_level: Option<String>,
    ) -> Self {
        let app_dir = dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_DIR_NAME);

        Self {
            db_path: db_path.unwrap_or_else(|| app_dir.join(DB_FILE_NAME)),
            log_dir: log_dir.unwrap_or_else(|| app_dir.join(LOG_DIR_NAME)),
            log_level: log_level
                .unwrap_or_else(|| planner_core::default_log_level().to_string()),
        }
    }
}
