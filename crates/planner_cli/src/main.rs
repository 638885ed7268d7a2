//! Terminal host for the daily planner.
//!
//! # Responsibility
//! - Resolve configuration and start logging.
//! - Open today's planner, apply one command, print the re-rendered view.

mod commands;
mod config;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use commands::Command;
use config::PlannerConfig;
use planner_core::db::open_db;
use log::info;
use planner_core::{init_logging, PlannerDay, PlannerSession, PlannerStore, SqliteKvRepository};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "daily-planner", version)]
#[command(about = "Plan today's schedule, water intake and meals")]
struct Cli {
    /// Planner database file
    #[arg(long, global = true, env = "DAILY_PLANNER_DB")]
    db: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true, env = "DAILY_PLANNER_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rotating log files
    #[arg(long, global = true, env = "DAILY_PLANNER_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Defaults to `show`
    #[command(subcommand)]
    command: Option<Command>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = PlannerConfig::resolve(cli.db, cli.log_dir, cli.log_level);

    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("warning: file logging disabled: {err}");
    }

    let conn = open_db(&config.db_path).with_context(|| {
        format!(
            "failed to open planner database `{}`",
            config.db_path.display()
        )
    })?;
    let store = PlannerStore::new(SqliteKvRepository::new(&conn));
    let mut session = PlannerSession::open(store, PlannerDay::today());
    info!(
        "event=cli_start module=cli status=ok key={} db={}",
        session.storage_key(),
        config.db_path.display()
    );

    let command = cli.command.unwrap_or(Command::Show { json: false });
    let output = commands::run(&mut session, command)?;
    println!("{output}");
    Ok(())
}
