//! `pmo` command-line entry point.
//!
//! # Responsibility
//! - Drive the SQLite state store and print dashboard views.
//! - Keep error reporting at the binary edge.

mod cli;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, OutputFormat};
use log::info;
use pmo_core::db::migrations::current_version;
use pmo_core::db::{open_db, Connection};
use pmo_core::{AppState, CalendarWindow, DashboardService, SqliteStateRepository};
use serde::Serialize;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    info!(
        "event=cli_start module=cli status=ok version={}",
        pmo_core::core_version()
    );

    match cli.command {
        Command::Migrate { db } => {
            let conn = open(&db)?;
            println!("schema version {}", current_version(&conn)?);
        }
        Command::Import { db, snapshot } => {
            let json = std::fs::read_to_string(&snapshot)
                .with_context(|| format!("failed to read snapshot `{}`", snapshot.display()))?;
            let state = AppState::from_json_str(&json)
                .with_context(|| format!("invalid snapshot `{}`", snapshot.display()))?;
            let conn = open(&db)?;
            DashboardService::new(SqliteStateRepository::new(&conn)).import_snapshot(&state)?;
            println!(
                "imported {} resources, {} projects, {} risks",
                state.resources.len(),
                state.projects.len(),
                state.risks.len()
            );
        }
        Command::Loads { db, format } => {
            let conn = open(&db)?;
            let view =
                DashboardService::new(SqliteStateRepository::new(&conn)).resource_load_view()?;
            match format {
                OutputFormat::Text => {
                    print!("{}", render::render_loads(&view.resources, &view.summaries));
                }
                OutputFormat::Json => print_json(&view.summaries)?,
            }
        }
        Command::Risks { db, format } => {
            let conn = open(&db)?;
            let matrix = DashboardService::new(SqliteStateRepository::new(&conn)).risk_matrix()?;
            match format {
                OutputFormat::Text => print!("{}", render::render_risk_matrix(&matrix)),
                OutputFormat::Json => print_json(&matrix)?,
            }
        }
        Command::Calendar {
            db,
            from,
            to,
            format,
        } => {
            let conn = open(&db)?;
            let events = DashboardService::new(SqliteStateRepository::new(&conn))
                .calendar(CalendarWindow::new(from, to))?;
            match format {
                OutputFormat::Text => print!("{}", render::render_calendar(&events)),
                OutputFormat::Json => print_json(&events)?,
            }
        }
    }

    Ok(())
}

fn init_logging(cli: &Cli) -> Result<()> {
    let Some(log_dir) = &cli.log_dir else {
        return Ok(());
    };
    let level = cli
        .log_level
        .as_deref()
        .unwrap_or_else(|| pmo_core::default_log_level());
    let log_dir = log_dir
        .to_str()
        .context("log directory must be valid UTF-8")?;
    pmo_core::init_logging(level, log_dir).map_err(anyhow::Error::msg)
}

fn open(db: &Path) -> Result<Connection> {
    open_db(db).with_context(|| format!("failed to open database `{}`", db.display()))
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
