//! `roost` — interactive shell for the Roost social-network record manager.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens an
//! in-process SQLite store, and drops into a single-letter menu loop.
//! Operation outcomes are appended to a dated log file; the terminal is
//! reserved for prompts and results.

mod menu;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use chrono::Local;
use clap::Parser;
use roost_service::{StatusCollection, UserCollection};
use roost_store_sqlite::SqliteStore;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "roost", about = "Social-network record manager")]
struct Args {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// SQLite database path (overrides the config file).
  #[arg(long)]
  database: Option<PathBuf>,

  /// Directory for dated log files (overrides the config file).
  #[arg(long)]
  log_dir: Option<PathBuf>,
}

// ─── Settings ─────────────────────────────────────────────────────────────────

/// Shape of the TOML config file, layered under `ROOST_*` env vars.
#[derive(Debug, Deserialize)]
struct Settings {
  #[serde(default = "default_database")]
  database: PathBuf,
  #[serde(default = "default_log_dir")]
  log_dir:  PathBuf,
}

fn default_database() -> PathBuf { PathBuf::from("roost.db") }

fn default_log_dir() -> PathBuf { PathBuf::from(".") }

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let args = Args::parse();

  // Load configuration: file, then environment, then CLI flags win.
  let settings: Settings = config::Config::builder()
    .add_source(config::File::from(args.config).required(false))
    .add_source(config::Environment::with_prefix("ROOST"))
    .build()
    .context("failed to read config")?
    .try_deserialize()
    .context("failed to deserialise settings")?;

  let database = args.database.unwrap_or(settings.database);
  let log_dir = args.log_dir.unwrap_or(settings.log_dir);

  init_logging(&log_dir)?;
  tracing::info!("session launched");

  let store = SqliteStore::open(&database)
    .await
    .with_context(|| format!("failed to open store at {database:?}"))?;
  let store = Arc::new(store);

  let users = UserCollection::new(store.clone());
  let statuses = StatusCollection::new(store);

  menu::run(&users, &statuses).await
}

/// Install the global subscriber, appending to `log_DD-MM-YYYY.log` in
/// `log_dir`. Installed exactly once here; nothing below the binary touches
/// logger state.
fn init_logging(log_dir: &std::path::Path) -> anyhow::Result<()> {
  let log_path = log_dir.join(format!("log_{}.log", Local::now().format("%d-%m-%Y")));
  let file = std::fs::OpenOptions::new()
    .create(true)
    .append(true)
    .open(&log_path)
    .with_context(|| format!("failed to open log file {log_path:?}"))?;

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_ansi(false)
    .with_writer(Arc::new(file))
    .init();

  Ok(())
}
