use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context};
use chrono::NaiveDate;
use clap::{ArgAction, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::app::Clock;
use crate::config::Config;
use crate::view::{SortKey, StatusFilter};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "devcatalyst",
    version,
    about = "DevCatalyst member portal: your assigned tasks and progress"
)]
pub struct Cli {
    /// Config file (default: <config dir>/devcatalyst/config.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Treat this date (YYYY-MM-DD) as today when computing due-date urgency
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Initial status filter: all, pending, in-progress, completed
    #[arg(long)]
    pub filter: Option<StatusFilter>,

    /// Initial sort order: due-date, priority, points, status
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Print a single rendered frame to stdout and exit
    #[arg(long)]
    pub snapshot: bool,

    #[arg(long, default_value_t = 110)]
    pub width: u16,

    #[arg(long, default_value_t = 60)]
    pub height: u16,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

/// Effective start-up selections after merging the config file with flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub clock: Clock,
    pub filter: StatusFilter,
    pub sort: SortKey,
}

impl Cli {
    pub fn session_settings(&self, config: &Config) -> anyhow::Result<SessionSettings> {
        let clock = match self.today.or(config.dashboard.today) {
            Some(date) => Clock::Fixed(date),
            None => Clock::System,
        };
        let filter = match self.filter {
            Some(filter) => filter,
            None => config.initial_filter().context("invalid dashboard.filter")?,
        };
        let sort = match self.sort {
            Some(sort) => sort,
            None => config.initial_sort().context("invalid dashboard.sort")?,
        };
        Ok(SessionSettings {
            clock,
            filter,
            sort,
        })
    }
}

/// Install the global subscriber. The interactive dashboard owns the
/// terminal, so without a log file only errors reach stderr by default.
pub fn init_tracing(verbose: u8, log_file: Option<&Path>, interactive: bool) -> anyhow::Result<()> {
    let default_level = match verbose {
        0 if interactive && log_file.is_none() => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(std::io::stderr)
            .try_init(),
    };

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}
