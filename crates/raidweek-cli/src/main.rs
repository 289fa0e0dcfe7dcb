//! `raidweek` CLI — print this week's raid create commands and schedule
//! announcement.
//!
//! ## Usage
//!
//! ```sh
//! # Everything: create commands, then the schedule announcement
//! raidweek
//!
//! # Just the chat-bot create commands
//! raidweek commands
//!
//! # Just the combined schedule announcement
//! raidweek schedule
//!
//! # Rolling resolution (each event independently, "now" nudged one day ahead)
//! raidweek --mode rolling
//!
//! # Pin the clock (handy for previewing a future week)
//! raidweek --now 2024-10-11T17:00:00Z
//!
//! # Replace the built-in roster with a JSON config
//! raidweek --config roster.json
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use raidweek_core::{render_commands, render_schedule, resolve_all, Config, ResolveMode};

#[derive(Parser)]
#[command(
    name = "raidweek",
    version,
    about = "Weekly raid signup and schedule generator"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Resolution strategy for event times
    #[arg(long, value_enum, default_value_t = Mode::Reset, global = true)]
    mode: Mode,

    /// Override "now" with an RFC 3339 instant (e.g. 2024-10-11T17:00:00Z)
    #[arg(long, global = true)]
    now: Option<String>,

    /// JSON config file replacing the built-in roster
    #[arg(long, global = true)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print each raid's chat-bot create command
    Commands,
    /// Print the combined schedule announcement
    Schedule,
    /// Print both, commands first (default)
    All,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Anchor all events to the shared week-reset date
    Reset,
    /// Resolve each event independently from tomorrow
    Rolling,
}

impl From<Mode> for ResolveMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Reset => ResolveMode::Reset,
            Mode::Rolling => ResolveMode::Rolling,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {path}"))?;
            Config::from_json(&text).with_context(|| format!("Invalid config file: {path}"))?
        }
        None => Config::builtin(),
    };

    let now: DateTime<Utc> = match cli.now.as_deref() {
        Some(text) => DateTime::parse_from_rfc3339(text)
            .with_context(|| format!("--now is not a valid RFC 3339 instant: {text}"))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    let resolved = resolve_all(&config, cli.mode.into(), now)
        .context("Failed to resolve event times")?;

    match cli.command.unwrap_or(Commands::All) {
        Commands::Commands => {
            print!("{}", render_commands(&config, &resolved)?);
        }
        Commands::Schedule => {
            print!("{}", render_schedule(&config, &resolved)?);
        }
        Commands::All => {
            print!("{}", render_commands(&config, &resolved)?);
            print!("{}", render_schedule(&config, &resolved)?);
        }
    }

    Ok(())
}
