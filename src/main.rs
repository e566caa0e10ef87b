use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "habitloop")]
#[command(about = "Gamified habit tracking - XP levels, habit capacity, and streak reconciliation")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to .habitloop/config.toml in the working directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the level descriptor for an XP total
    Level {
        /// Cumulative XP
        #[arg(long)]
        xp: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether another habit can be tracked at an XP total
    Capacity {
        /// Cumulative XP
        #[arg(long)]
        xp: i64,

        /// Habits currently tracked
        #[arg(long)]
        tracked: u32,
    },

    /// Compute the streak for a completion history
    Streak {
        /// Tracking start date (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// Recurrence period: daily, weekly, or monthly
        #[arg(long, default_value = "daily")]
        period: String,

        /// JSON file with the completion list ([{"date": "..."}])
        #[arg(long)]
        actions: PathBuf,

        /// Evaluation instant (RFC 3339), defaults to the current time
        #[arg(long)]
        now: Option<String>,

        /// Client clock offset in milliseconds
        #[arg(long, default_value_t = 0)]
        offset: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config = match &cli.config {
        Some(path) => habitloop::config::Config::from_file(path)?,
        None => habitloop::config::Config::from_dir(&PathBuf::from("."))?,
    };

    match cli.command {
        Commands::Level { xp, json } => cli::level::level_command(xp, json),
        Commands::Capacity { xp, tracked } => cli::capacity::capacity_command(xp, tracked),
        Commands::Streak {
            start,
            period,
            actions,
            now,
            offset,
        } => cli::streak::streak_command(&config, &start, &period, &actions, now.as_deref(), offset),
    }
}
