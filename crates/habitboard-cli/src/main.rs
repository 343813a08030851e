use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "habitboard", version, about = "Habitboard CLI")]
struct Cli {
    /// Instance store snapshot (JSON); overrides snapshot.path in the config
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Status of one habit on one day
    Status(commands::status::StatusArgs),
    /// Daily summary across all habits
    Today(commands::today::TodayArgs),
    /// Current streak of fully completed days
    Streak(commands::streak::StreakArgs),
    /// Year-long calendar grid for one habit
    Grid(commands::grid::GridArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let snapshot = cli.snapshot;
    let result = match cli.command {
        Commands::Status(args) => commands::status::run(snapshot, args),
        Commands::Today(args) => commands::today::run(snapshot, args),
        Commands::Streak(args) => commands::streak::run(snapshot, args),
        Commands::Grid(args) => commands::grid::run(snapshot, args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
