//! CLI frontend for the Wander text-adventure engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "WANDER_LOG";

#[derive(Parser)]
#[command(
    name = "wander",
    about = "Wander: play small text adventures in the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a world interactively, reading commands from stdin
    Play {
        /// World file in JSON (default: the built-in demo world)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// Validate a world and print a summary
    Check {
        /// World file in JSON (default: the built-in demo world)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },

    /// Print every room and its exits
    Map {
        /// World file in JSON (default: the built-in demo world)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { world } => commands::play::run(world.as_deref()),
        Commands::Check { world } => commands::check::run(world.as_deref()),
        Commands::Map { world } => commands::map::run(world.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
