//! CLI frontend for the Chronos inn simulation.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "chronos",
    about = "Chronos: an inn whose evenings run on a delta-queue scheduler",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate an evening of patrons coming and going until closing time
    Evening {
        /// RNG seed for arrival times and stays
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// JSON patron roster (default: the town regulars)
        #[arg(short, long)]
        patrons: Option<PathBuf>,

        /// How many patrons the common room holds
        #[arg(short, long, default_value = "8")]
        capacity: usize,

        /// Patrons already inside when the evening starts
        #[arg(long, default_value = "2")]
        starters: usize,

        /// Hours until closing time
        #[arg(long, default_value = "1")]
        hours: u64,

        /// Show every fired command
        #[arg(short, long)]
        verbose: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Spend an evening at the inn, reading commands from stdin
    Play {
        /// RNG seed for arrival times and stays
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// JSON patron roster (default: the town regulars)
        #[arg(short, long)]
        patrons: Option<PathBuf>,

        /// How many patrons the common room holds
        #[arg(short, long, default_value = "8")]
        capacity: usize,

        /// Hours until closing time
        #[arg(long, default_value = "3")]
        hours: u64,
    },

    /// List the commands available in play
    Verbs,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Evening {
            seed,
            patrons,
            capacity,
            starters,
            hours,
            verbose,
            json,
        } => commands::evening::run(
            commands::evening::EveningArgs {
                seed,
                patrons,
                capacity,
                starters,
                hours,
            },
            verbose,
            json,
        ),
        Commands::Play {
            seed,
            patrons,
            capacity,
            hours,
        } => commands::play::run(seed, patrons.as_deref(), capacity, hours),
        Commands::Verbs => {
            commands::print_verbs();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default: warnings only).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
