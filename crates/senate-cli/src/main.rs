//! # senate CLI entry point
//!
//! Parses command-line arguments, loads the roster once and dispatches to
//! the subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use senate_cli::leaders::{run_leaders, LeadersArgs};
use senate_cli::members::{run_members, run_show, MembersArgs, ShowArgs};
use senate_cli::options::{run_options, OptionsArgs};
use senate_cli::seating::{run_seating, SeatingArgs};
use senate_cli::stats::{run_stats, StatsArgs};
use senate_cli::OutputFormat;

/// Senate roster CLI
///
/// Browse the current senate: filter members, inspect profiles and view
/// party, gender, age and tenure statistics, the leadership roster and the
/// seating chart.
#[derive(Parser, Debug)]
#[command(name = "senate", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML source configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List members passing the filter flags, in roster order.
    Members(MembersArgs),

    /// Show one member's profile.
    Show(ShowArgs),

    /// List filter options, optionally narrowed by field and prefix.
    Options(OptionsArgs),

    /// Party breakdown, gender ratio, average age and tenure histogram.
    Stats(StatsArgs),

    /// Leadership roster grouped by party.
    Leaders(LeadersArgs),

    /// Seating chart coordinates.
    Seating(SeatingArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let (roster, sources) = match senate_cli::load(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };
    let format = OutputFormat::from_json_flag(cli.json);

    let result = match &cli.command {
        Commands::Members(args) => run_members(args, &roster, format),
        Commands::Show(args) => run_show(args, &roster, format),
        Commands::Options(args) => run_options(args, &roster, format),
        Commands::Stats(args) => run_stats(args, &roster, format),
        Commands::Leaders(args) => run_leaders(args, &roster, format),
        Commands::Seating(args) => run_seating(args, &roster, sources.seating, format),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
