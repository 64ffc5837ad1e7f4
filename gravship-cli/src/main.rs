use clap::{Parser, Subcommand};
use gravship_core::{run_for, Scenario, ScenarioError, Simulation};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod viewer;

#[derive(Parser)]
#[command(name = "gravship")]
#[command(about = "gravship - a ship falling through a field of fixed gravitating bodies", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario without a window and print the final ship state
    Run {
        /// Scenario file (TOML); the built-in scenario when omitted
        #[arg(long)]
        scenario: Option<PathBuf>,

        /// Real time to simulate, in seconds
        #[arg(long, default_value_t = 10.0)]
        duration: f64,

        /// Interval between simulated frames, in seconds
        #[arg(long, default_value_t = 1.0 / 60.0)]
        frame_dt: f64,
    },
    /// Open the interactive viewer
    View {
        /// Scenario file (TOML), reloaded when it changes on disk
        #[arg(long)]
        scenario: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Run {
            scenario,
            duration,
            frame_dt,
        } => run_headless(scenario.as_deref(), duration, frame_dt),
        Commands::View { scenario } => viewer::run_viewer(scenario),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub(crate) fn load_scenario(path: Option<&Path>) -> Result<Scenario, ScenarioError> {
    match path {
        Some(path) => Scenario::load(path),
        None => Ok(Scenario::default()),
    }
}

fn run_headless(
    scenario: Option<&Path>,
    duration: f64,
    frame_dt: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let scenario = load_scenario(scenario)?;
    let mut sim = Simulation::from_scenario(&scenario)?;

    info!(duration, frame_dt, "running headless");
    let summary = run_for(&mut sim, duration, frame_dt)?;

    println!("ticks = {}", summary.ticks);
    println!("elapsed = {}", summary.elapsed);
    println!("remainder = {}", summary.remainder);
    println!("position = {}", summary.position);
    println!("velocity = {}", summary.velocity);

    Ok(())
}
