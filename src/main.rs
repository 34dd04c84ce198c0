/* 3rd party libraries */
use anyhow::Context;
use clap::Parser;
use crossbeam_channel as cbc;
use log::info;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::Builder;

/* Custom libraries */
use coordinator::Building;
use driver::{Driver, RandomRequestGenerator};
use shared::{Clock, SimEvent, SystemClock};

/* Modules */
mod config;
mod coordinator;
mod driver;
mod elevator;
mod shared;

#[derive(Debug, Parser)]
#[clap(author, version, about = "Simulates dispatching a fleet of elevators")]
struct Args {
    /// Configuration file
    #[clap(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Overrides the number of floors
    #[clap(long)]
    floors: Option<u8>,

    /// Overrides the number of elevators
    #[clap(long)]
    elevators: Option<u8>,

    /// Seed for the request generator
    #[clap(long)]
    seed: Option<u64>,
}

/* Main */
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    // Load the configuration
    let config = unwrap_or_exit!(config::load_config(&args.config))
        .with_overrides(args.floors, args.elevators, args.seed);
    unwrap_or_exit!(config.validate());

    // Initialize channels
    let (event_tx, event_rx) = cbc::unbounded::<SimEvent>();

    // Start the event logger
    Builder::new()
        .name("event_logger".into())
        .spawn(move || driver::log_events(event_rx))
        .context("failed to spawn event logger")?;

    // Create the building
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
    let building = unwrap_or_exit!(Building::new(
        &config.building,
        &config.elevator,
        clock.clone(),
        event_tx.clone(),
    ));
    info!(
        "Building with {} floors and {} elevators",
        config.building.n_floors, config.building.n_elevators
    );

    // Run the simulation on this thread
    let generator = RandomRequestGenerator::from_config(config.building.n_floors, &config.generator);
    Driver::new(building, generator, clock, event_tx)
        .run()
        .context("failed to start elevator threads")
}
