use anyhow::{Context, Result};
use clap::Parser;
use forager_core::metrics::init_logging;
use forager_lib::model::clock::SimulationClock;
use forager_lib::model::config::{load_config, AppConfig};
use forager_lib::model::world::World;
use std::path::PathBuf;
use std::time::Duration;

/// How long shutdown waits for the tick task before giving up.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML config file; built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Step this many ticks synchronously, without the clock
    #[arg(short, long, conflicts_with = "seconds")]
    ticks: Option<u64>,

    /// Run the real-time clock for this many seconds (Ctrl+C stops early)
    #[arg(short, long)]
    seconds: Option<f64>,

    /// Override the configured RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Write the final world snapshot here as JSON
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

fn run_headless(mut world: World, ticks: u64) -> Result<World> {
    for _ in 0..ticks {
        world.step()?;
    }
    world.metrics.log_summary();
    Ok(world)
}

async fn run_clocked(world: World, seconds: Option<f64>) -> Result<World> {
    let interval = Duration::from_millis(world.config.world.tick_interval_ms);
    let clock = SimulationClock::start(world, interval);

    match seconds {
        Some(secs) => {
            let limit = Duration::from_secs_f64(secs.max(0.0));
            tokio::select! {
                _ = tokio::time::sleep(limit) => {}
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Ctrl+C received, stopping simulation...");
                }
            }
        }
        None => {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Ctrl+C received, stopping simulation...");
        }
    }

    Ok(clock.into_world(SHUTDOWN_TIMEOUT).await?)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if args.seed.is_some() {
        config.world.seed = args.seed;
    }

    let world = World::new(config)?;
    let world = match args.ticks {
        Some(ticks) => run_headless(world, ticks)?,
        None => run_clocked(world, args.seconds).await?,
    };

    tracing::info!(
        tick = world.tick,
        agents = world.agents.len(),
        living = world.living_agents(),
        food = world.food.len(),
        sources = world.live_sources().count(),
        "Simulation finished"
    );

    if let Some(path) = &args.snapshot {
        let json = serde_json::to_string_pretty(&world.snapshot())?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write snapshot to {}", path.display()))?;
        tracing::info!(path = %path.display(), "Snapshot written");
    }

    Ok(())
}
