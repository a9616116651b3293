//! Stigmergy Sim - headless driver
//!
//! Builds a simulation from defaults or a TOML file, runs it for a fixed
//! number of ticks and prints the final statistics. Rendering is left to
//! whatever consumes the snapshots.

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use serde::Serialize;

use stigmergy_sim::simulation::{FrameRecorder, SimulationStats};
use stigmergy_sim::{Result, Simulation, SimulationConfig, UpdateOrdering};

/// Longest recording the buffered-playback mode keeps
const MAX_RECORDED_FRAMES: usize = 2000;

/// Headless ant colony simulation
#[derive(Parser, Debug)]
#[command(name = "stigmergy-sim")]
#[command(about = "Run the pheromone-trail simulation without a display")]
struct Args {
    /// TOML config file; omitted keys keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of agents (overrides the config)
    #[arg(long)]
    ants: Option<usize>,

    /// Ticks to simulate
    #[arg(long, default_value_t = 1000)]
    ticks: u64,

    /// Random seed for deterministic runs (overrides the config)
    #[arg(long)]
    seed: Option<u64>,

    /// Same-tick deposit visibility: sequential or buffered
    #[arg(long)]
    ordering: Option<UpdateOrdering>,

    /// Capture up to this many frames for playback
    #[arg(long, default_value_t = 0)]
    record: usize,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,

    /// Print the effective config as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct RunResult {
    ordering: UpdateOrdering,
    seed: u64,
    elapsed_ms: u64,
    frames_recorded: usize,
    stats: SimulationStats,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("stigmergy_sim=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;

    if args.dump_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let ordering = config.ordering;
    let seed = config.seed;
    let mut sim = Simulation::new(config)?;

    let capacity = args.record.min(MAX_RECORDED_FRAMES);
    if args.record > MAX_RECORDED_FRAMES {
        tracing::warn!(
            requested = args.record,
            kept = MAX_RECORDED_FRAMES,
            "Recording capped"
        );
    }
    let mut recorder = FrameRecorder::with_capacity(capacity);

    let start = Instant::now();
    for _ in 0..args.ticks {
        sim.step();
        if capacity > 0 {
            recorder.record(&sim);
        }
        if sim.tick % 100 == 0 {
            let stats = sim.stats();
            tracing::info!(
                tick = stats.tick,
                food_remaining = stats.food_remaining,
                carrying = stats.carrying,
                deliveries = stats.deliveries,
                "Progress"
            );
        }
    }
    let elapsed = start.elapsed();

    let result = RunResult {
        ordering,
        seed,
        elapsed_ms: elapsed.as_millis() as u64,
        frames_recorded: recorder.len(),
        stats: sim.stats(),
    };

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("=== STIGMERGY SIM ===");
        println!("{}", result.stats.summary());
        println!(
            "Ordering: {} | Seed: {} | {} ticks in {:?} ({:.1} ticks/sec)",
            result.ordering,
            result.seed,
            args.ticks,
            elapsed,
            args.ticks as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
        );
        if result.frames_recorded > 0 {
            println!("Recorded {} frames for playback", result.frames_recorded);
        }
    }

    Ok(())
}

fn build_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    if let Some(ants) = args.ants {
        config.agents.count = ants;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(ordering) = args.ordering {
        config.ordering = ordering;
    }

    config.validate()?;
    Ok(config)
}
