//! Headless flocking runner
//!
//! Loads a TOML parameter file, runs the model for the configured
//! number of ticks and optionally writes every tick's snapshot to a
//! JSON file for an external renderer or analysis script to consume.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;

use flockers::runner::RunParams;
use flockers::{FlockModel, Result};

/// Headless flocking runner - deterministic boid simulation runs
#[derive(Parser, Debug)]
#[command(name = "flockers")]
#[command(about = "Run the boid flocking simulation without a display")]
struct Args {
    /// Parameter file ([global] and [model] tables); defaults apply if omitted
    #[arg(long, short = 'p')]
    params: Option<PathBuf>,

    /// Override the number of ticks to run
    #[arg(long)]
    ticks: Option<u64>,

    /// Override the RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Write the per-tick snapshot history to this JSON file
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "flockers=debug"
    } else {
        "flockers=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let mut params = match &args.params {
        Some(path) => RunParams::load(path)?,
        None => RunParams::default(),
    };
    if let Some(seed) = args.seed {
        params.model.seed = Some(seed);
    }
    let max_timestep = args.ticks.unwrap_or(params.global.max_timestep);

    tracing::info!("{}: {} ticks", params.global.description, max_timestep);
    if let Ok(dump) = toml::to_string(&params) {
        for line in dump.lines() {
            tracing::debug!("param| {}", line);
        }
    }

    let mut model = FlockModel::new(params.model.clone())?;
    tracing::info!(seed = model.seed(), "model initialized");

    let collect_history = args.output.is_some();
    let mut history = Vec::new();
    if collect_history {
        history.push(model.snapshot());
    }

    let start = Instant::now();
    let progress_every = (max_timestep / 20).max(1);
    for tick in 1..=max_timestep {
        model.step()?;
        if collect_history {
            history.push(model.snapshot());
        }
        if tick % progress_every == 0 {
            tracing::info!("tick {}/{}", tick, max_timestep);
        }
    }

    tracing::info!("elapsed time: {}", format_elapsed(start.elapsed()));

    if let Some(path) = &args.output {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string(&history)?;
        std::fs::write(path, json)?;
        tracing::info!("wrote {} snapshots to {}", history.len(), path.display());
    }

    Ok(())
}

fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs_f64();
    let hours = (total / 3600.0) as u64;
    let minutes = ((total % 3600.0) / 60.0) as u64;
    let seconds = total % 60.0;
    format!("{:02}:{:02}:{:04.1}", hours, minutes, seconds)
}
