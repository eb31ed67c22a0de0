//! Find the center of a cached uniform point cloud.
//!
//! Run with: cargo run --release --bin cloud_center
//!
//! Usage:
//!   cloud_center                      10M points, 12 rounds, cache in TestCloud.bin
//!   cloud_center -n 1m -i 8           1M points, 8 rounds
//!   cloud_center --sequential         Single-threaded evaluation
//!
//! Set RUST_LOG=fastCenter=debug to trace every refinement round.

use anyhow::{Context, Result};
use clap::Parser;
use fastCenter::prelude::*;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn parse_count(s: &str) -> Result<usize, String> {
    let s = s.to_lowercase();
    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('m') {
        (n, 1_000_000)
    } else if let Some(n) = s.strip_suffix('k') {
        (n, 1_000)
    } else {
        (s.as_str(), 1)
    };

    let n = num_str
        .parse::<f64>()
        .map_err(|e| format!("Invalid number '{}': {}", s, e))?;
    if !n.is_finite() || n <= 0.0 {
        return Err(format!("Point count must be positive, got '{}'", s));
    }

    let count = (n * multiplier as f64) as usize;
    if count == 0 {
        return Err(format!("Point count '{}' rounds down to zero", s));
    }
    Ok(count)
}

#[derive(Parser, Debug)]
#[command(name = "cloud_center")]
#[command(about = "Approximate the distance-sum center of a 3D point cloud")]
struct Args {
    /// Number of points to generate when the cache is missing (e.g. 100k, 10m)
    #[arg(short = 'n', long, value_parser = parse_count, default_value = "10m")]
    points: usize,

    /// Refinement rounds
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Cloud cache file
    #[arg(short, long, default_value = "TestCloud.bin")]
    file: PathBuf,

    /// Generator seed used when the cache is missing
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Upper bound on worker threads
    #[arg(long, default_value_t = MAX_WORKERS)]
    max_workers: usize,

    /// Evaluate on the calling thread only
    #[arg(long)]
    sequential: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fastCenter=info,cloud_center=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let source = CachedCloudSource::new(&args.file, args.points).seed(args.seed);
    let cloud = source
        .points()
        .with_context(|| format!("failed to load cloud from {}", args.file.display()))?;

    let mut processor = Center::new()
        .iterations(args.iterations)
        .max_workers(args.max_workers)
        .parallel(!args.sequential)
        .build()
        .context("failed to configure search")?;

    let start = Instant::now();
    let result = processor.fit(&cloud).context("center search failed")?;
    let elapsed = start.elapsed();

    info!(
        workers = result.workers,
        evaluations = result.evaluations,
        "search complete"
    );
    println!("Elapsed time in milliseconds : {} ms", elapsed.as_millis());
    println!("Cloud center is {}", result.center);
    Ok(())
}
