//! # Voxel Terrain Entry Point
//!
//! Headless driver for the terrain engine. Parses the command line and hands
//! off to the library's `run()` function.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release -- --frames 600 --seed 42
//! ```

use std::path::PathBuf;

use clap::Parser;

/// Walks a simulated viewer through generated terrain and logs what the
/// engine does.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u32,

    /// Terrain seed, overriding the configuration
    #[arg(short, long)]
    seed: Option<u64>,

    /// Fixed frame time in milliseconds; wall-clock time is used when absent
    #[arg(long)]
    dt_ms: Option<f32>,
}

fn main() -> Result<(), voxel_terrain::ConfigError> {
    let args = Args::parse();
    voxel_terrain::run(voxel_terrain::RunOptions {
        config_path: args.config,
        seed: args.seed,
        frames: args.frames,
        dt_seconds: args.dt_ms.map(|ms| ms / 1000.0),
    })
}
