//! Seed the configured game version into a snapshot file.
//!
//! Usage: `cargo run --example seed_world -- [settings dir]`
//!
//! Reads `seed.ron`, `seed.toml` or `seed.json` from the directory (defaults
//! apply when none exists) and writes the snapshot named in `output`.

use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let settings = worldseed_data::load_settings(&dir)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();

    let receipt = worldseed_season6::seed_with_settings(&settings)?;
    println!(
        "seeded '{}' ({} entities) to {}",
        receipt.version_key,
        receipt.counts.total(),
        receipt.location
    );
    Ok(())
}
