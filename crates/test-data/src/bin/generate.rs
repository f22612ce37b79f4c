//! Sample data generator - writes a chip-timing data set as JSON.
//!
//! Run with:
//! ```
//! RACE_COURSE=olympic RACE_ATHLETES=20 RACE_SEED=12345 RACE_GAP_PROBABILITY=0.1 \
//!     RACE_OUTPUT=data/sample-chip-data.json cargo run -p test-data --bin generate
//! ```

use std::fs;

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;
use test_data::builders::RaceBuilder;
use test_data::config::GenConfig;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GenConfig::from_env()?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = RaceBuilder::from_config(&config)
        .build_validated(&mut rng)
        .context("Generated data failed validation")?;
    let json = serde_json::to_string_pretty(&report.data)?;

    match &config.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} athletes to {}", report.data.athletes.len(), path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
