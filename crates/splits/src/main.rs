use anyhow::{Context, bail};
use splits::{config::ViewConfig, loader::load_file, render};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let config = ViewConfig::from_env();

    tracing::info!("Loading race data from {}", config.data_path.display());

    let report = load_file(&config.data_path)
        .with_context(|| format!("Failed to load {}", config.data_path.display()))?;

    if !report.warnings.is_empty() {
        tracing::warn!("{} data quality warning(s)", report.warnings.len());
    }

    let stdout = std::io::stdout();
    if !render(&report.data, &config, stdout.lock())? {
        bail!("No athlete to display");
    }

    Ok(())
}
