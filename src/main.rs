mod batch;
mod config;
mod error;
mod fetch;
mod models;
mod utils;

use std::error::Error;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::batch::{run_to_file, BatchSettings};
use crate::config::Config;
use crate::error::ExportError;
use crate::fetch::PokeApiClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cfg = Config::parse();
    cfg.validate()?;

    tracing::info!(
        "Fetching Pokémon #{}..=#{} from {}",
        cfg.start,
        cfg.end,
        cfg.api_base
    );
    let client = PokeApiClient::from_config(&cfg).map_err(ExportError::Client)?;
    let settings = BatchSettings::from_config(&cfg);

    // Individual fetch failures never change the exit status.
    let summary = run_to_file(&client, &settings, &cfg.output_path(), cfg.verify).await?;
    tracing::debug!(
        "{} written, {} skipped, output at {}",
        summary.written,
        summary.failed,
        summary.path.display()
    );
    Ok(())
}
