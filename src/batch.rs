//! Sequential fetch loop and export.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::Config;
use crate::error::ExportError;
use crate::fetch::RecordSource;
use crate::models::PokemonRecord;
use crate::utils::{load_records, write_records};

#[derive(Debug, Clone)]
pub struct BatchSettings {
    pub start: u32,
    pub end: u32,
    /// Sleep for `pause` after every id divisible by this. Zero never pauses.
    pub pause_every: u32,
    pub pause: Duration,
}

impl BatchSettings {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            start: cfg.start,
            end: cfg.end,
            pause_every: cfg.pause_every,
            pause: cfg.pause(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFetch {
    pub id: u32,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Successful records in ascending id order.
    pub records: Vec<PokemonRecord>,
    pub failures: Vec<FailedFetch>,
}

#[derive(Debug)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub written: usize,
    pub failed: usize,
}

/// Fetch every id in `start..=end`, one at a time.
///
/// Failures are logged and skipped; this never returns an error.
pub async fn run<S: RecordSource>(source: &S, settings: &BatchSettings) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for id in settings.start..=settings.end {
        match source.fetch(id).await {
            Ok(record) => {
                tracing::info!("Fetched #{}: {}", id, record.name);
                outcome.records.push(record);
            }
            Err(e) => {
                tracing::error!("ERROR on #{}: {}", id, e);
                outcome.failures.push(FailedFetch {
                    id,
                    message: e.to_string(),
                });
            }
        }
        if settings.pause_every != 0 && id % settings.pause_every == 0 {
            tokio::time::sleep(settings.pause).await;
        }
    }
    outcome
}

/// Run the batch and write the collected records to `path`.
///
/// With `verify` set the file is read back and its length checked against the
/// number of records written.
pub async fn run_to_file<S: RecordSource>(
    source: &S,
    settings: &BatchSettings,
    path: &Path,
    verify: bool,
) -> Result<ExportSummary, ExportError> {
    let outcome = run(source, settings).await;
    write_records(path, &outcome.records)?;

    let written = outcome.records.len();
    if verify {
        let found = load_records(path)?.len();
        if found != written {
            return Err(ExportError::Verify {
                path: path.to_path_buf(),
                expected: written,
                found,
            });
        }
    }

    if outcome.failures.is_empty() {
        tracing::info!("Done! Wrote {} Pokemon to {}", written, path.display());
    } else {
        tracing::info!(
            "Done! Wrote {} Pokemon to {} ({} skipped)",
            written,
            path.display(),
            outcome.failures.len()
        );
    }

    Ok(ExportSummary {
        path: path.to_path_buf(),
        written,
        failed: outcome.failures.len(),
    })
}
