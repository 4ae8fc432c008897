//! Error types for the export.
//!
//! `FetchError` is recovered per identifier by the batch driver. `ExportError`
//! and `ConfigError` are fatal and end the run.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Failure to turn one identifier into a complete record.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: StatusCode, url: String },

    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("missing stat '{0}'")]
    MissingStat(&'static str),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} holds {found} records, expected {expected}", .path.display())]
    Verify {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("start id must be at least 1")]
    ZeroStart,

    #[error("start id {start} is greater than end id {end}")]
    EmptyRange { start: u32, end: u32 },

    #[error("pause interval must be at least 1")]
    ZeroPauseInterval,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_code_and_url() {
        let err = FetchError::Status {
            status: StatusCode::NOT_FOUND,
            url: "https://pokeapi.co/api/v2/pokemon/9999".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP 404 Not Found from https://pokeapi.co/api/v2/pokemon/9999"
        );
    }

    #[test]
    fn missing_stat_message() {
        assert_eq!(
            FetchError::MissingStat("speed").to_string(),
            "missing stat 'speed'"
        );
    }
}
