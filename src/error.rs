// src/error.rs
use std::io;

/// Everything the library can fail with.
/// Parse ambiguity is not in here: unreadable tables are skipped, not reported.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid request header {0:?}")]
    Header(String),

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error: {status} {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("CSV must contain the columns {}", .0.join(", "))]
    MissingColumns(Vec<&'static str>),

    #[error("row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },

    #[error("unknown window {0:?} (expected 60 or 90)")]
    UnknownWindow(String),
}

pub type Result<T> = std::result::Result<T, Error>;
