//! Error types for row source loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading row sources.
///
/// Reserved slug loading never fails; see [`crate::load_reserved_slugs`].
#[derive(Debug, Error)]
pub enum IngestError {
    // === Network Errors ===
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request failed before a response was received (including timeouts).
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status.
    #[error("fetching {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV content.
    #[error("failed to parse CSV {source_name}: {source}")]
    CsvParse {
        source_name: String,
        #[source]
        source: csv::Error,
    },
}

impl IngestError {
    pub(crate) fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
