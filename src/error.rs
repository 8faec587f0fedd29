// src/error.rs
//! Error types for the fallible edges of a run.
//!
//! Record- and page-level problems are not errors here: the extractor and the
//! paginator absorb them and log instead. What remains are the failures a
//! caller can actually act on.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fetching one catalogue page failed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, TLS, connection reset, body decode).
    #[error("HTTP error for {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered, but not with a success status.
    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    /// Used by non-HTTP fetchers (fixtures, fakes).
    #[error("{0}")]
    Other(String),
}

/// Writing the CSV export failed.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reading a previously exported CSV failed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
