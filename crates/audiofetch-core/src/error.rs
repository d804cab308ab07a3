//! Per-task fetch errors and batch validation errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse failure class of a task. Every class is reported the same way;
/// the kind exists so callers and tests can tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Http,
    Storage,
}

/// Error for a single download task (curl failure, HTTP error, or disk failure).
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (connection refused, DNS, timeout, TLS).
    #[error("{0}")]
    Transport(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Directory creation, write or rename failed.
    #[error("{}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Transport(_) => ErrorKind::Transport,
            FetchError::Http(_) => ErrorKind::Http,
            FetchError::Storage { .. } => ErrorKind::Storage,
        }
    }

    pub(crate) fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FetchError::Storage {
            path: path.into(),
            source,
        }
    }
}

/// Rejected batch definition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchError {
    #[error("duplicate filename in batch: {0}")]
    DuplicateFilename(String),
    #[error("filename must be a relative path inside the output directory: {0:?}")]
    InvalidFilename(String),
    #[error("invalid URL for {filename}: {reason}")]
    InvalidUrl { filename: String, reason: String },
    #[error("unsupported URL scheme {scheme:?} for {filename} (only http and https)")]
    UnsupportedScheme { filename: String, scheme: String },
}
