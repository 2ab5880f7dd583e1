//! Error taxonomy for remote filesystem operations.
//!
//! Every operation fails into one of four buckets:
//! - NotFound: the source or target path is absent
//! - AlreadyExists: the destination is present and overwrite was disallowed
//! - Connection: the remote filesystem cannot be reached
//! - Io: any other read/write/list/delete failure

use std::fmt;
use std::io;

/// A failed remote filesystem operation.
#[derive(Debug)]
pub enum FsError {
    /// The named path does not exist.
    NotFound(String),
    /// The named destination exists and overwrite was not requested.
    AlreadyExists(String),
    /// The remote filesystem could not be reached. Fatal at startup.
    Connection(String),
    /// Any other I/O failure, with the operation that produced it.
    Io {
        context: String,
        source: io::Error,
    },
}

impl FsError {
    /// Wrap an I/O error with the operation it came from.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// True for the "path absent" condition, which most callers treat as a
    /// warning rather than a hard failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "path not found: {path}"),
            Self::AlreadyExists(path) => write!(f, "path already exists: {path}"),
            Self::Connection(message) => write!(f, "connection failed: {message}"),
            Self::Io { context, source } => write!(f, "{context}: {source}"),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Classify a raw I/O error against a path into the taxonomy.
///
/// NotFound and AlreadyExists kinds map onto their dedicated variants so
/// callers can match on them; everything else stays an `Io`.
pub fn classify_io_error(path: &str, context: &str, err: io::Error) -> FsError {
    match err.kind() {
        io::ErrorKind::NotFound => FsError::NotFound(path.to_string()),
        io::ErrorKind::AlreadyExists => FsError::AlreadyExists(path.to_string()),
        _ => FsError::io(format!("{context} {path}"), err),
    }
}

/// Result type for remote filesystem operations.
pub type FsResult<T> = std::result::Result<T, FsError>;
