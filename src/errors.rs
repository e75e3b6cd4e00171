//! Error taxonomy for badge generation.
//!
//! Every failure kind is terminal for the run except directory
//! creation, which `save` logs and skips locally.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for badge generation operations.
#[derive(Debug, Error)]
pub enum BadgeError {
    /// A requested metric record is absent from the report's `total`.
    #[error("malformed coverage report: no '{0}' entry under 'total'")]
    MalformedReport(String),
    /// An average was requested with an empty resolved key list.
    #[error("no metric keys given for average")]
    NoKeys,
    /// The coverage report file could not be read.
    #[error("cannot read coverage report {}: {source}", path.display())]
    ReportRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The coverage report file is not valid JSON.
    #[error("coverage report {} is not valid JSON: {source}", path.display())]
    ReportParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The badge service request failed.
    #[error("badge fetch failed: {0}")]
    Transport(String),
    /// A badge file could not be written.
    #[error("cannot write badge file {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, BadgeError>;
