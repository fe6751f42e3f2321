//! Error types for directory export conversion.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that end an export run.
///
/// Malformed records are not errors: missing attributes are written as the
/// null marker.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The input export could not be read. No output is written.
    #[error("Error while parsing the user file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The CSV could not be written. The converted rows are discarded.
    #[error("Exporting {} failed: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Unknown `--match-mode` value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown match mode '{0}' (expected 'substring' or 'anchored')")]
pub struct ParseMatchPolicyError(pub String);
