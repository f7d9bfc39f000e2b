//! Error types for the autodemo library
//!
//! Two kinds of failure matter to a run: an empty target list, which ends the
//! run, and an invalid target, which is reported and skipped. Everything else
//! (broken output streams, an unknown working directory) is plumbing.

use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum AutodemoError {
    /// Nothing left to classify after normalization
    #[error("No targets provided.")]
    NoTargets,

    /// Target is neither a file, a directory nor a symbolic link
    #[error("\t{target} is not a valid file or directory.")]
    InvalidTarget { target: String },

    /// I/O related errors (writing status lines, querying the process)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The program location or working directory could not be resolved
    #[error("Cannot resolve provenance: {reason}")]
    Provenance { reason: String },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AutodemoError>;

impl AutodemoError {
    /// Create a new invalid target error
    pub fn invalid_target(target: impl Into<String>) -> Self {
        Self::InvalidTarget {
            target: target.into(),
        }
    }

    /// Create a new provenance error
    pub fn provenance(reason: impl Into<String>) -> Self {
        Self::Provenance {
            reason: reason.into(),
        }
    }
}
