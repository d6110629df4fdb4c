//! Error kinds for catalogue-driven extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while restoring catalogue entries. Every kind is fatal:
/// the run stops at the first occurrence and the process exits non-zero,
/// with no partial-success summary.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Configuration file missing, unparsable, or failing validation.
    #[error("configuration {}: {reason}", path.display())]
    Configuration { path: PathBuf, reason: String },

    /// Catalogue file unreadable or not well-formed XML.
    #[error("catalogue {}: {reason}", path.display())]
    CatalogueParse { path: PathBuf, reason: String },

    /// Archive path does not fit the fixed dataset schema.
    #[error("malformed archive path {path:?}: {reason}")]
    MalformedPath { path: String, reason: String },

    /// The external retrieval command could not run or exited non-zero.
    /// Keeps the command line and its combined stdout/stderr for diagnosis.
    #[error("retrieval command failed: {command}\n{output}")]
    RetrievalCommand { command: String, output: String },

    /// Destination directory could not be created.
    #[error("could not create {}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
