//! Error types for excerpts.

use std::path::PathBuf;

/// Errors that can occur while loading a document or lexicon.
///
/// Absent segments and unmatched identifiers are not errors; retrieval
/// reports those as `None`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A lexicon file was readable but not the expected JSON shape.
    #[error("invalid lexicon {path}: {source}")]
    LexiconFormat {
        /// The offending lexicon file.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for excerpts operations.
pub type Result<T> = std::result::Result<T, Error>;
