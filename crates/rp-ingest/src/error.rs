//! Ingest error types for rp-ingest.

use std::path::PathBuf;

/// Errors raised while reading user-supplied inputs.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// Input path does not exist.
    #[error("input not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Filesystem error while reading or extracting.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is larger than the configured upload ceiling.
    #[error("file too large: {} is {size_mb} MB, the maximum is {limit_mb} MB", path.display())]
    TooLarge {
        path: PathBuf,
        size_mb: u64,
        limit_mb: u64,
    },

    /// Roster lacks one or more required column headers.
    #[error("roster must have the columns {}; missing: {}", required.join(", "), missing.join(", "))]
    MissingColumns {
        required: Vec<String>,
        missing: Vec<String>,
    },

    /// Roster content could not be parsed.
    #[error("failed to read roster {}: {reason}", path.display())]
    RosterParse { path: PathBuf, reason: String },

    /// Roster extension is not one we can read.
    #[error("unsupported roster format '{extension}': export the student sheet as .csv or .json")]
    UnsupportedRoster { extension: String },

    /// Bundle is neither a directory nor a supported archive.
    #[error("unsupported bundle {}: expected a directory, .zip, .tar.gz or .tgz", path.display())]
    UnsupportedBundle { path: PathBuf },

    /// Archive could not be read or contains unsafe entries.
    #[error("invalid archive {}: {reason}", path.display())]
    CorruptArchive { path: PathBuf, reason: String },

    /// Directory walk failed.
    #[error("failed to list bundle files: {0}")]
    Walk(String),
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }

    pub(crate) fn corrupt(path: impl Into<PathBuf>) -> impl FnOnce(String) -> Self {
        let path = path.into();
        move |reason| Self::CorruptArchive { path, reason }
    }
}
