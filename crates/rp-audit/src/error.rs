//! Audit error types for rp-audit.

/// Errors that abort a whole audit run.
///
/// Problems with individual files are never errors; they become remarks.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    /// A naming template did not compile into a valid regex.
    #[error("invalid naming template '{template}': {source}")]
    Template {
        template: String,
        #[source]
        source: regex::Error,
    },

    /// The student-code matcher could not be built.
    #[error("failed to index student codes: {0}")]
    Index(#[from] aho_corasick::BuildError),
}
