//! Cross-cutting error types for the checker.
//!
//! Domain-specific errors (`AuditError`, `IngestError`, `ConfigError`) live in
//! their respective crates and converge in `rp-cli` through `anyhow`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A category name did not match any of the four document categories.
    #[error("Unknown document category '{0}' (expected one of: supervisor, reviewer, monitoring-log, work-plan)")]
    UnknownCategory(String),
}
