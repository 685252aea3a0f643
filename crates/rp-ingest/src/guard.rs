//! Upload size guard.

use std::path::Path;

use rp_config::LimitsConfig;

use crate::error::IngestError;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Reject a file larger than the configured ceiling, returning its size.
///
/// Directories are not uploads and are not measured.
pub fn ensure_within_limit(path: &Path, limits: &LimitsConfig) -> Result<u64, IngestError> {
    if !path.exists() {
        return Err(IngestError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let metadata = std::fs::metadata(path).map_err(IngestError::io(path))?;
    if metadata.is_dir() {
        return Ok(0);
    }

    let size = metadata.len();
    if size > limits.max_upload_bytes() {
        return Err(IngestError::TooLarge {
            path: path.to_path_buf(),
            size_mb: size.div_ceil(BYTES_PER_MB),
            limit_mb: limits.max_upload_mb,
        });
    }

    tracing::debug!(path = %path.display(), size, "input within size limit");
    Ok(size)
}
