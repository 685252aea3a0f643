//! Submission bundle preparation.
//!
//! A bundle is a directory used as-is, or an archive extracted in full before
//! discovery. Extraction goes into a fresh directory; if anything fails the
//! directory is removed and nothing from it is used.

use std::fs::File;
use std::path::{Component, Path, PathBuf};

use rp_config::{IngestConfig, LimitsConfig};
use tempfile::TempDir;

use crate::error::IngestError;
use crate::guard::ensure_within_limit;

/// What kind of bundle a path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleKind {
    Directory,
    Zip,
    TarGz,
}

impl BundleKind {
    /// Detect the bundle kind from the path's type and extension.
    pub fn detect(path: &Path) -> Result<Self, IngestError> {
        if path.is_dir() {
            return Ok(Self::Directory);
        }

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        if name.ends_with(".zip") {
            Ok(Self::Zip)
        } else if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            Ok(Self::TarGz)
        } else {
            Err(IngestError::UnsupportedBundle {
                path: path.to_path_buf(),
            })
        }
    }
}

/// A bundle ready for discovery.
///
/// Holds the scratch directory of an extracted archive; dropping the bundle
/// removes it.
#[derive(Debug)]
pub struct PreparedBundle {
    root: PathBuf,
    _scratch: Option<TempDir>,
}

impl PreparedBundle {
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Size-check the bundle, then extract it if it is an archive.
pub fn prepare_bundle(
    path: &Path,
    ingest: &IngestConfig,
    limits: &LimitsConfig,
) -> Result<PreparedBundle, IngestError> {
    ensure_within_limit(path, limits)?;
    let extract: fn(&Path, &Path) -> Result<(), IngestError> = match BundleKind::detect(path)? {
        BundleKind::Directory => {
            return Ok(PreparedBundle {
                root: path.to_path_buf(),
                _scratch: None,
            });
        }
        BundleKind::Zip => extract_zip,
        BundleKind::TarGz => extract_tar_gz,
    };

    let scratch = scratch_dir(path, ingest)?;
    extract(path, scratch.path())?;
    tracing::info!(
        archive = %path.display(),
        into = %scratch.path().display(),
        "bundle extracted"
    );

    if ingest.extract_dir().is_some() {
        let root = scratch.keep();
        return Ok(PreparedBundle {
            root,
            _scratch: None,
        });
    }

    Ok(PreparedBundle {
        root: scratch.path().to_path_buf(),
        _scratch: Some(scratch),
    })
}

fn scratch_dir(archive: &Path, ingest: &IngestConfig) -> Result<TempDir, IngestError> {
    let name = archive
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "bundle".to_string());
    let stem = [".zip", ".tar.gz", ".tgz"]
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .unwrap_or(&name);
    let prefix = format!("{stem}-");

    let mut builder = tempfile::Builder::new();
    builder.prefix(&prefix);
    match ingest.extract_dir() {
        Some(dir) => {
            std::fs::create_dir_all(&dir).map_err(IngestError::io(&dir))?;
            builder.tempdir_in(&dir).map_err(IngestError::io(&dir))
        }
        None => builder
            .tempdir()
            .map_err(IngestError::io(std::env::temp_dir())),
    }
}

fn extract_zip(archive_path: &Path, dest: &Path) -> Result<(), IngestError> {
    let corrupt = |reason: String| IngestError::corrupt(archive_path)(reason);

    let file = File::open(archive_path).map_err(IngestError::io(archive_path))?;
    let mut archive = zip::ZipArchive::new(file).map_err(|error| corrupt(error.to_string()))?;

    for position in 0..archive.len() {
        let mut entry = archive
            .by_index(position)
            .map_err(|error| corrupt(error.to_string()))?;
        let Some(relative) = entry.enclosed_name() else {
            return Err(corrupt(format!(
                "entry '{}' points outside the archive root",
                entry.name()
            )));
        };
        let target = dest.join(relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&target).map_err(IngestError::io(&target))?;
            continue;
        }
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(IngestError::io(parent))?;
        }
        let mut out = File::create(&target).map_err(IngestError::io(&target))?;
        std::io::copy(&mut entry, &mut out)
            .map_err(|error| corrupt(format!("entry '{}': {error}", entry.name())))?;
    }

    tracing::debug!(entries = archive.len(), "zip archive unpacked");
    Ok(())
}

/// `Entry::unpack_in` skips entries with `..` without failing, so escaping
/// paths are rejected here before anything is written.
fn extract_tar_gz(archive_path: &Path, dest: &Path) -> Result<(), IngestError> {
    let corrupt = |reason: String| IngestError::corrupt(archive_path)(reason);

    let file = File::open(archive_path).map_err(IngestError::io(archive_path))?;
    let mut archive = tar::Archive::new(flate2::read::GzDecoder::new(file));
    let entries = archive
        .entries()
        .map_err(|error| corrupt(error.to_string()))?;

    let mut unpacked = 0_usize;
    for entry in entries {
        let mut entry = entry.map_err(|error| corrupt(error.to_string()))?;
        let relative = entry
            .path()
            .map_err(|error| corrupt(error.to_string()))?
            .into_owned();
        if !is_enclosed(&relative) {
            return Err(corrupt(format!(
                "entry '{}' points outside the archive root",
                relative.display()
            )));
        }
        entry
            .unpack_in(dest)
            .map_err(|error| corrupt(format!("entry '{}': {error}", relative.display())))?;
        unpacked += 1;
    }

    tracing::debug!(entries = unpacked, "tar.gz archive unpacked");
    Ok(())
}

fn is_enclosed(relative: &Path) -> bool {
    relative
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}
