//! File discovery under a bundle root.
//!
//! Walks every file with all of `ignore`'s standard filters turned off: an
//! upload has no `.gitignore` worth honouring, and hidden `._` companions are
//! counted by the auditor rather than dropped here. Entries are sorted by name
//! within each directory so discovery order is stable across platforms.
//!
//! Symlinked directories are not descended into. A symlink whose target is a
//! regular file counts as that file, under the link's own name.

use std::path::{Component, Path};

use ignore::WalkBuilder;
use rp_core::entities::DiscoveredFile;

use crate::error::IngestError;

/// List every regular file (or link to one) below `root`, depth first,
/// name-sorted.
///
/// Each file's directory is its parent path relative to `root`, with
/// components joined by `/`; files directly under `root` have an empty
/// directory.
pub fn discover_files(root: &Path) -> Result<Vec<DiscoveredFile>, IngestError> {
    if !root.is_dir() {
        return Err(IngestError::NotFound {
            path: root.to_path_buf(),
        });
    }

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry.map_err(|error| IngestError::Walk(error.to_string()))?;
        let path = entry.path();
        match entry.file_type() {
            Some(ft) if ft.is_file() => {}
            Some(ft) if ft.is_symlink() => {
                if !path.is_file() {
                    tracing::debug!(path = %path.display(), "skipping link to a non-file");
                    continue;
                }
            }
            _ => continue,
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        let name = entry.file_name().to_string_lossy().into_owned();
        let directory = relative.parent().map(join_components).unwrap_or_default();
        files.push(DiscoveredFile::new(directory, name));
    }

    tracing::debug!(root = %root.display(), files = files.len(), "bundle walked");
    Ok(files)
}

fn join_components(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
