//! Swift Package Manager detection for cached packages
//!
//! A Flutter plugin supports SPM when its `ios/` directory contains a
//! `Package.swift`, usually at `ios/<plugin>/Package.swift`. Only the `ios/`
//! directory at the package root is searched; everything below it is walked
//! depth-first until a `Package.swift` turns up.

use crate::cache;
use crate::dependency::{Dependency, SpmStatus};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const IOS_DIR: &str = "ios";
const SPM_MANIFEST: &str = "Package.swift";

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read metadata for {path}: {source}")]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Files sort before directories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum EntryKind {
    File,
    Dir,
}

#[derive(Debug)]
struct Entry {
    path: PathBuf,
    kind: EntryKind,
}

/// Classify every dependency against the hosted cache directory.
///
/// Dependencies whose cache directory is missing keep
/// [`SpmStatus::NotDownloaded`]. The first filesystem error aborts the run.
pub fn classify_all(
    deps: Vec<Dependency>,
    hosted: &Path,
) -> Result<Vec<Dependency>, ClassifyError> {
    deps.into_iter()
        .map(|dep| -> Result<Dependency, ClassifyError> {
            let path = cache::package_dir(hosted, &dep.directory);
            if !path.exists() {
                tracing::debug!(path = %path.display(), "{} not downloaded", dep.directory);
                return Ok(dep);
            }

            let status = classify(&path)?;
            tracing::debug!(path = %path.display(), %status, "classified {}", dep.directory);
            Ok(dep.with_status(status))
        })
        .collect()
}

/// Classify a single cached package directory.
///
/// Returns [`SpmStatus::NotIos`] when there is no `ios/` directory at the
/// package root, [`SpmStatus::Found`] when a `Package.swift` exists anywhere
/// beneath it, and [`SpmStatus::NotFound`] otherwise.
pub fn classify(package_dir: &Path) -> Result<SpmStatus, ClassifyError> {
    search(package_dir, 0)
}

fn search(dir: &Path, depth: usize) -> Result<SpmStatus, ClassifyError> {
    let is_root = depth == 0;
    let mut entries = list_entries(dir, is_root)?;

    // At the root only the ios directory survives filtering
    if is_root && entries.is_empty() {
        return Ok(SpmStatus::NotIos);
    }

    entries.sort_by(|a, b| {
        a.kind
            .cmp(&b.kind)
            .then_with(|| a.path.as_os_str().cmp(b.path.as_os_str()))
    });

    for entry in entries {
        match entry.kind {
            EntryKind::File => {
                if entry.path.file_name() == Some(OsStr::new(SPM_MANIFEST)) {
                    return Ok(SpmStatus::Found);
                }
            }
            EntryKind::Dir => {
                tracing::trace!(path = %entry.path.display(), depth = depth + 1, "descending");
                if search(&entry.path, depth + 1)? == SpmStatus::Found {
                    return Ok(SpmStatus::Found);
                }
            }
        }
    }

    Ok(SpmStatus::NotFound)
}

/// List the entries of `dir` worth inspecting.
///
/// At the package root that is just the `ios` directory; below it, every
/// regular file and directory. Symlinks are never followed.
fn list_entries(dir: &Path, is_root: bool) -> Result<Vec<Entry>, ClassifyError> {
    let read_dir = fs::read_dir(dir).map_err(|source| ClassifyError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| ClassifyError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let metadata = fs::symlink_metadata(&path).map_err(|source| ClassifyError::Metadata {
            path: path.clone(),
            source,
        })?;

        let kind = if metadata.is_file() {
            EntryKind::File
        } else if metadata.is_dir() {
            EntryKind::Dir
        } else {
            continue;
        };

        let keep = match kind {
            EntryKind::File => !is_root,
            EntryKind::Dir => !is_root || entry.file_name() == IOS_DIR,
        };
        if keep {
            entries.push(Entry { path, kind });
        }
    }

    Ok(entries)
}
