//! Pub cache location
//!
//! Hosted packages are extracted by `dart pub get` / `flutter pub get` to:
//! `<pub cache>/hosted/pub.dev/<name>-<version>/`
//!
//! The pub cache root is resolved in this order:
//! 1. an explicit override (the `--pub-cache` flag)
//! 2. the `PUB_CACHE` environment variable
//! 3. `~/.pub-cache`

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error(
        "Cannot determine pub cache directory. HOME environment variable not set; pass --pub-cache or set PUB_CACHE."
    )]
    NoHomeDir,
}

/// Returns the pub cache root directory
pub fn root_dir(override_dir: Option<&Path>) -> Result<PathBuf, CacheError> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }

    let from_env = std::env::var_os("PUB_CACHE").filter(|v| !v.is_empty());
    resolve_root(from_env.map(PathBuf::from), dirs::home_dir())
}

fn resolve_root(from_env: Option<PathBuf>, home: Option<PathBuf>) -> Result<PathBuf, CacheError> {
    if let Some(dir) = from_env {
        return Ok(dir);
    }

    home.map(|h| h.join(".pub-cache")).ok_or(CacheError::NoHomeDir)
}

/// Returns the directory holding packages hosted on pub.dev:
/// `<root>/hosted/pub.dev`
pub fn hosted_dir(root: &Path) -> PathBuf {
    root.join("hosted").join("pub.dev")
}

/// Returns the expected cache path for a dependency directory name.
///
/// Pure path computation; the directory may not exist.
pub fn package_dir(hosted: &Path, directory: &str) -> PathBuf {
    hosted.join(directory)
}
