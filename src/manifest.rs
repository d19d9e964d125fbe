//! Pubspec loading and dependency extraction
//!
//! Reads a `pubspec.yaml` and collects the hosted dependencies declared in
//! `dependencies` and `dev_dependencies`. Only plain version constraints are
//! kept; path, git, sdk and custom hosted sources are skipped:
//!
//! ```yaml
//! dependencies:
//!   http: ^1.2.0          # kept
//!   flutter:
//!     sdk: flutter        # skipped
//!   local_pkg:
//!     path: ../local_pkg  # skipped
//! ```

use crate::dependency::Dependency;
use serde_yml::{Mapping, Value};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Sections read from the pubspec, in extraction order
const SECTIONS: [&str; 2] = ["dependencies", "dev_dependencies"];

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {details}")]
    Parse { path: PathBuf, details: String },

    #[error("Invalid {path}: '{section}' must be a mapping")]
    InvalidSection { path: PathBuf, section: String },
}

/// The dependency sections of a parsed pubspec
#[derive(Debug, Default)]
pub struct Manifest {
    pub dependencies: Mapping,
    pub dev_dependencies: Mapping,
}

/// Read and parse the pubspec at `path`
pub fn load(path: &Path) -> Result<Manifest, ManifestError> {
    let content = fs::read_to_string(path).map_err(|source| ManifestError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse(path, &content)
}

/// Parse pubspec content; `path` is only used for error messages
pub fn parse(path: &Path, content: &str) -> Result<Manifest, ManifestError> {
    let document: Value = if content.trim().is_empty() {
        Value::Null
    } else {
        serde_yml::from_str(content).map_err(|e| ManifestError::Parse {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?
    };

    // A document that is not a mapping has no dependency sections
    let Value::Mapping(root) = document else {
        return Ok(Manifest::default());
    };

    let [dependencies, dev_dependencies] =
        SECTIONS.map(|section| section_mapping(path, &root, section));

    Ok(Manifest {
        dependencies: dependencies?,
        dev_dependencies: dev_dependencies?,
    })
}

fn section_mapping(path: &Path, root: &Mapping, section: &str) -> Result<Mapping, ManifestError> {
    match root.get(section) {
        None | Some(Value::Null) => Ok(Mapping::new()),
        Some(Value::Mapping(map)) => Ok(map.clone()),
        Some(_) => Err(ManifestError::InvalidSection {
            path: path.to_path_buf(),
            section: section.to_string(),
        }),
    }
}

impl Manifest {
    /// Hosted dependencies from both sections, deduplicated and sorted by
    /// cache directory name
    pub fn hosted_dependencies(&self) -> Vec<Dependency> {
        let mut seen = HashSet::new();
        let mut deps: Vec<Dependency> = [&self.dependencies, &self.dev_dependencies]
            .into_iter()
            .flat_map(collect_hosted)
            .filter(|dep| seen.insert((dep.name.clone(), dep.version.clone())))
            .collect();

        // Ordered by UTF-16 code units, not UTF-8 bytes
        deps.sort_by(|a, b| a.directory.encode_utf16().cmp(b.directory.encode_utf16()));
        deps
    }
}

fn collect_hosted(section: &Mapping) -> Vec<Dependency> {
    let mut deps = Vec::new();
    for (key, value) in section {
        let Some(name) = key_name(key) else {
            tracing::debug!(key = ?key, "skipping dependency with non-scalar name");
            continue;
        };
        match value.as_str() {
            Some(version) if !version.is_empty() => deps.push(Dependency::new(&name, version)),
            _ => tracing::debug!(name, "skipping dependency without a version constraint"),
        }
    }
    deps
}

/// Scalar keys name a package even when YAML reads them as numbers or bools
fn key_name(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
