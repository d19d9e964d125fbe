//! Dependency records flowing through the pipeline
//!
//! A [`Dependency`] is created by the manifest extractor with status
//! [`SpmStatus::NotDownloaded`] and re-issued by the classifier with its
//! final status via [`Dependency::with_status`].

use std::fmt;

/// Swift Package Manager support detected for a dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpmStatus {
    /// A `Package.swift` exists somewhere under `ios/`
    Found,
    /// `ios/` exists but holds no `Package.swift`
    NotFound,
    /// The cached package has no `ios/` directory
    NotIos,
    /// The package is not present in the pub cache
    #[default]
    NotDownloaded,
}

impl SpmStatus {
    /// All statuses in report order
    pub const ALL: [SpmStatus; 4] = [
        SpmStatus::Found,
        SpmStatus::NotFound,
        SpmStatus::NotIos,
        SpmStatus::NotDownloaded,
    ];
}

impl fmt::Display for SpmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpmStatus::Found => write!(f, "found"),
            SpmStatus::NotFound => write!(f, "not-found"),
            SpmStatus::NotIos => write!(f, "not-ios"),
            SpmStatus::NotDownloaded => write!(f, "not-downloaded"),
        }
    }
}

/// A hosted dependency declared in the pubspec
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dependency {
    pub name: String,
    /// Version constraint exactly as written in the pubspec
    pub version: String,
    /// Cache directory name: `<name>-<version>`
    pub directory: String,
    pub spm: SpmStatus,
}

impl Dependency {
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            directory: format!("{}-{}", name, version),
            spm: SpmStatus::default(),
        }
    }

    pub fn with_status(mut self, spm: SpmStatus) -> Self {
        self.spm = spm;
        self
    }
}
