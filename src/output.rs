//! JSON output for `--json`
//!
//! All four buckets are always present so consumers can index them
//! without checking for missing keys.

use crate::dependency::{Dependency, SpmStatus};
use crate::report::Report;
use serde::Serialize;

/// The full report in machine-readable form
#[derive(Debug, Serialize)]
pub struct ReportOutput {
    pub total: usize,
    pub found: Vec<DependencyEntry>,
    pub not_found: Vec<DependencyEntry>,
    pub not_ios: Vec<DependencyEntry>,
    pub not_downloaded: Vec<DependencyEntry>,
}

/// A single dependency in the JSON report
#[derive(Debug, Serialize)]
pub struct DependencyEntry {
    pub name: String,
    pub version: String,
    pub directory: String,
}

impl DependencyEntry {
    pub fn new(dep: &Dependency) -> Self {
        Self {
            name: dep.name.clone(),
            version: dep.version.clone(),
            directory: dep.directory.clone(),
        }
    }
}

impl ReportOutput {
    pub fn new(report: &Report) -> Self {
        let entries = |status: SpmStatus| -> Vec<DependencyEntry> {
            report
                .bucket(status)
                .iter()
                .map(DependencyEntry::new)
                .collect()
        };

        Self {
            total: report.total(),
            found: entries(SpmStatus::Found),
            not_found: entries(SpmStatus::NotFound),
            not_ios: entries(SpmStatus::NotIos),
            not_downloaded: entries(SpmStatus::NotDownloaded),
        }
    }
}

/// Print a value as pretty JSON to stdout
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    }
}
