//! Grouped text report
//!
//! Dependencies are bucketed by [`SpmStatus`] and printed in a fixed order,
//! each non-empty bucket as a header with a `<count>/<total>` fraction, one
//! line per dependency and a trailing blank line:
//!
//! ```text
//! 🟢 Packages using Swift Package Manager (1/2)
//! · url_launcher ^6.3.0
//!
//! ⚫️ Packages not downloaded (1/2)
//! · camera 0.11.0
//!
//! ```

use crate::dependency::{Dependency, SpmStatus};

/// Classified dependencies grouped by SPM status
#[derive(Debug)]
pub struct Report {
    total: usize,
    buckets: [Vec<Dependency>; 4],
}

impl Report {
    pub fn new(deps: Vec<Dependency>) -> Self {
        let total = deps.len();
        let mut buckets: [Vec<Dependency>; 4] = Default::default();
        for dep in deps {
            buckets[bucket_index(dep.spm)].push(dep);
        }
        Self { total, buckets }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn bucket(&self, status: SpmStatus) -> &[Dependency] {
        &self.buckets[bucket_index(status)]
    }

    /// Render the human-readable report; empty buckets are omitted entirely
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for status in SpmStatus::ALL {
            let deps = self.bucket(status);
            if deps.is_empty() {
                continue;
            }
            out.push_str(&format!("{} ({}/{})\n", title(status), deps.len(), self.total));
            for dep in deps {
                out.push_str(&format!("· {} {}\n", dep.name, dep.version));
            }
            out.push('\n');
        }
        out
    }
}

fn bucket_index(status: SpmStatus) -> usize {
    match status {
        SpmStatus::Found => 0,
        SpmStatus::NotFound => 1,
        SpmStatus::NotIos => 2,
        SpmStatus::NotDownloaded => 3,
    }
}

fn title(status: SpmStatus) -> &'static str {
    match status {
        SpmStatus::Found => "🟢 Packages using Swift Package Manager",
        SpmStatus::NotFound => "🔴 Packages not using Swift Package Manager",
        SpmStatus::NotIos => "⚪️ Packages not built for iOS",
        SpmStatus::NotDownloaded => "⚫️ Packages not downloaded",
    }
}
