//! Outcome of a completed update run

use crate::domain::DependencySet;
use std::path::PathBuf;

/// What a successful run changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    /// Manifest that was updated
    pub manifest_path: PathBuf,
    /// Whether an existing lock file was deleted before re-adding
    pub lock_removed: bool,
    /// Number of declarations excised from the manifest
    pub removed_entries: usize,
    /// Names re-added through the package manager
    pub dependencies: DependencySet,
    /// Names whose `>=` pins were rewritten to `==` (empty unless save-exact)
    pub exactified: Vec<String>,
}

impl UpdateReport {
    /// Create a report for a manifest before any step has run
    pub fn new(manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            lock_removed: false,
            removed_entries: 0,
            dependencies: DependencySet::default(),
            exactified: Vec::new(),
        }
    }

    /// Total number of re-added dependencies
    pub fn total_updated(&self) -> usize {
        self.dependencies.len()
    }

    /// Returns true if nothing was declared in the manifest
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}
