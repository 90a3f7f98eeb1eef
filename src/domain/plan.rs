//! Configuration for a single update run

use std::path::{Path, PathBuf};

/// Default package manager executable
pub const DEFAULT_PROGRAM: &str = "uv";

/// Manifest file name looked up in the target directory
pub const MANIFEST_FILENAME: &str = "pyproject.toml";

/// Lock file name written by the package manager
pub const LOCK_FILENAME: &str = "uv.lock";

/// What to update and how
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlan {
    /// Directory containing pyproject.toml
    pub directory: PathBuf,
    /// Rewrite `>=` pins added by the package manager into `==` pins
    pub save_exact: bool,
    /// Package manager executable
    pub program: String,
}

impl UpdatePlan {
    /// Create a plan using the default package manager
    pub fn new(directory: impl Into<PathBuf>, save_exact: bool) -> Self {
        Self {
            directory: directory.into(),
            save_exact,
            program: DEFAULT_PROGRAM.to_string(),
        }
    }

    /// Use a different package manager executable
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Path to the manifest file
    pub fn manifest_path(&self) -> PathBuf {
        self.directory.join(MANIFEST_FILENAME)
    }

    /// Path to the lock file
    pub fn lock_path(&self) -> PathBuf {
        self.directory.join(LOCK_FILENAME)
    }

    /// Target directory
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}
