//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues with reading, parsing or editing pyproject.toml
//! - LockFileError: Issues removing uv.lock
//! - ToolError: External package manager invocation failures

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Lock file related errors
    #[error(transparent)]
    LockFile(#[from] LockFileError),

    /// External tool related errors
    #[error(transparent)]
    Tool(#[from] ToolError),
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write manifest file
    #[error("failed to write manifest file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("failed to parse TOML in {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },

    /// A dependency expected in the manifest text is missing
    #[error("dependency '{name}' not found in {path}")]
    DependencyNotFound { name: String, path: PathBuf },

    /// A dependency occurs more than once, so no unique entry can be removed
    #[error("dependency '{name}' appears {occurrences} times in {path}")]
    AmbiguousDependency {
        name: String,
        path: PathBuf,
        occurrences: usize,
    },

    /// The search pattern built for a dependency name did not compile
    #[error("invalid search pattern for dependency '{name}': {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },
}

/// Errors related to the lock file
#[derive(Error, Debug)]
pub enum LockFileError {
    /// Removal failed for a reason other than the file being absent
    #[error("failed to remove lock file {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to running the external package manager
#[derive(Error, Debug)]
pub enum ToolError {
    /// The command ran and exited unsuccessfully
    #[error("command '{command}' failed ({})\nOutput: {output}", exit_status(.code))]
    Failed {
        command: String,
        code: Option<i32>,
        output: String,
    },

    /// The command could not be started
    #[error("failed to execute '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

fn exit_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new TomlParseError
    pub fn toml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::TomlParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new DependencyNotFound error
    pub fn dependency_not_found(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        ManifestError::DependencyNotFound {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Creates a new AmbiguousDependency error
    pub fn ambiguous_dependency(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        occurrences: usize,
    ) -> Self {
        ManifestError::AmbiguousDependency {
            name: name.into(),
            path: path.into(),
            occurrences,
        }
    }

    /// Creates a new InvalidPattern error
    pub fn invalid_pattern(name: impl Into<String>, source: regex::Error) -> Self {
        ManifestError::InvalidPattern {
            name: name.into(),
            source,
        }
    }
}

impl ToolError {
    /// Creates a new Failed error
    pub fn failed(command: impl Into<String>, code: Option<i32>, output: impl Into<String>) -> Self {
        ToolError::Failed {
            command: command.into(),
            code,
            output: output.into(),
        }
    }

    /// Creates a new Spawn error
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        ToolError::Spawn {
            command: command.into(),
            source,
        }
    }
}
