//! pyproject.toml reading, parsing and editing
//!
//! This module provides functionality to:
//! - Locate and read the manifest in a project directory
//! - Decode project.dependencies and dependency-groups
//! - Excise dependency declarations without re-serializing the file
//! - Rewrite `>=` pins into `==` pins
//! - Remove the uv.lock file

mod exactify;
mod lock;
mod mutator;
mod pyproject;
mod reader;

pub use exactify::{exactify_content, make_versions_exact};
pub use lock::remove_lock_file;
pub use mutator::{excise_dependencies, remove_dependencies};
pub use pyproject::PyprojectManifest;
pub use reader::{locate_manifest, read_manifest, write_manifest};
