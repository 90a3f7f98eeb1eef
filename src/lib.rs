//! pyupdate - upgrade Python project dependencies with uv
//!
//! This library provides the update pipeline for a pyproject.toml:
//! - Parse project.dependencies and dependency-groups
//! - Excise the declarations without disturbing the rest of the file
//! - Re-add them at their latest versions through uv
//! - Optionally pin the new versions exactly and regenerate uv.lock

pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod package_manager;
pub mod progress;
