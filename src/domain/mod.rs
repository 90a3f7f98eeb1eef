//! Core domain models for pyupdate
//!
//! This module contains the fundamental types used throughout the application:
//! - Version specifier stripping for requirement strings
//! - The per-run set of bare dependency names
//! - The run configuration
//! - The report of a completed run

mod dependency_set;
mod plan;
mod report;
mod specifier;

pub use dependency_set::{DependencySet, DEV_GROUP};
pub use plan::{UpdatePlan, DEFAULT_PROGRAM, LOCK_FILENAME, MANIFEST_FILENAME};
pub use report::UpdateReport;
pub use specifier::{bare_names, strip_specifier, SPECIFIER_CHARS};
