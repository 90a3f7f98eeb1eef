//! pyproject.toml parser
//!
//! Only two tables matter here:
//! - project.dependencies (PEP 621)
//! - dependency-groups (PEP 735), where `dev` is the development group
//!
//! Missing tables are an empty state, not an error.

use crate::domain::{DependencySet, DEV_GROUP};
use crate::error::ManifestError;
use std::collections::BTreeMap;
use std::path::Path;
use toml::{Table, Value};

/// Dependency declarations decoded from a pyproject.toml
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PyprojectManifest {
    /// Requirement strings from project.dependencies
    pub dependencies: Vec<String>,
    /// Requirement strings per dependency group
    pub dependency_groups: BTreeMap<String, Vec<String>>,
}

impl PyprojectManifest {
    /// Parse manifest content; `path` is only used for error context
    pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
        let toml: Table = toml::from_str(content)
            .map_err(|e: toml::de::Error| ManifestError::toml_parse_error(path, e.to_string()))?;

        let dependencies = toml
            .get("project")
            .and_then(|p| p.get("dependencies"))
            .and_then(Value::as_array)
            .map(|deps| requirement_strings(deps))
            .unwrap_or_default();

        let mut dependency_groups = BTreeMap::new();
        if let Some(groups) = toml.get("dependency-groups").and_then(Value::as_table) {
            for (group, deps) in groups {
                if let Some(deps_array) = deps.as_array() {
                    dependency_groups.insert(group.clone(), requirement_strings(deps_array));
                }
            }
        }

        Ok(Self {
            dependencies,
            dependency_groups,
        })
    }

    /// Requirement strings of the main dependency list
    pub fn main_dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Requirement strings of the `dev` group (empty if absent)
    pub fn dev_dependencies(&self) -> &[String] {
        self.dependency_groups
            .get(DEV_GROUP)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Groups other than `dev`
    pub fn optional_groups(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.dependency_groups
            .iter()
            .filter(|(group, _)| group.as_str() != DEV_GROUP)
            .map(|(group, deps)| (group.as_str(), deps.as_slice()))
    }

    /// Bare names of every declared dependency
    pub fn dependency_set(&self) -> DependencySet {
        DependencySet::from_requirements(&self.dependencies, &self.dependency_groups)
    }
}

// Include tables (`{ include-group = "..." }`) are not requirements
fn requirement_strings(values: &[Value]) -> Vec<String> {
    values
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}
