//! Bare dependency names grouped by category

use crate::domain::specifier::bare_names;
use std::collections::BTreeMap;

/// Name of the dependency group treated as development dependencies
pub const DEV_GROUP: &str = "dev";

/// Bare dependency names for one update run, split into the categories
/// the package manager re-adds separately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    /// Names from `project.dependencies`
    pub main: Vec<String>,
    /// Names from `dependency-groups.dev`
    pub dev: Vec<String>,
    /// Names from every other dependency group, keyed by group
    pub optional: BTreeMap<String, Vec<String>>,
}

impl DependencySet {
    /// Build the set from raw requirement strings.
    ///
    /// `groups` is the `dependency-groups` table; the `dev` group becomes
    /// [`DependencySet::dev`] and every other non-empty group is optional.
    pub fn from_requirements(main: &[String], groups: &BTreeMap<String, Vec<String>>) -> Self {
        let mut set = Self {
            main: bare_names(main),
            ..Self::default()
        };

        for (group, requirements) in groups {
            let names = bare_names(requirements);
            if group == DEV_GROUP {
                set.dev = names;
            } else if !names.is_empty() {
                set.optional.insert(group.clone(), names);
            }
        }

        set
    }

    /// Every name in the set, main first, then dev, then optional groups
    pub fn all_names(&self) -> Vec<&str> {
        self.main
            .iter()
            .chain(self.dev.iter())
            .chain(self.optional.values().flatten())
            .map(String::as_str)
            .collect()
    }

    /// Total number of names across all categories
    pub fn len(&self) -> usize {
        self.main.len() + self.dev.len() + self.optional.values().map(Vec::len).sum::<usize>()
    }

    /// Returns true if no category holds any name
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
