//! Dependency information structures and additions-only diffing

use super::Ecosystem;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Name to version mapping of a dependency snapshot
pub type DependencyMap = BTreeMap<String, String>;

/// Represents a package dependency
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
    /// Package name
    pub name: String,
    /// Version string as declared
    pub version: String,
    /// The ecosystem this dependency belongs to
    pub ecosystem: Ecosystem,
}

impl Dependency {
    /// Creates a new dependency
    pub fn new(name: impl Into<String>, version: impl Into<String>, ecosystem: Ecosystem) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            ecosystem,
        }
    }

    /// Creates a new npm dependency
    pub fn npm(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self::new(name, version, Ecosystem::Npm)
    }

    /// Creates a new PyPI dependency
    pub fn pypi(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self::new(name, version, Ecosystem::Pypi)
    }

    /// Creates a new crates.io dependency
    pub fn crates(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self::new(name, version, Ecosystem::Crates)
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{} [{}]", self.name, self.version, self.ecosystem)
    }
}

/// Builds a name to version mapping from a dependency list
///
/// Later entries overwrite earlier entries with the same name. The ecosystem
/// is not part of the key.
pub fn to_mapping(dependencies: &[Dependency]) -> DependencyMap {
    dependencies
        .iter()
        .map(|dep| (dep.name.clone(), dep.version.clone()))
        .collect()
}

/// Returns the entries of `new_deps` whose names do not appear in `old_deps`
///
/// Version changes and removals are not reported; see
/// [`compare_dependencies`](super::compare_dependencies) for those.
pub fn diff_dependencies(old_deps: &DependencyMap, new_deps: &DependencyMap) -> DependencyMap {
    let added: DependencyMap = new_deps
        .iter()
        .filter(|(name, _)| !old_deps.contains_key(*name))
        .map(|(name, version)| (name.clone(), version.clone()))
        .collect();

    tracing::debug!(
        old = old_deps.len(),
        new = new_deps.len(),
        added = added.len(),
        "diffed dependency sets"
    );

    added
}
