//! Dependency snapshots stored as JSON files
//!
//! A snapshot is a JSON array of `{"name", "version", "ecosystem"}` objects,
//! where `ecosystem` is the integer code.

use crate::domain::{to_mapping, Dependency, DependencyMap};
use crate::error::InputError;
use std::path::Path;

/// Reads a dependency list from a JSON file
pub fn read_dependencies(path: &Path) -> Result<Vec<Dependency>, InputError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| InputError::read_error(path, e))?;
    let deps: Vec<Dependency> = serde_json::from_str(&content)
        .map_err(|e| InputError::parse_error(path, e.to_string()))?;

    let unknown = deps.iter().filter(|d| d.ecosystem.is_unknown()).count();
    if unknown > 0 {
        tracing::warn!(
            path = %path.display(),
            unknown,
            "dependency list contains unknown ecosystem codes"
        );
    }
    tracing::debug!(path = %path.display(), count = deps.len(), "read dependency list");

    Ok(deps)
}

/// Reads a dependency list and collapses it into a name to version mapping
pub fn read_mapping(path: &Path) -> Result<DependencyMap, InputError> {
    read_dependencies(path).map(|deps| to_mapping(&deps))
}
