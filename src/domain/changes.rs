//! Full change detection between two dependency snapshots
//!
//! Kept separate from [`diff_dependencies`](super::diff_dependencies), which
//! only reports additions.

use super::DependencyMap;
use semver::Version;
use serde::Serialize;
use std::fmt;

/// Semantic version change type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionChangeType {
    /// Major version change (breaking)
    Major,
    /// Minor version change (features)
    Minor,
    /// Patch version change (fixes)
    Patch,
    /// Unknown or unparseable
    Unknown,
}

impl VersionChangeType {
    /// Determine the change type between two versions
    pub fn from_versions(old: &str, new: &str) -> Self {
        match (lenient_version(old), lenient_version(new)) {
            (Some(old), Some(new)) => {
                if old.major != new.major {
                    VersionChangeType::Major
                } else if old.minor != new.minor {
                    VersionChangeType::Minor
                } else {
                    VersionChangeType::Patch
                }
            }
            _ => VersionChangeType::Unknown,
        }
    }

    /// Get the plain label
    pub fn label(&self) -> &'static str {
        match self {
            VersionChangeType::Major => "major",
            VersionChangeType::Minor => "minor",
            VersionChangeType::Patch => "patch",
            VersionChangeType::Unknown => "?",
        }
    }
}

/// Parses a version, tolerating a `v` prefix and missing minor/patch parts
fn lenient_version(raw: &str) -> Option<Version> {
    let v = raw.trim();
    let v = v.strip_prefix('v').unwrap_or(v);
    let split = v.find(['-', '+']).unwrap_or(v.len());
    let (core, rest) = v.split_at(split);

    let padded = match core.split('.').count() {
        1 => format!("{}.0.0{}", core, rest),
        2 => format!("{}.0{}", core, rest),
        _ => v.to_string(),
    };
    Version::parse(&padded).ok()
}

/// A dependency present in both snapshots with a different version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionChange {
    /// Package name
    pub name: String,
    /// Version in the old snapshot
    pub from: String,
    /// Version in the new snapshot
    pub to: String,
    /// Kind of version bump
    pub change: VersionChangeType,
}

impl VersionChange {
    /// Creates a change record, classifying the bump
    pub fn new(name: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        let from = from.into();
        let to = to.into();
        Self {
            name: name.into(),
            change: VersionChangeType::from_versions(&from, &to),
            from,
            to,
        }
    }

    /// Returns true when the new version sorts below the old one
    ///
    /// Unparseable versions are never reported as downgrades.
    pub fn is_downgrade(&self) -> bool {
        match (lenient_version(&self.from), lenient_version(&self.to)) {
            (Some(from), Some(to)) => to < from,
            _ => false,
        }
    }
}

impl fmt::Display for VersionChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} [{}]",
            self.name,
            self.from,
            self.to,
            self.change.label()
        )
    }
}

/// Added, removed and changed dependencies between two snapshots
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyChanges {
    /// Names only present in the new snapshot
    pub added: DependencyMap,
    /// Names only present in the old snapshot
    pub removed: DependencyMap,
    /// Names present in both with different versions, ordered by name
    pub changed: Vec<VersionChange>,
}

impl DependencyChanges {
    /// Returns true if nothing differs
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    /// Returns the total number of differences
    pub fn total(&self) -> usize {
        self.added.len() + self.removed.len() + self.changed.len()
    }
}

/// Compares two snapshots, reporting additions, removals and version changes
pub fn compare_dependencies(old_deps: &DependencyMap, new_deps: &DependencyMap) -> DependencyChanges {
    let added = super::diff_dependencies(old_deps, new_deps);
    let removed = super::diff_dependencies(new_deps, old_deps);

    let changed: Vec<VersionChange> = new_deps
        .iter()
        .filter_map(|(name, to)| match old_deps.get(name) {
            Some(from) if from != to => Some(VersionChange::new(name, from, to)),
            _ => None,
        })
        .collect();

    tracing::debug!(
        added = added.len(),
        removed = removed.len(),
        changed = changed.len(),
        "compared dependency sets"
    );

    DependencyChanges {
        added,
        removed,
        changed,
    }
}
