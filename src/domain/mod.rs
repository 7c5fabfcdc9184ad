//! Core domain models for trusty
//!
//! This module contains the value types shared by the report schema and the
//! dependency tooling:
//! - Ecosystem identifiers
//! - The flexible timestamp codec
//! - Dependency snapshots and their diffs

mod changes;
mod dependency;
mod ecosystem;
mod time;

pub use changes::{compare_dependencies, DependencyChanges, VersionChange, VersionChangeType};
pub use dependency::{diff_dependencies, to_mapping, Dependency, DependencyMap};
pub use ecosystem::{ecosystem_name, Ecosystem};
pub use time::{Timestamp, CANONICAL_LAYOUT};
