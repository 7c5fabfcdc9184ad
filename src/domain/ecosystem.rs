//! Ecosystem identifiers for supported packaging systems

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Packaging system identified by a small integer code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum Ecosystem {
    /// npm registry (code 1)
    Npm,
    /// Go modules (code 2)
    Go,
    /// Python Package Index (code 3)
    Pypi,
    /// Maven Central (code 4)
    Maven,
    /// crates.io (code 5)
    Crates,
    /// Any code without a known packaging system
    Unknown(i32),
}

impl Ecosystem {
    /// Maps a wire code onto an ecosystem
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Ecosystem::Npm,
            2 => Ecosystem::Go,
            3 => Ecosystem::Pypi,
            4 => Ecosystem::Maven,
            5 => Ecosystem::Crates,
            other => Ecosystem::Unknown(other),
        }
    }

    /// Returns the wire code
    pub fn code(&self) -> i32 {
        match self {
            Ecosystem::Npm => 1,
            Ecosystem::Go => 2,
            Ecosystem::Pypi => 3,
            Ecosystem::Maven => 4,
            Ecosystem::Crates => 5,
            Ecosystem::Unknown(code) => *code,
        }
    }

    /// Returns the display name, or an empty string for unknown codes
    pub fn as_str(&self) -> &'static str {
        match self {
            Ecosystem::Npm => "npm",
            Ecosystem::Go => "Go",
            Ecosystem::Pypi => "PyPI",
            Ecosystem::Maven => "Maven",
            Ecosystem::Crates => "crates",
            Ecosystem::Unknown(_) => "",
        }
    }

    /// Returns the registration key (`EcosystemNpm`, ...) for known ecosystems
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Ecosystem::Npm => Some("EcosystemNpm"),
            Ecosystem::Go => Some("EcosystemGo"),
            Ecosystem::Pypi => Some("EcosystemPypi"),
            Ecosystem::Maven => Some("EcosystemMaven"),
            Ecosystem::Crates => Some("EcosystemCrates"),
            Ecosystem::Unknown(_) => None,
        }
    }

    /// Looks up an ecosystem by its registration key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|e| e.key() == Some(key))
    }

    /// Returns true for codes without a known packaging system
    pub fn is_unknown(&self) -> bool {
        matches!(self, Ecosystem::Unknown(_))
    }

    /// Returns all known ecosystems
    pub fn all() -> &'static [Ecosystem] {
        &[
            Ecosystem::Npm,
            Ecosystem::Go,
            Ecosystem::Pypi,
            Ecosystem::Maven,
            Ecosystem::Crates,
        ]
    }
}

/// Returns the display name for a raw ecosystem code
pub fn ecosystem_name(code: i32) -> &'static str {
    Ecosystem::from_code(code).as_str()
}

impl From<i32> for Ecosystem {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

impl From<Ecosystem> for i32 {
    fn from(ecosystem: Ecosystem) -> Self {
        ecosystem.code()
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Ecosystem {
    type Err = String;

    /// Accepts display names and registration keys, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|e| {
                e.as_str().eq_ignore_ascii_case(s)
                    || e.key().is_some_and(|k| k.eq_ignore_ascii_case(s))
            })
            .ok_or_else(|| format!("unknown ecosystem: {}", s))
    }
}
