//! Suggested substitute packages

use super::null_as_default;
use super::Provenance;
use serde::{Deserialize, Serialize};

/// An alternative package suggested alongside a report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alternative {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_malicious: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub package_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub package_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub package_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub score: f64,
    /// Link to the package page; the API sends this key untransformed
    #[serde(rename = "PackageNameURL", deserialize_with = "null_as_default")]
    pub package_name_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub repo_description: String,
    pub provenance: Option<Provenance>,
}

/// The alternatives block of a report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlternativesList {
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub packages: Vec<Alternative>,
}

impl AlternativesList {
    /// Returns non-malicious alternatives, best score first
    pub fn ranked(&self) -> Vec<&Alternative> {
        let mut packages: Vec<&Alternative> =
            self.packages.iter().filter(|p| !p.is_malicious).collect();
        packages.sort_by(|a, b| b.score.total_cmp(&a.score));
        packages
    }
}
