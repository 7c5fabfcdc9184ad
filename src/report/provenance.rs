//! Provenance signals: historical tag/version overlap and sigstore attestations

use super::null_as_default;
use crate::domain::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Provenance score and the evidence behind it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Provenance {
    #[serde(deserialize_with = "null_as_default")]
    pub score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub description: ProvenanceDescription,
    pub updated_at: Option<Timestamp>,
}

impl Provenance {
    /// Returns true when a sigstore attestation was found
    pub fn has_sigstore(&self) -> bool {
        !self.description.sigstore.is_empty()
    }
}

/// The two provenance sources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvenanceDescription {
    #[serde(rename = "hp", deserialize_with = "null_as_default")]
    pub historical: HistoricalProvenance,
    #[serde(deserialize_with = "null_as_default")]
    pub sigstore: SigstoreProvenance,
}

/// Overlap between repository tags and published versions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoricalProvenance {
    #[serde(deserialize_with = "null_as_default")]
    pub tags: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub common: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub overlap: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub versions: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub over_time: Map<String, Value>,
}

/// Certificate data for packages signed from a CI workflow
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SigstoreProvenance {
    #[serde(deserialize_with = "null_as_default")]
    pub issuer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub workflow: String,
    #[serde(rename = "source_repo", deserialize_with = "null_as_default")]
    pub source_repository: String,
    #[serde(deserialize_with = "null_as_default")]
    pub token_issuer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub transparency: String,
}

impl SigstoreProvenance {
    /// Returns true if no certificate field is populated
    pub fn is_empty(&self) -> bool {
        self.issuer.is_empty()
            && self.workflow.is_empty()
            && self.source_repository.is_empty()
            && self.token_issuer.is_empty()
            && self.transparency.is_empty()
    }
}
