//! Score blocks: the overall summary plus activity and typosquatting signals

use super::null_as_default;
use crate::domain::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Summary key for the activity score (number)
pub const SUMMARY_KEY_ACTIVITY: &str = "activity";
/// Summary key for the repository activity component (number)
pub const SUMMARY_KEY_ACTIVITY_REPO: &str = "activity_repo";
/// Summary key for the user activity component (number)
pub const SUMMARY_KEY_ACTIVITY_USER: &str = "activity_user";
/// Summary key naming the source of the summary (string)
pub const SUMMARY_KEY_FROM: &str = "from";
/// Summary key flagging a malicious package (bool)
pub const SUMMARY_KEY_MALICIOUS: &str = "malicious";
/// Summary key for the provenance score (number)
pub const SUMMARY_KEY_PROVENANCE: &str = "provenance";
/// Summary key for the combined trust score (number)
pub const SUMMARY_KEY_TRUST_SUMMARY: &str = "trust-summary";
/// Summary key for the typosquatting score (number)
pub const SUMMARY_KEY_TYPOSQUATTING: &str = "typosquatting";

/// Overall score returned for a package
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreSummary {
    /// Combined score, unset while the report is still being computed
    pub score: Option<f64>,
    /// Loosely typed score components, keyed by the `SUMMARY_KEY_*` names
    #[serde(deserialize_with = "null_as_default")]
    pub description: Map<String, Value>,
    pub updated_at: Option<Timestamp>,
}

impl ScoreSummary {
    /// Returns a numeric component of the description
    pub fn component(&self, key: &str) -> Option<f64> {
        self.description.get(key).and_then(Value::as_f64)
    }

    /// Returns true when the description flags the package as malicious
    pub fn is_malicious(&self) -> bool {
        self.description
            .get(SUMMARY_KEY_MALICIOUS)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Decodes the description into its typed form
    ///
    /// Returns `None` when a known key carries a value of the wrong type.
    pub fn typed_description(&self) -> Option<ScoreSummaryDescription> {
        serde_json::from_value(Value::Object(self.description.clone())).ok()
    }
}

/// Typed view over [`ScoreSummary::description`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreSummaryDescription {
    #[serde(deserialize_with = "null_as_default")]
    pub activity: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub activity_repo: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub activity_user: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub from: String,
    #[serde(deserialize_with = "null_as_default")]
    pub malicious: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub provenance: f64,
    #[serde(rename = "trust-summary", deserialize_with = "null_as_default")]
    pub trust_summary: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub typosquatting: f64,
}

/// Activity score derived from repository and maintainer activity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    #[serde(deserialize_with = "null_as_default")]
    pub score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub description: ActivityDescription,
    pub updated_at: Option<Timestamp>,
}

/// Components of the activity score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityDescription {
    #[serde(rename = "repo", deserialize_with = "null_as_default")]
    pub repository: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub user: f64,
}

/// Likelihood that the package name impersonates a popular one
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typosquatting {
    #[serde(deserialize_with = "null_as_default")]
    pub score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub description: TyposquattingDescription,
    pub updated_at: Option<Timestamp>,
}

/// Details behind the typosquatting score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TyposquattingDescription {
    #[serde(deserialize_with = "null_as_default")]
    pub total_similar_names: i64,
}
