//! The root package report

use super::{
    null_as_default, Activity, Alternative, AlternativesList, PackageData, Provenance,
    ScoreSummary, Typosquatting,
};
use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Processing state of a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Queued, nothing computed yet
    #[default]
    Pending,
    /// Scores are being computed
    InProgress,
    /// All scores are available
    Complete,
}

impl Status {
    /// Returns the wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in_progress",
            Status::Complete => "complete",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Response of the package report endpoint
///
/// The optional blocks are independent: a missing provenance block says
/// nothing about activity or typosquatting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reply {
    #[serde(deserialize_with = "null_as_default")]
    pub package_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub package_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub package_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: Status,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: ScoreSummary,
    pub provenance: Option<Provenance>,
    pub activity: Option<Activity>,
    pub typosquatting: Option<Typosquatting>,
    #[serde(deserialize_with = "null_as_default")]
    pub alternatives: AlternativesList,
    #[serde(deserialize_with = "null_as_default")]
    pub package_data: PackageData,
    #[serde(deserialize_with = "null_as_default")]
    pub same_origin_packages_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub similar_package_names: Vec<Alternative>,
}

impl Reply {
    /// Decodes a report payload
    ///
    /// Fails as a whole if any timestamp field is malformed.
    pub fn from_json(payload: &str) -> Result<Self, ReportError> {
        let reply: Reply = serde_json::from_str(payload).map_err(ReportError::decode)?;
        tracing::debug!(
            package = %reply.package_name,
            status = %reply.status,
            "decoded report"
        );
        Ok(reply)
    }

    /// Decodes a report payload from raw bytes
    pub fn from_slice(payload: &[u8]) -> Result<Self, ReportError> {
        let reply: Reply = serde_json::from_slice(payload).map_err(ReportError::decode)?;
        tracing::debug!(package = %reply.package_name, "decoded report");
        Ok(reply)
    }

    /// Returns true once every score is available
    pub fn is_complete(&self) -> bool {
        self.status == Status::Complete
    }

    /// Returns the combined score, if computed
    pub fn score(&self) -> Option<f64> {
        self.summary.score
    }

    /// Returns true when the package carries an advisory or a malicious flag
    pub fn is_malicious(&self) -> bool {
        self.package_data.is_malicious() || self.summary.is_malicious()
    }

    /// Returns true when the package is marked deprecated
    pub fn is_deprecated(&self) -> bool {
        self.package_data.deprecated
    }

    /// Returns true when the source repository is archived
    pub fn is_archived(&self) -> bool {
        self.package_data.archived
    }
}
