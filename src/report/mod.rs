//! Report schema for the package intelligence API
//!
//! Field names match the JSON keys of the API. All blocks decode from
//! partial payloads: absent and `null` are treated the same.

mod alternative;
mod package;
mod provenance;
mod reply;
mod score;

pub use alternative::{Alternative, AlternativesList};
pub use package::{
    MaliciousData, PackageData, User, ORIGIN_OK, VISIBILITY_PRIVATE, VISIBILITY_PUBLIC,
};
pub use provenance::{
    HistoricalProvenance, Provenance, ProvenanceDescription, SigstoreProvenance,
};
pub use reply::{Reply, Status};
pub use score::{
    Activity, ActivityDescription, ScoreSummary, ScoreSummaryDescription, Typosquatting,
    TyposquattingDescription, SUMMARY_KEY_ACTIVITY, SUMMARY_KEY_ACTIVITY_REPO,
    SUMMARY_KEY_ACTIVITY_USER, SUMMARY_KEY_FROM, SUMMARY_KEY_MALICIOUS, SUMMARY_KEY_PROVENANCE,
    SUMMARY_KEY_TRUST_SUMMARY, SUMMARY_KEY_TYPOSQUATTING,
};

use crate::error::ReportError;
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Decodes `null` as the type's default value
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads and decodes a saved report payload
pub fn read_reply(path: &Path) -> Result<Reply, ReportError> {
    let content = std::fs::read(path).map_err(|e| ReportError::read_error(path, e))?;
    tracing::trace!(path = %path.display(), bytes = content.len(), "read report payload");
    Reply::from_slice(&content)
}
