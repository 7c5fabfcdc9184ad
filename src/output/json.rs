//! JSON output formatter for machine processing
//!
//! Verbose mode re-emits the whole decoded report; other modes emit a
//! condensed summary.

use crate::domain::{DependencyChanges, DependencyMap};
use crate::output::{OutputFormatter, Verbosity};
use crate::report::Reply;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    fn write_json<T: Serialize>(value: &T, writer: &mut dyn Write) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}

/// Condensed report
#[derive(Serialize)]
struct JsonReport<'a> {
    package_name: &'a str,
    package_type: &'a str,
    package_version: &'a str,
    status: &'static str,
    score: Option<f64>,
    malicious: bool,
    deprecated: bool,
    archived: bool,
    components: JsonComponents,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    alternatives: Vec<JsonAlternative<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_at: Option<String>,
}

/// Per-signal scores, null when the block is absent
#[derive(Serialize)]
struct JsonComponents {
    activity: Option<f64>,
    provenance: Option<f64>,
    typosquatting: Option<f64>,
}

#[derive(Serialize)]
struct JsonAlternative<'a> {
    name: &'a str,
    score: f64,
}

/// Additions-only diff
#[derive(Serialize)]
struct JsonAdditions<'a> {
    count: usize,
    added: &'a DependencyMap,
}

impl JsonFormatter {
    fn condensed<'a>(&self, reply: &'a Reply) -> JsonReport<'a> {
        JsonReport {
            package_name: &reply.package_name,
            package_type: &reply.package_type,
            package_version: &reply.package_version,
            status: reply.status.as_str(),
            score: reply.score(),
            malicious: reply.is_malicious(),
            deprecated: reply.is_deprecated(),
            archived: reply.is_archived(),
            components: JsonComponents {
                activity: reply.activity.as_ref().map(|a| a.score),
                provenance: reply.provenance.as_ref().map(|p| p.score),
                typosquatting: reply.typosquatting.as_ref().map(|t| t.score),
            },
            alternatives: reply
                .alternatives
                .ranked()
                .into_iter()
                .map(|alt| JsonAlternative {
                    name: &alt.package_name,
                    score: alt.score,
                })
                .collect(),
            updated_at: reply.summary.updated_at.map(|ts| ts.to_canonical()),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_reply(&self, reply: &Reply, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Verbose {
            Self::write_json(reply, writer)
        } else {
            Self::write_json(&self.condensed(reply), writer)
        }
    }

    fn format_additions(
        &self,
        added: &DependencyMap,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let output = JsonAdditions {
            count: added.len(),
            added,
        };
        Self::write_json(&output, writer)
    }

    fn format_changes(
        &self,
        changes: &DependencyChanges,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        Self::write_json(changes, writer)
    }
}
