//! Text output formatter for human-readable display
//!
//! This module provides:
//! - A report overview with per-signal scores
//! - Advisory, deprecation and archival warnings
//! - Dependency additions and version changes with bump labels

use crate::domain::{DependencyChanges, DependencyMap, VersionChangeType};
use crate::output::{OutputFormatter, Verbosity};
use crate::report::Reply;
use colored::Colorize;
use std::io::Write;

/// Get the display label with color
fn colored_label(change: VersionChangeType) -> String {
    match change {
        VersionChangeType::Major => "major".red().bold().to_string(),
        VersionChangeType::Minor => "minor".yellow().to_string(),
        VersionChangeType::Patch => "patch".green().to_string(),
        VersionChangeType::Unknown => "?".dimmed().to_string(),
    }
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn score_display(score: Option<f64>) -> String {
        score
            .map(|s| format!("{:.1}", s))
            .unwrap_or_else(|| "-".to_string())
    }

    /// Format a single `label score (detail)` line
    fn format_signal_line(
        &self,
        label: &str,
        score: Option<f64>,
        detail: Option<String>,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let score = Self::score_display(score);
        let detail = detail.map(|d| format!(" ({})", d)).unwrap_or_default();

        if self.color {
            writeln!(
                writer,
                "  {:14} {}{}",
                label,
                score.bright_white().bold(),
                detail.dimmed()
            )
        } else {
            writeln!(writer, "  {:14} {}{}", label, score, detail)
        }
    }

    fn format_warning(&self, message: &str, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.color {
            writeln!(writer, "  {} {}", "!".red().bold(), message.red())
        } else {
            writeln!(writer, "  ! {}", message)
        }
    }

    fn format_header(&self, reply: &Reply, writer: &mut dyn Write) -> std::io::Result<()> {
        let ident = format!("{}@{}", reply.package_name, reply.package_version);
        if self.color {
            writeln!(
                writer,
                "{} {} — {}",
                ident.bold(),
                format!("({})", reply.package_type).dimmed(),
                reply.status.as_str().cyan()
            )
        } else {
            writeln!(
                writer,
                "{} ({}) — {}",
                ident, reply.package_type, reply.status
            )
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_reply(&self, reply: &Reply, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return writeln!(
                writer,
                "{}@{} {}{}",
                reply.package_name,
                reply.package_version,
                Self::score_display(reply.score()),
                if reply.is_malicious() { " malicious" } else { "" }
            );
        }

        self.format_header(reply, writer)?;

        self.format_signal_line("score", reply.score(), None, writer)?;
        if let Some(activity) = &reply.activity {
            let detail = format!(
                "repo {:.1}, user {:.1}",
                activity.description.repository, activity.description.user
            );
            self.format_signal_line("activity", Some(activity.score), Some(detail), writer)?;
        }
        if let Some(provenance) = &reply.provenance {
            let detail = provenance.has_sigstore().then(|| "sigstore".to_string());
            self.format_signal_line("provenance", Some(provenance.score), detail, writer)?;
        }
        if let Some(typo) = &reply.typosquatting {
            let detail = format!("{} similar names", typo.description.total_similar_names);
            self.format_signal_line("typosquatting", Some(typo.score), Some(detail), writer)?;
        }

        if let Some(malicious) = &reply.package_data.malicious {
            let published = malicious
                .published
                .map(|ts| format!(", published {}", ts.and_utc().format("%Y/%m/%d")))
                .unwrap_or_default();
            self.format_warning(
                &format!("malicious: {}{}", malicious.summary, published),
                writer,
            )?;
        } else if reply.summary.is_malicious() {
            self.format_warning("malicious", writer)?;
        }
        if reply.is_deprecated() {
            self.format_warning("deprecated", writer)?;
        }
        if reply.is_archived() {
            self.format_warning("repository archived", writer)?;
        }

        if self.verbosity == Verbosity::Verbose {
            let data = &reply.package_data;
            writeln!(writer)?;
            writeln!(writer, "  repository     {}", data.repository_name)?;
            writeln!(writer, "  owner          {}", data.owner.display_name())?;
            writeln!(
                writer,
                "  contributors   {} ({} listed)",
                data.contributor_count,
                data.contributors.len()
            )?;
            writeln!(
                writer,
                "  stars/forks    {}/{}",
                data.stargazers_count, data.forks_count
            )?;
            if let Some(updated) = reply.summary.updated_at {
                writeln!(writer, "  updated        {}", updated)?;
            }
            writeln!(
                writer,
                "  same origin    {}",
                reply.same_origin_packages_count
            )?;
        }

        let alternatives = reply.alternatives.ranked();
        if !alternatives.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "Alternatives:")?;
            let width = alternatives
                .iter()
                .map(|a| a.package_name.len())
                .max()
                .unwrap_or(0)
                .max(20);
            for alt in alternatives {
                writeln!(
                    writer,
                    "  {:width$} {:.1}",
                    alt.package_name,
                    alt.score,
                    width = width
                )?;
            }
        }

        Ok(())
    }

    fn format_additions(
        &self,
        added: &DependencyMap,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.verbosity != Verbosity::Quiet {
            for (name, version) in added {
                if self.color {
                    writeln!(writer, "{} {} {}", "+".green(), name.bold(), version.dimmed())?;
                } else {
                    writeln!(writer, "+ {} {}", name, version)?;
                }
            }
        }

        writeln!(writer, "# {} new dependency(ies)", added.len())
    }

    fn format_changes(
        &self,
        changes: &DependencyChanges,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.verbosity != Verbosity::Quiet {
            for (name, version) in &changes.added {
                if self.color {
                    writeln!(writer, "{} {} {}", "+".green(), name.bold(), version.dimmed())?;
                } else {
                    writeln!(writer, "+ {} {}", name, version)?;
                }
            }
            for (name, version) in &changes.removed {
                if self.color {
                    writeln!(writer, "{} {} {}", "-".red(), name.bold(), version.dimmed())?;
                } else {
                    writeln!(writer, "- {} {}", name, version)?;
                }
            }
            for change in &changes.changed {
                if self.color {
                    writeln!(
                        writer,
                        "{} {} {} {} {} [{}]",
                        "~".yellow(),
                        change.name.bold(),
                        change.from.dimmed(),
                        "→".dimmed(),
                        change.to.bright_white().bold(),
                        colored_label(change.change)
                    )?;
                } else {
                    writeln!(
                        writer,
                        "~ {} {} -> {} [{}]",
                        change.name,
                        change.from,
                        change.to,
                        change.change.label()
                    )?;
                }
            }
        }

        writeln!(
            writer,
            "# {} added, {} removed, {} changed",
            changes.added.len(),
            changes.removed.len(),
            changes.changed.len()
        )
    }
}
