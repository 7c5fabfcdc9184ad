//! CLI argument parsing module for trusty

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect saved package reports and dependency snapshots
#[derive(Parser, Debug, Clone)]
#[command(name = "trusty", version, about = "Package trust report and dependency diff tool")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output and debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Summarize a saved report payload
    Report {
        /// Path to the report JSON file
        path: PathBuf,
    },

    /// List dependencies added between two snapshots
    Diff {
        /// Snapshot before the change
        old: PathBuf,

        /// Snapshot after the change
        new: PathBuf,

        /// Also report removals and version changes
        #[arg(long)]
        all: bool,
    },
}

impl CliArgs {
    /// Default log filter derived from the verbosity flags
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "trusty=debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_report_command() {
        let args = CliArgs::parse_from(["trusty", "report", "reply.json"]);
        assert_eq!(
            args.command,
            Command::Report {
                path: PathBuf::from("reply.json")
            }
        );
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(!args.json);
        assert!(!args.no_color);
    }

    #[test]
    fn test_diff_command() {
        let args = CliArgs::parse_from(["trusty", "diff", "old.json", "new.json"]);
        assert_eq!(
            args.command,
            Command::Diff {
                old: PathBuf::from("old.json"),
                new: PathBuf::from("new.json"),
                all: false,
            }
        );
    }

    #[test]
    fn test_diff_all_flag() {
        let args = CliArgs::parse_from(["trusty", "diff", "a.json", "b.json", "--all"]);
        assert!(matches!(args.command, Command::Diff { all: true, .. }));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = CliArgs::parse_from(["trusty", "report", "r.json", "--json", "-q"]);
        assert!(args.json);
        assert!(args.quiet);
    }

    #[test]
    fn test_missing_subcommand_fails() {
        assert!(CliArgs::try_parse_from(["trusty"]).is_err());
    }

    #[test]
    fn test_diff_requires_two_paths() {
        assert!(CliArgs::try_parse_from(["trusty", "diff", "old.json"]).is_err());
    }

    #[test]
    fn test_log_filter() {
        let args = CliArgs::parse_from(["trusty", "--verbose", "report", "r.json"]);
        assert_eq!(args.log_filter(), "trusty=debug");

        let args = CliArgs::parse_from(["trusty", "report", "r.json", "--quiet"]);
        assert_eq!(args.log_filter(), "error");

        let args = CliArgs::parse_from(["trusty", "report", "r.json"]);
        assert_eq!(args.log_filter(), "warn");
    }
}
