//! trusty - Package trust report and dependency diff tool
//!
//! Works offline on saved payloads:
//! - `trusty report <FILE>` summarizes a package report
//! - `trusty diff <OLD> <NEW>` lists newly added dependencies

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use trusty::cli::{CliArgs, Command};
use trusty::domain::{compare_dependencies, diff_dependencies};
use trusty::output::{create_formatter, OutputConfig};
use trusty::report::read_reply;
use trusty::snapshot::read_mapping;

/// Exit code for a report flagging the package as malicious
const EXIT_MALICIOUS: u8 = 2;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.log_filter());

    if args.no_color {
        colored::control::set_override(false);
    }

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr subscriber; `RUST_LOG` takes precedence over the flags
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet, args.no_color);
    let formatter = create_formatter(output_config);
    let mut stdout = io::stdout().lock();

    let exit_code = match &args.command {
        Command::Report { path } => {
            let reply = read_reply(path)?;
            formatter.format_reply(&reply, &mut stdout)?;

            if reply.is_malicious() {
                tracing::warn!(package = %reply.package_name, "package is flagged as malicious");
                ExitCode::from(EXIT_MALICIOUS)
            } else {
                ExitCode::SUCCESS
            }
        }
        Command::Diff { old, new, all } => {
            let old_deps = read_mapping(old)?;
            let new_deps = read_mapping(new)?;

            if *all {
                let changes = compare_dependencies(&old_deps, &new_deps);
                formatter.format_changes(&changes, &mut stdout)?;
            } else {
                let added = diff_dependencies(&old_deps, &new_deps);
                formatter.format_additions(&added, &mut stdout)?;
            }
            ExitCode::SUCCESS
        }
    };

    stdout.flush()?;
    Ok(exit_code)
}
