//! `validate-profile <profile-path>`
//!
//! Exit code 0 when the profile is valid (warnings allowed), 1 when it is
//! invalid or cannot be loaded.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::debug;

use deploykit_cli::{color_enabled, init_tracing, parse_args};
use deploykit_core::{load_profile, render_report, validate_profile};

/// Validate a client profile JSON file before deployment
#[derive(Parser, Debug)]
#[command(name = "validate-profile", version)]
struct Cli {
    /// Path to the client profile JSON file
    #[arg(value_name = "PROFILE_PATH")]
    profile: PathBuf,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = match parse_args::<Cli>() {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    match run(&cli.profile) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{} {}", "Error:".red(), err);
            ExitCode::FAILURE
        }
    }
}

/// Load, validate and print. Returns whether the profile is valid.
fn run(profile: &Path) -> Result<bool> {
    let path = if profile.is_absolute() {
        profile.to_path_buf()
    } else {
        std::env::current_dir()
            .context("Failed to resolve current directory")?
            .join(profile)
    };

    let document = load_profile(&path)?;
    let report = validate_profile(&document);
    debug!(valid = report.is_valid(), "Validation finished");

    print!("{}", render_report(&path, &report, color_enabled()));
    Ok(report.is_valid())
}
