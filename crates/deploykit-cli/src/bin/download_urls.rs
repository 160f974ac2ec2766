//! `download-urls` prints download pages and install commands.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use deploykit_cli::{init_tracing, parse_args};
use deploykit_core::{
    download_info, install_command, install_command_for_current_platform, render_download_info,
    InstallPlatform,
};

/// Show download and install information for the client, CLI and bridge
#[derive(Parser, Debug)]
#[command(name = "download-urls", version)]
struct Cli {
    /// Print the full registry as JSON
    #[arg(long, conflicts_with_all = ["platform", "current"])]
    json: bool,

    /// Print only the CLI install command for a platform
    /// (windows-ps, windows-cmd, unix, npm)
    #[arg(long, value_name = "KEY", conflicts_with = "current")]
    platform: Option<InstallPlatform>,

    /// Print only the CLI install command for this machine
    #[arg(long)]
    current: bool,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = match parse_args::<Cli>() {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "Error:".red(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(download_info())?);
    } else if let Some(platform) = cli.platform {
        println!("{}", install_command(platform));
    } else if cli.current {
        println!("{}", install_command_for_current_platform());
    } else {
        print!("{}", render_download_info(download_info()));
    }
    Ok(())
}
