//! Shared plumbing for the deploykit binaries.

pub mod logging;

pub use logging::init_tracing;

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

/// Parse command-line arguments.
///
/// Help and version output exit 0. Any usage error is printed to stderr
/// and exits 1 so pipelines see a single failure code.
pub fn parse_args<T: Parser>() -> Result<T, ExitCode> {
    parse_args_from::<T, _, _>(std::env::args_os())
}

pub fn parse_args_from<T, I, A>(args: I) -> Result<T, ExitCode>
where
    T: Parser,
    I: IntoIterator<Item = A>,
    A: Into<std::ffi::OsString> + Clone,
{
    T::try_parse_from(args).map_err(|err| {
        let _ = err.print();
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        }
    })
}

/// Whether stdout output should carry ANSI colours (honours NO_COLOR/CLICOLOR)
pub fn color_enabled() -> bool {
    colored::control::SHOULD_COLORIZE.should_colorize()
}
