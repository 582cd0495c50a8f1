//! Core library entry for the `simple-test` runner.
//!
//! [`runner::Runner`] drives the SIMPLE compiler (`./sc`, or `$SC`) in one
//! of its three output modes and hands back the command line it ran together
//! with the captured output.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod ports;
pub mod quote;
pub mod runner;

use clap::Parser;

/// Run the CLI with the provided arguments and return the tool's exit code.
///
/// `--help` and `--version` print to stdout and return `0`.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or the tool cannot be
/// run.
pub fn run<I, T>(args: I) -> Result<i32, String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            err.print().map_err(|e| e.to_string())?;
            return Ok(0);
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command)
}
