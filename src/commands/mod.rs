//! Command dispatch and handlers.

pub mod run;

use std::env;
use std::path::PathBuf;

use crate::cli::Command;
use crate::context::ServiceContext;

/// Env var naming a cassette to replay instead of launching the tool.
pub const REPLAY_ENV_VAR: &str = "SIMPLE_TEST_REPLAY";

/// Env var naming a cassette file to record the session into.
pub const RECORD_ENV_VAR: &str = "SIMPLE_TEST_RECORD";

/// Dispatch a parsed command to its handler and return the tool's exit code.
///
/// When `SIMPLE_TEST_REPLAY` is set, launches are served from that cassette.
/// Otherwise, when `SIMPLE_TEST_RECORD` is set, launches run for real and are
/// recorded to that path once the command completes.
///
/// # Errors
///
/// Returns an error string if the cassette cannot be loaded or the tool
/// cannot be run.
pub fn dispatch(command: &Command) -> Result<i32, String> {
    let ctx = if let Ok(path) = env::var(REPLAY_ENV_VAR) {
        ServiceContext::replaying(&PathBuf::from(path))?
    } else if let Ok(path) = env::var(RECORD_ENV_VAR) {
        ServiceContext::recording(&PathBuf::from(path))
    } else {
        ServiceContext::live()
    };

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    run::run_with_context(
        &ctx,
        command.mode(),
        command.args(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
}
