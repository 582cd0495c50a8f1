//! `simple-test scan|cst|table` handler.

use std::io::Write;

use crate::cli::RunArgs;
use crate::config::ToolConfig;
use crate::context::ServiceContext;
use crate::runner::{Mode, Runner};

/// Run the tool once and forward its output.
///
/// The tool's stdout and stderr are written verbatim to `out` and `err`.
/// With `--show-command` the reconstructed command line is written to `err`
/// first.
///
/// # Errors
///
/// Returns an error string if the tool cannot be run or output cannot be
/// forwarded.
pub fn run_with_context(
    ctx: &ServiceContext,
    mode: Mode,
    args: &RunArgs,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<i32, String> {
    let runner =
        Runner::new(ctx.process.as_ref(), ToolConfig::from_env()).map_err(|e| e.to_string())?;
    let result = runner.run(mode, &args.file, args.stdin).map_err(|e| e.to_string())?;

    if args.show_command {
        writeln!(err, "$ {}", result.cmd).map_err(|e| format!("Failed to write command: {e}"))?;
    }
    out.write_all(&result.stdout)
        .and_then(|()| out.flush())
        .map_err(|e| format!("Failed to forward stdout: {e}"))?;
    err.write_all(&result.stderr)
        .and_then(|()| err.flush())
        .map_err(|e| format!("Failed to forward stderr: {e}"))?;

    if !result.success() {
        tracing::info!(cmd = %result.cmd, exit_code = result.exit_code, "tool reported failure");
    }
    Ok(result.exit_code)
}
