//! Live process launcher using `std::process::Command`.

use std::ffi::OsString;
use std::fs::File;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::ports::process::{ProcessLauncher, ProcessOutput};

/// Live launcher that spawns real child processes.
pub struct LiveProcessLauncher;

impl ProcessLauncher for LiveProcessLauncher {
    fn launch(
        &self,
        argv: &[OsString],
        cwd: &Path,
        stdin: Option<File>,
    ) -> Result<ProcessOutput, Box<dyn std::error::Error + Send + Sync>> {
        let (program, args) =
            argv.split_first().ok_or("cannot launch an empty argument vector")?;
        let stdin = stdin.map_or_else(Stdio::null, Stdio::from);
        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(stdin)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;
        Ok(ProcessOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
