//! Runs the tool in one of its output modes.
//!
//! The runner resolves the target path against the working directory, builds
//! the argument vector for the requested mode, and either passes the path as
//! the final argument or binds the opened file to the tool's stdin. The
//! reconstructed command line is kept for display; execution never goes
//! through a shell.

use std::ffi::OsString;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::config::ToolConfig;
use crate::error::RunError;
use crate::ports::process::{lossy_argv, ProcessLauncher};
use crate::quote;

/// Output mode selected by the tool's single flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the token stream.
    Scan,
    /// Print the concrete syntax tree.
    Cst,
    /// Print the symbol table.
    SymbolTable,
}

impl Mode {
    /// The command-line flag for this mode.
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Scan => "-s",
            Self::Cst => "-c",
            Self::SymbolTable => "-t",
        }
    }
}

/// What a finished tool invocation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// Shell-readable rendering of the command that ran.
    pub cmd: String,
    /// Captured standard output, byte for byte.
    pub stdout: Vec<u8>,
    /// Captured standard error, byte for byte.
    pub stderr: Vec<u8>,
    /// Exit code, or `-1` if the tool was killed by a signal.
    pub exit_code: i32,
}

impl RunResult {
    /// Whether the tool exited with status zero.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Invokes the tool through a [`ProcessLauncher`].
pub struct Runner<'a> {
    launcher: &'a dyn ProcessLauncher,
    config: ToolConfig,
    cwd: PathBuf,
}

impl<'a> Runner<'a> {
    /// Creates a runner rooted at the process's current directory.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::CurrentDir`] if the current directory is unavailable.
    pub fn new(launcher: &'a dyn ProcessLauncher, config: ToolConfig) -> Result<Self, RunError> {
        let cwd = std::env::current_dir().map_err(RunError::CurrentDir)?;
        Ok(Self::with_cwd(launcher, config, cwd))
    }

    /// Creates a runner rooted at `cwd`.
    ///
    /// Target paths are made relative to `cwd`, relative paths are opened
    /// against it, and the tool itself runs there. When `cwd` differs from the
    /// process's current directory, how a relative executable such as `./sc`
    /// is located is platform-specific (see [`std::process::Command`]).
    #[must_use]
    pub fn with_cwd(
        launcher: &'a dyn ProcessLauncher,
        config: ToolConfig,
        cwd: impl Into<PathBuf>,
    ) -> Self {
        Self { launcher, config, cwd: cwd.into() }
    }

    /// Runs the tool in `mode` on `file`.
    ///
    /// With `as_stdin` the path is left off the argument vector and the file
    /// is streamed through stdin instead; otherwise stdin is the null device.
    /// A non-zero exit is reported through [`RunResult::exit_code`], not as an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened for stdin or the tool
    /// cannot be launched.
    pub fn run(&self, mode: Mode, file: &Path, as_stdin: bool) -> Result<RunResult, RunError> {
        let target = relative_to(file, &self.cwd);

        let mut argv = vec![OsString::from(&self.config.executable), OsString::from(mode.flag())];
        let (cmd, stdin) = if as_stdin {
            let input = File::open(self.cwd.join(&target))
                .map_err(|source| RunError::OpenInput { path: target.clone(), source })?;
            let cmd = format!("{} < {}", quote::join(&lossy_argv(&argv)), target.display());
            (cmd, Some(input))
        } else {
            argv.push(target.into_os_string());
            (quote::join(&lossy_argv(&argv)), None)
        };

        tracing::debug!(%cmd, cwd = %self.cwd.display(), "launching tool");
        let output = self.launcher.launch(&argv, &self.cwd, stdin).map_err(|source| {
            RunError::Launch { program: self.config.executable.clone(), source }
        })?;
        tracing::debug!(exit_code = output.exit_code, "tool finished");

        Ok(RunResult {
            cmd,
            stdout: output.stdout,
            stderr: output.stderr,
            exit_code: output.exit_code,
        })
    }

    /// Runs the scanner (`-s`) on `file`.
    ///
    /// # Errors
    ///
    /// See [`Runner::run`].
    pub fn run_scanner(&self, file: &Path, as_stdin: bool) -> Result<RunResult, RunError> {
        self.run(Mode::Scan, file, as_stdin)
    }

    /// Builds the concrete syntax tree (`-c`) for `file`.
    ///
    /// # Errors
    ///
    /// See [`Runner::run`].
    pub fn run_cst(&self, file: &Path, as_stdin: bool) -> Result<RunResult, RunError> {
        self.run(Mode::Cst, file, as_stdin)
    }

    /// Builds the symbol table (`-t`) for `file`.
    ///
    /// # Errors
    ///
    /// See [`Runner::run`].
    pub fn run_symbol_table(&self, file: &Path, as_stdin: bool) -> Result<RunResult, RunError> {
        self.run(Mode::SymbolTable, file, as_stdin)
    }
}

/// Expresses `path` relative to `base`, or returns it unchanged when it does
/// not live under `base`.
#[must_use]
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    match path.strip_prefix(base) {
        Ok(rest) if rest.as_os_str().is_empty() => PathBuf::from("."),
        Ok(rest) => rest.to_path_buf(),
        Err(_) => path.to_path_buf(),
    }
}
