//! Errors surfaced by the runner.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a tool invocation from producing a result.
///
/// A tool that runs and exits non-zero is not an error; its status and
/// stderr are returned in [`crate::runner::RunResult`].
#[derive(Debug, Error)]
pub enum RunError {
    /// The tool could not be spawned.
    #[error("failed to launch `{program}`: {source}")]
    Launch {
        /// Executable that failed to start.
        program: String,
        /// Underlying spawn error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The file to stream through stdin could not be opened.
    #[error("failed to open {} for stdin: {source}", path.display())]
    OpenInput {
        /// Path as it would have appeared in the command.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The working directory could not be read.
    #[error("cannot determine the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}
