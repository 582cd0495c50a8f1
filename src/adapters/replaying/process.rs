//! Replaying adapter for the `ProcessLauncher` port.

use std::ffi::OsString;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::process::{lossy_argv, ProcessLauncher, ProcessOutput};

/// Replays recorded process results from a cassette without spawning anything.
pub struct ReplayingProcessLauncher {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingProcessLauncher {
    /// Creates a new replaying launcher from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl ProcessLauncher for ReplayingProcessLauncher {
    fn launch(
        &self,
        argv: &[OsString],
        _cwd: &Path,
        _stdin: Option<File>,
    ) -> Result<ProcessOutput, Box<dyn std::error::Error + Send + Sync>> {
        let interaction = {
            let mut replayer = self.replayer.lock().map_err(|_| "replayer lock poisoned")?;
            replayer.next_interaction("process", "launch").clone()
        };

        let recorded_argv: Option<Vec<&str>> = interaction
            .input
            .get("argv")
            .and_then(serde_json::Value::as_array)
            .map(|values| values.iter().filter_map(serde_json::Value::as_str).collect());
        let argv = lossy_argv(argv);
        if recorded_argv.is_some_and(|recorded| recorded != argv) {
            tracing::warn!(seq = interaction.seq, ?argv, "replayed argv differs from recording");
        }

        let output = interaction.output;
        if let Some(err) = output.get("Err") {
            let msg = err.as_str().unwrap_or("unknown error").to_string();
            return Err(msg.into());
        }
        let value = output.get("Ok").unwrap_or(&output).clone();
        Ok(serde_json::from_value(value)?)
    }
}
