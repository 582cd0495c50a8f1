//! Service context bundling the port trait objects.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::adapters::live::LiveProcessLauncher;
use crate::adapters::recording::RecordingProcessLauncher;
use crate::adapters::replaying::ReplayingProcessLauncher;
use crate::cassette::format::Cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::process::ProcessLauncher;

/// Bundles the port trait objects into a single context.
///
/// Constructors wire up different adapter implementations (live, replaying,
/// recording).
pub struct ServiceContext {
    /// Launcher used to run the tool.
    pub process: Box<dyn ProcessLauncher>,
    /// Optional cassette recorder; written to disk on drop.
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Creates a live context that spawns real processes.
    #[must_use]
    pub fn live() -> Self {
        Self { process: Box::new(LiveProcessLauncher), recorder: None }
    }

    /// Creates a recording context that writes a cassette file on drop.
    ///
    /// Uses the live launcher for actual work. This is the mechanism behind
    /// the `SIMPLE_TEST_RECORD` env var.
    #[must_use]
    pub fn recording(path: &Path) -> Self {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            path,
            "simple-test-session",
            commit_hash(),
        )));
        Self {
            process: Box::new(RecordingProcessLauncher::new(
                Box::new(LiveProcessLauncher),
                Arc::clone(&recorder),
            )),
            recorder: Some(recorder),
        }
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        Ok(Self {
            process: Box::new(ReplayingProcessLauncher::new(CassetteReplayer::new(&cassette))),
            recorder: None,
        })
    }
}

impl Drop for ServiceContext {
    fn drop(&mut self) {
        let Some(recorder) = self.recorder.take() else {
            return;
        };
        // Release the adapter's handle so the recorder can be unwrapped.
        self.process = Box::new(LiveProcessLauncher);

        let recorder = match Arc::try_unwrap(recorder) {
            Ok(mutex) => mutex.into_inner().unwrap_or_else(std::sync::PoisonError::into_inner),
            Err(_) => {
                tracing::warn!("recorder still shared; cassette not written");
                return;
            }
        };
        match recorder.finish() {
            Ok(path) => tracing::info!(path = %path.display(), "cassette written"),
            Err(e) => tracing::warn!("failed to write cassette: {e}"),
        }
    }
}

/// Get the current git commit hash, or "unknown" if unavailable.
fn commit_hash() -> String {
    std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map_or_else(
            || {
                tracing::debug!("could not read git commit hash, using 'unknown'");
                "unknown".to_string()
            },
            |s| s.trim().to_string(),
        )
}
