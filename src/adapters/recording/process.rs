//! Recording adapter for the `ProcessLauncher` port.

use std::ffi::OsString;
use std::fs::File;
use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::process::lossy_argv;
use crate::ports::{ProcessLauncher, ProcessOutput};

/// Records process launches while delegating to an inner implementation.
pub struct RecordingProcessLauncher {
    inner: Box<dyn ProcessLauncher>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingProcessLauncher {
    /// Creates a new recording launcher wrapping the given implementation.
    pub fn new(inner: Box<dyn ProcessLauncher>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct LaunchInput {
    argv: Vec<String>,
    stdin: bool,
}

impl ProcessLauncher for RecordingProcessLauncher {
    fn launch(
        &self,
        argv: &[OsString],
        cwd: &Path,
        stdin: Option<File>,
    ) -> Result<ProcessOutput, Box<dyn std::error::Error + Send + Sync>> {
        let input = LaunchInput { argv: lossy_argv(argv), stdin: stdin.is_some() };
        let result = self.inner.launch(argv, cwd, stdin);
        record_result(&self.recorder, "process", "launch", &input, &result);
        result
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::adapters::live::LiveProcessLauncher;
    use crate::cassette::format::Cassette;

    #[test]
    fn records_launch_interaction() {
        let dir = std::env::temp_dir().join("simple_test_rec_process");
        std::fs::create_dir_all(&dir).unwrap();
        let cassette_path = dir.join("process.cassette.yaml");

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&cassette_path, "test", "abc")));

        // Scope the adapter so it's dropped before we try to unwrap
        {
            let launcher =
                RecordingProcessLauncher::new(Box::new(LiveProcessLauncher), Arc::clone(&recorder));
            let argv = ["echo", "scan", "foo/bar.sim"].map(OsString::from);
            let result = launcher.launch(&argv, Path::new("."), None);
            assert!(result.is_ok());
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let content = std::fs::read_to_string(&cassette_path).unwrap();
        let cassette: Cassette = serde_yaml::from_str(&content).unwrap();
        assert_eq!(cassette.interactions.len(), 1);

        let interaction = &cassette.interactions[0];
        assert_eq!(interaction.port, "process");
        assert_eq!(interaction.method, "launch");
        assert_eq!(interaction.input["argv"][2], "foo/bar.sim");
        assert_eq!(interaction.input["stdin"], false);
        assert_eq!(interaction.output["Ok"]["stdout"], "scan foo/bar.sim\n");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn records_launch_failure_as_err() {
        let dir = std::env::temp_dir().join("simple_test_rec_process_err");
        std::fs::create_dir_all(&dir).unwrap();
        let cassette_path = dir.join("process.cassette.yaml");

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&cassette_path, "test", "abc")));
        {
            let launcher =
                RecordingProcessLauncher::new(Box::new(LiveProcessLauncher), Arc::clone(&recorder));
            let result = launcher.launch(&[OsString::from("./no-such-sc")], Path::new("."), None);
            assert!(result.is_err());
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let content = std::fs::read_to_string(&cassette_path).unwrap();
        let cassette: Cassette = serde_yaml::from_str(&content).unwrap();
        assert!(cassette.interactions[0].output.get("Err").is_some());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
