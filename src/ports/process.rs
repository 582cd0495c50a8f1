//! Process launcher port for running the external tool.

use std::ffi::OsString;
use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// The captured result of a finished child process.
///
/// Output is kept as the raw bytes the child wrote. Cassettes store each
/// stream as text when it is valid UTF-8 and as a byte list otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutput {
    /// The exit code of the process, or `-1` if it was killed by a signal.
    pub exit_code: i32,
    /// The captured standard output.
    #[serde(with = "text_or_bytes")]
    pub stdout: Vec<u8>,
    /// The captured standard error.
    #[serde(with = "text_or_bytes")]
    pub stderr: Vec<u8>,
}

/// Launches a program with an explicit argument vector.
///
/// No shell is involved: `argv[0]` is the program and the remaining elements
/// are passed through untouched. Abstracting the launch lets the runner be
/// exercised without the real tool and lets sessions be recorded and replayed.
pub trait ProcessLauncher: Send + Sync {
    /// Runs `argv` to completion inside `cwd`, capturing stdout and stderr.
    ///
    /// When `stdin` is `Some`, the file becomes the child's standard input;
    /// otherwise the child reads from the null device. The file handle is
    /// consumed and closed by the time this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if `argv` is empty or the process cannot be spawned.
    fn launch(
        &self,
        argv: &[OsString],
        cwd: &Path,
        stdin: Option<File>,
    ) -> Result<ProcessOutput, Box<dyn std::error::Error + Send + Sync>>;
}

/// Renders `argv` as UTF-8 strings for cassettes and log lines.
///
/// Invalid sequences become U+FFFD; the argument vector that is actually
/// launched is never converted.
#[must_use]
pub fn lossy_argv(argv: &[OsString]) -> Vec<String> {
    argv.iter().map(|arg| arg.to_string_lossy().into_owned()).collect()
}

mod text_or_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Stream {
        Text(String),
        Bytes(Vec<u8>),
    }

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        match std::str::from_utf8(bytes) {
            Ok(text) => serializer.serialize_str(text),
            Err(_) => serializer.collect_seq(bytes),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        Ok(match Stream::deserialize(deserializer)? {
            Stream::Text(text) => text.into_bytes(),
            Stream::Bytes(bytes) => bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(stdout: &[u8]) -> ProcessOutput {
        ProcessOutput { exit_code: 0, stdout: stdout.to_vec(), stderr: b"warn\n".to_vec() }
    }

    #[test]
    fn utf8_output_serializes_as_text() {
        let value = serde_json::to_value(output(b"IDENT foo\n")).unwrap();
        assert_eq!(value["stdout"], "IDENT foo\n");
        assert_eq!(value["stderr"], "warn\n");
    }

    #[test]
    fn non_utf8_output_survives_a_yaml_cassette() {
        let original = output(b"caf\xe9\n");
        let yaml = serde_yaml::to_string(&original).unwrap();
        let value = serde_json::to_value(&original).unwrap();
        assert_eq!(value["stdout"], serde_json::json!([99, 97, 102, 233, 10]));

        let restored: ProcessOutput = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(restored, original);
    }
}
