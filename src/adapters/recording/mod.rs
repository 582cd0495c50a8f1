//! Recording adapters that capture interactions to cassettes.

pub mod process;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

pub use process::RecordingProcessLauncher;

/// Record a `Result<T, E>` interaction using the Ok/Err JSON convention.
///
/// Convention:
/// - `Ok(v)` is serialized as `{"Ok": v}`
/// - `Err(e)` is serialized as `{"Err": e.to_string()}`
///
/// Values that fail to serialize are recorded as JSON `null` and logged.
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let input_json = to_json(input, port, method);

    let output_json = match result {
        Ok(v) => serde_json::json!({ "Ok": to_json(v, port, method) }),
        Err(e) => serde_json::json!({ "Err": e.to_string() }),
    };

    let Ok(mut guard) = recorder.lock() else {
        tracing::warn!(port, method, "recorder lock poisoned; interaction dropped");
        return;
    };
    guard.record(port, method, input_json, output_json);
}

fn to_json<T: Serialize>(value: &T, port: &str, method: &str) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or_else(|err| {
        tracing::warn!(port, method, %err, "failed to serialize recorded value");
        serde_json::Value::Null
    })
}
