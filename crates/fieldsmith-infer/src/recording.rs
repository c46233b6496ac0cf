//! Recorded UI test parsing.

use serde::Deserialize;
use serde_json::Value;

use fieldsmith_core::SidCommand;

use crate::errors::InferError;

#[derive(Debug, Deserialize)]
struct RecordedTest {
    #[serde(default)]
    commands: Vec<SidCommand>,
}

/// Accepted recording layouts, tried in declaration order.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordingDocument {
    Project { tests: Vec<RecordedTest> },
    Commands { commands: Vec<SidCommand> },
    Bare(Vec<SidCommand>),
}

/// Parse a recording into its ordered command sequence.
///
/// Accepts a Selenium IDE project (`tests[].commands[]`, tests concatenated in
/// order), an object with a `commands` array, or a bare command array.
pub fn parse_recording(input: &str) -> Result<Vec<SidCommand>, InferError> {
    let value: Value = serde_json::from_str(input)?;
    parse_recording_value(value)
}

pub fn parse_recording_value(value: Value) -> Result<Vec<SidCommand>, InferError> {
    let shape = match &value {
        Value::Array(_) => "command array",
        Value::Object(map) if map.contains_key("tests") => "project",
        Value::Object(map) if map.contains_key("commands") => "command list",
        _ => {
            return Err(InferError::InvalidRecording(
                "expected a project with tests, an object with commands, or a command array"
                    .to_string(),
            ));
        }
    };

    let document: RecordingDocument = serde_json::from_value(value).map_err(|err| {
        InferError::InvalidRecording(format!("malformed {shape}: {err}"))
    })?;

    Ok(match document {
        RecordingDocument::Project { tests } => tests
            .into_iter()
            .flat_map(|test| test.commands)
            .collect(),
        RecordingDocument::Commands { commands } => commands,
        RecordingDocument::Bare(commands) => commands,
    })
}
