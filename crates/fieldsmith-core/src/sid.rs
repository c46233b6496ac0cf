use serde::{Deserialize, Serialize};

/// One recorded UI interaction from a test script.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidCommand {
    /// Command verb, e.g. `click`, `type`, `password`, `open`.
    pub command: String,
    /// Human-readable field name, when the recorder captured one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub target: String,
    /// Observed sample value.
    #[serde(default)]
    pub value: String,
    /// Carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub randomization: Option<serde_json::Value>,
}

impl SidCommand {
    pub fn new(command: impl Into<String>, label: Option<&str>, value: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            label: label.map(str::to_string),
            target: String::new(),
            value: value.into(),
            randomization: None,
        }
    }

    /// Whether the command enters text into an input.
    pub fn is_input(&self) -> bool {
        matches!(self.command.as_str(), "type" | "password")
    }
}
