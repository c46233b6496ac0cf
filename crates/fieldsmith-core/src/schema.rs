use schemars::JsonSchema;
use schemars::schema::RootSchema;
use schemars::schema_for;
use serde::{Deserialize, Serialize};

use crate::field::FieldConfig;

/// On-disk field-config document (`fields.json`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct FieldsDocument {
    /// Contract version for this document format.
    pub version: String,
    pub fields: Vec<FieldConfig>,
}

impl FieldsDocument {
    pub fn new(fields: Vec<FieldConfig>) -> Self {
        Self {
            version: crate::FIELDS_VERSION.to_string(),
            fields,
        }
    }
}

/// Emit the JSON Schema for `fields.json`.
pub fn fields_json_schema() -> RootSchema {
    schema_for!(FieldsDocument)
}
