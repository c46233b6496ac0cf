//! Field proposals from recorded UI tests and JSON Schemas.

pub mod errors;
pub mod inference;
pub mod options;
pub mod recording;
pub mod schema_import;

pub use errors::InferError;
pub use inference::{field_name, infer_fields, propose_field};
pub use options::InferOptions;
pub use recording::parse_recording;
pub use schema_import::import_json_schema;

pub use fieldsmith_core::{FieldConfig, SidCommand};
