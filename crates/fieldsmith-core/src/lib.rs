//! Core contracts for fieldsmith.
//!
//! This crate defines the field-configuration model, recorded UI commands,
//! generated values and records, and validation of field-config documents
//! shared by the inference, generation and CLI crates.

pub mod error;
pub mod field;
pub mod record;
pub mod schema;
pub mod sid;
pub mod validation;
pub mod value;

pub use error::{Error, Result};
pub use field::{
    FieldConfig, FieldConfigSet, FieldPatch, FieldSettings, FieldType, GenerationStrategy,
    LookupSource,
};
pub use record::{GeneratedRecord, NegativeKind, RESERVED_KEYS, TestType, is_reserved_key};
pub use schema::{FieldsDocument, fields_json_schema};
pub use sid::SidCommand;
pub use validation::{
    IssueSeverity, ValidationIssue, ValidationReport, validate_fields, validate_fields_json,
};
pub use value::FieldValue;

/// Current contract version for field-config documents.
pub const FIELDS_VERSION: &str = "0.1";
