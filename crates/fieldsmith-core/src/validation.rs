use std::collections::HashSet;

use jsonschema::JSONSchema;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::field::{FieldConfig, GenerationStrategy, LookupSource};
use crate::schema::fields_json_schema;

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// Structured validation issue with location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub code: String,
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(
        severity: IssueSeverity,
        code: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            code: code.into(),
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Aggregated validation report with errors and warnings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Returns true when there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push_error(&mut self, issue: ValidationIssue) {
        self.errors.push(issue);
    }

    pub fn push_warning(&mut self, issue: ValidationIssue) {
        self.warnings.push(issue);
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// Validate a field-config JSON document against the `fields.json` JSON Schema.
pub fn validate_fields_json(document: &Value) -> Result<ValidationReport> {
    let schema = serde_json::to_value(fields_json_schema())?;
    let compiled = JSONSchema::compile(&schema).map_err(|err| Error::Schema(err.to_string()))?;

    let mut report = ValidationReport::default();
    if let Err(errors) = compiled.validate(document) {
        for error in errors {
            let path = error.instance_path.to_string();
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "schema_violation",
                if path.is_empty() { "/".to_string() } else { path },
                error.to_string(),
            ));
        }
    }

    Ok(report)
}

/// Check semantic consistency of parsed fields.
///
/// Names that collide with record metadata keys are errors. Everything else
/// has a documented fallback in the engine and is reported as a warning.
pub fn validate_fields(fields: &[FieldConfig]) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut names = HashSet::new();

    for (index, field) in fields.iter().enumerate() {
        let path = format!("/fields/{index}");

        if !field.is_named() {
            report.push_warning(ValidationIssue::new(
                IssueSeverity::Warning,
                "empty_name",
                format!("{path}/name"),
                "field has no name and will be ignored",
            ));
            continue;
        }

        if field.is_reserved() {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "reserved_name",
                format!("{path}/name"),
                format!(
                    "field name '{}' is reserved for record metadata and will be ignored",
                    field.name
                ),
            ));
            continue;
        }

        if !names.insert(field.name.as_str()) {
            report.push_warning(ValidationIssue::new(
                IssueSeverity::Warning,
                "duplicate_name",
                format!("{path}/name"),
                format!("field name '{}' is declared more than once", field.name),
            ));
        }

        let config = &field.config;
        match field.data_type {
            GenerationStrategy::Range => {
                if let (Some(min), Some(max)) = (config.range_min, config.range_max)
                    && min > max
                {
                    report.push_warning(ValidationIssue::new(
                        IssueSeverity::Warning,
                        "range_reversed",
                        format!("{path}/config"),
                        format!("rangeMin {min} is greater than rangeMax {max}"),
                    ));
                }
            }
            GenerationStrategy::Minmax => {
                if let (Some(min), Some(max)) = (config.min_length, config.max_length)
                    && min > max
                {
                    report.push_warning(ValidationIssue::new(
                        IssueSeverity::Warning,
                        "length_reversed",
                        format!("{path}/config"),
                        format!("minLength {min} is greater than maxLength {max}"),
                    ));
                }
            }
            GenerationStrategy::Lookup => match &config.lookup {
                None => report.push_warning(ValidationIssue::new(
                    IssueSeverity::Warning,
                    "lookup_without_source",
                    format!("{path}/config/lookup"),
                    "lookup field has no source and will generate empty values",
                )),
                Some(LookupSource::Csv { data, column }) => {
                    let found = data
                        .first()
                        .is_some_and(|header| header.iter().any(|cell| cell.trim() == column));
                    if !found {
                        report.push_warning(ValidationIssue::new(
                            IssueSeverity::Warning,
                            "lookup_column_missing",
                            format!("{path}/config/lookup/column"),
                            format!("column '{column}' not found in CSV header"),
                        ));
                    }
                }
                Some(LookupSource::Manual { .. }) => {}
            },
            GenerationStrategy::Pattern => {
                if config.pattern.as_deref().is_none_or(str::is_empty) {
                    report.push_warning(ValidationIssue::new(
                        IssueSeverity::Warning,
                        "pattern_missing",
                        format!("{path}/config/pattern"),
                        "pattern field has no template",
                    ));
                }
            }
            GenerationStrategy::Unknown => report.push_warning(ValidationIssue::new(
                IssueSeverity::Warning,
                "unknown_strategy",
                format!("{path}/dataType"),
                "unknown generation strategy; a random fallback value is used",
            )),
            GenerationStrategy::Static => {}
        }
    }

    report
}
