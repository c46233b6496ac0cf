//! Serialized exports of a generated record set.

pub mod csv;
pub mod json;

use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fieldsmith_core::{FieldConfig, FieldType};

use crate::errors::GenerationError;
use crate::model::RecordSet;

/// Export serialization format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    /// Format implied by a file extension, if recognized.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = GenerationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(GenerationError::InvalidOptions(format!(
                "unknown export format '{other}'"
            ))),
        }
    }
}

/// Write an export in the given format.
pub fn write_export<W: Write>(
    writer: W,
    format: OutputFormat,
    info: &GenerationInfo,
    records: &RecordSet,
) -> Result<(), GenerationError> {
    match format {
        OutputFormat::Json => self::json::write_json(writer, info, records),
        OutputFormat::Csv => self::csv::write_csv(writer, info, records),
    }
}

/// Name and type of an exported column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

/// Header block of an export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationInfo {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub total_records: usize,
    pub positive_tests: usize,
    pub negative_tests: usize,
    pub fields: Vec<FieldSummary>,
}

impl GenerationInfo {
    pub fn new(
        name: impl Into<String>,
        fields: &[FieldConfig],
        records: &RecordSet,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            created_at,
            total_records: records.len(),
            positive_tests: records.positive_count,
            negative_tests: records.negative_count,
            fields: exported_fields(fields)
                .map(|field| FieldSummary {
                    name: field.name.clone(),
                    field_type: field.field_type,
                })
                .collect(),
        }
    }

    /// Exported column names in declaration order.
    pub fn column_names(&self) -> Vec<&str> {
        self.fields.iter().map(|field| field.name.as_str()).collect()
    }
}

/// Named fields in declaration order, first declaration winning for repeated names.
fn exported_fields(fields: &[FieldConfig]) -> impl Iterator<Item = &FieldConfig> {
    let mut seen = std::collections::HashSet::new();
    fields
        .iter()
        .filter(move |field| field.is_generated() && seen.insert(field.name.as_str()))
}
