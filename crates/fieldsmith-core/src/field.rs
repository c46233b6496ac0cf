use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Declared value type of an output column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Date,
    Email,
    Phone,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
            FieldType::Email => "email",
            FieldType::Phone => "phone",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strategy used to synthesize values for a field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStrategy {
    /// Always the configured literal.
    Static,
    /// Integer drawn from an inclusive range.
    Range,
    /// Value drawn from a manual list or a CSV column.
    Lookup,
    /// Random string with a bounded length, post-processed by type.
    Minmax,
    /// Placeholder template expanded at synthesis time.
    Pattern,
    /// Any strategy tag this version does not know.
    #[serde(other)]
    Unknown,
}

/// Source of candidate values for lookup fields.
///
/// Exactly one source is active at a time; switching replaces the other.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum LookupSource {
    /// Values typed in by the operator, in declaration order.
    Manual { values: Vec<String> },
    /// An uploaded tabular dataset; the first row is the header.
    Csv {
        data: Vec<Vec<String>>,
        column: String,
    },
}

/// Strategy-specific settings of a field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_max: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lookup: Option<LookupSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Template with `{UPPER}`, `{lower}`, `{digit}` and `{random}` placeholders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl FieldSettings {
    /// Use a manual list as the lookup source, dropping any CSV source.
    pub fn set_lookup_values(&mut self, values: Vec<String>) {
        self.lookup = Some(LookupSource::Manual { values });
    }

    /// Use a CSV grid and column as the lookup source, dropping any manual list.
    pub fn set_csv_source(&mut self, data: Vec<Vec<String>>, column: impl Into<String>) {
        self.lookup = Some(LookupSource::Csv {
            data,
            column: column.into(),
        });
    }

    /// Select the CSV column, keeping already uploaded rows.
    pub fn set_csv_column(&mut self, column: impl Into<String>) {
        let column = column.into();
        match &mut self.lookup {
            Some(LookupSource::Csv { column: current, .. }) => *current = column,
            _ => {
                self.lookup = Some(LookupSource::Csv {
                    data: Vec::new(),
                    column,
                })
            }
        }
    }

    pub fn clear_lookup(&mut self) {
        self.lookup = None;
    }

    pub fn lookup_values(&self) -> Option<&[String]> {
        match &self.lookup {
            Some(LookupSource::Manual { values }) => Some(values),
            _ => None,
        }
    }

    pub fn csv_data(&self) -> Option<&[Vec<String>]> {
        match &self.lookup {
            Some(LookupSource::Csv { data, .. }) => Some(data),
            _ => None,
        }
    }

    pub fn csv_column(&self) -> Option<&str> {
        match &self.lookup {
            Some(LookupSource::Csv { column, .. }) => Some(column),
            _ => None,
        }
    }
}

/// One declared output column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    /// Opaque identifier, stable for the lifetime of a configuration session.
    pub id: String,
    /// Output key. Fields with an empty name are ignored by generation.
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Unrecognized tags are accepted and take the fallback strategy.
    #[schemars(with = "String")]
    pub data_type: GenerationStrategy,
    #[serde(default)]
    pub required: bool,
    /// Hard cap applied to synthesized text by truncation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_field_length: Option<usize>,
    #[serde(default)]
    pub generate_negative_tests: bool,
    #[serde(default)]
    pub config: FieldSettings,
}

impl FieldConfig {
    /// Create a field with a fresh id and default settings.
    pub fn new(
        name: impl Into<String>,
        field_type: FieldType,
        data_type: GenerationStrategy,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            field_type,
            data_type,
            required: false,
            max_field_length: None,
            generate_negative_tests: false,
            config: FieldSettings::default(),
        }
    }

    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }

    /// Whether the name collides with a record metadata key.
    pub fn is_reserved(&self) -> bool {
        crate::record::is_reserved_key(&self.name)
    }

    /// Whether generation should consider this field at all.
    pub fn is_generated(&self) -> bool {
        self.is_named() && !self.is_reserved()
    }

    /// Apply a partial update; only keys present in the patch are replaced.
    pub fn apply(&mut self, patch: FieldPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(field_type) = patch.field_type {
            self.field_type = field_type;
        }
        if let Some(data_type) = patch.data_type {
            self.data_type = data_type;
        }
        if let Some(required) = patch.required {
            self.required = required;
        }
        if let Some(max_field_length) = patch.max_field_length {
            self.max_field_length = max_field_length;
        }
        if let Some(flag) = patch.generate_negative_tests {
            self.generate_negative_tests = flag;
        }
        if let Some(config) = patch.config {
            self.config = config;
        }
    }
}

/// Partial update for a [`FieldConfig`].
///
/// `max_field_length: Some(None)` clears the cap; `None` leaves it untouched.
#[derive(Debug, Clone, Default)]
pub struct FieldPatch {
    pub name: Option<String>,
    pub field_type: Option<FieldType>,
    pub data_type: Option<GenerationStrategy>,
    pub required: Option<bool>,
    pub max_field_length: Option<Option<usize>>,
    pub generate_negative_tests: Option<bool>,
    pub config: Option<FieldSettings>,
}

/// Ordered working list of field configurations owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldConfigSet {
    fields: Vec<FieldConfig>,
}

impl FieldConfigSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field and return its id.
    pub fn add(&mut self, field: FieldConfig) -> String {
        let id = field.id.clone();
        self.fields.push(field);
        id
    }

    pub fn get(&self, id: &str) -> Option<&FieldConfig> {
        self.fields.iter().find(|field| field.id == id)
    }

    pub fn patch(&mut self, id: &str, patch: FieldPatch) -> Result<&FieldConfig> {
        let field = self
            .fields
            .iter_mut()
            .find(|field| field.id == id)
            .ok_or_else(|| Error::UnknownField(id.to_string()))?;
        field.apply(patch);
        Ok(field)
    }

    pub fn remove(&mut self, id: &str) -> Result<FieldConfig> {
        let index = self
            .fields
            .iter()
            .position(|field| field.id == id)
            .ok_or_else(|| Error::UnknownField(id.to_string()))?;
        Ok(self.fields.remove(index))
    }

    pub fn as_slice(&self) -> &[FieldConfig] {
        &self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldConfig> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_vec(self) -> Vec<FieldConfig> {
        self.fields
    }
}

impl From<Vec<FieldConfig>> for FieldConfigSet {
    fn from(fields: Vec<FieldConfig>) -> Self {
        Self { fields }
    }
}

impl<'a> IntoIterator for &'a FieldConfigSet {
    type Item = &'a FieldConfig;
    type IntoIter = std::slice::Iter<'a, FieldConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
