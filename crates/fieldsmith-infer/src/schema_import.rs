//! JSON Schema import.

use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::debug;

use fieldsmith_core::{FieldConfig, FieldType, GenerationStrategy};

use crate::errors::InferError;

/// Map an object schema's `properties` to field configurations, in property order.
pub fn import_json_schema(input: &str) -> Result<Vec<FieldConfig>, InferError> {
    let schema: Value = serde_json::from_str(input)?;
    import_schema_value(&schema)
}

pub fn import_schema_value(schema: &Value) -> Result<Vec<FieldConfig>, InferError> {
    let object = schema
        .as_object()
        .ok_or_else(|| InferError::InvalidSchema("schema must be a JSON object".to_string()))?;

    match type_name(object) {
        Some("object") | None => {}
        Some(kind) => {
            return Err(InferError::InvalidSchema(format!(
                "expected an object schema, found type '{kind}'"
            )));
        }
    }

    let properties = object
        .get("properties")
        .and_then(Value::as_object)
        .ok_or_else(|| InferError::InvalidSchema("schema has no properties".to_string()))?;

    let required: HashSet<&str> = object
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let fields = properties
        .iter()
        .map(|(name, property)| {
            let mut field = match property.as_object() {
                Some(property) => field_from_property(name, property),
                None => {
                    FieldConfig::new(name.as_str(), FieldType::String, GenerationStrategy::Minmax)
                }
            };
            field.required = required.contains(name.as_str());
            debug!(
                field = %field.name,
                field_type = %field.field_type,
                required = field.required,
                "imported schema property"
            );
            field
        })
        .collect();
    Ok(fields)
}

fn field_from_property(name: &str, property: &Map<String, Value>) -> FieldConfig {
    let field_type = field_type(property);

    if let Some(value) = property.get("const") {
        let mut field = FieldConfig::new(name, field_type, GenerationStrategy::Static);
        field.config.static_value = Some(scalar_text(value));
        return field;
    }

    if let Some(values) = property.get("enum").and_then(Value::as_array) {
        let mut field = FieldConfig::new(name, field_type, GenerationStrategy::Lookup);
        let values = values
            .iter()
            .filter(|value| !value.is_null())
            .map(scalar_text)
            .collect();
        field.config.set_lookup_values(values);
        return field;
    }

    match field_type {
        FieldType::Number => {
            let min = bound(property, "minimum", "exclusiveMinimum", 1);
            let max = bound(property, "maximum", "exclusiveMaximum", -1);
            let strategy = if min.is_some() || max.is_some() {
                GenerationStrategy::Range
            } else {
                GenerationStrategy::Minmax
            };
            let mut field = FieldConfig::new(name, field_type, strategy);
            field.config.range_min = min;
            field.config.range_max = max;
            field
        }
        FieldType::String => {
            let mut field = FieldConfig::new(name, field_type, GenerationStrategy::Minmax);
            let min_length = length(property, "minLength");
            let max_length = length(property, "maxLength");
            field.config.min_length = min_length;
            field.config.max_length = max_length;
            field.max_field_length = max_length;
            field
        }
        _ => {
            let mut field = FieldConfig::new(name, field_type, GenerationStrategy::Minmax);
            field.max_field_length = length(property, "maxLength");
            field
        }
    }
}

/// Declared type, skipping `null` in type unions.
fn type_name(object: &Map<String, Value>) -> Option<&str> {
    match object.get("type")? {
        Value::String(kind) => Some(kind.as_str()),
        Value::Array(kinds) => kinds
            .iter()
            .filter_map(Value::as_str)
            .find(|kind| *kind != "null"),
        _ => None,
    }
}

fn field_type(property: &Map<String, Value>) -> FieldType {
    match type_name(property) {
        Some("boolean") => FieldType::Boolean,
        Some("integer" | "number") => FieldType::Number,
        _ => match property.get("format").and_then(Value::as_str) {
            Some("email" | "idn-email") => FieldType::Email,
            Some("date" | "date-time") => FieldType::Date,
            Some("phone" | "tel") => FieldType::Phone,
            _ => FieldType::String,
        },
    }
}

fn bound(
    property: &Map<String, Value>,
    inclusive: &str,
    exclusive: &str,
    step: i64,
) -> Option<i64> {
    let inclusive = property.get(inclusive).and_then(integer);
    let exclusive = property
        .get(exclusive)
        .and_then(integer)
        .map(|value| value.saturating_add(step));
    inclusive.or(exclusive)
}

fn integer(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|value| value.round() as i64))
}

fn length(property: &Map<String, Value>, key: &str) -> Option<usize> {
    property
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|value| usize::try_from(value).ok())
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
