use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// A synthesized value for one field of a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(value) => Some(*value),
            _ => None,
        }
    }

    /// Keep at most `max_len` leading characters of textual values.
    pub fn truncated(self, max_len: usize) -> Self {
        match self {
            FieldValue::Text(value) if value.chars().count() > max_len => {
                FieldValue::Text(value.chars().take(max_len).collect())
            }
            other => other,
        }
    }

    /// Render for a CSV cell; null becomes an empty cell.
    pub fn to_csv(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Bool(value) => value.to_string(),
            FieldValue::Int(value) => value.to_string(),
            FieldValue::Float(value) => value.to_string(),
            FieldValue::Text(value) => value.clone(),
            FieldValue::Date(value) => value.format("%Y-%m-%d").to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Null => serializer.serialize_unit(),
            FieldValue::Bool(value) => serializer.serialize_bool(*value),
            FieldValue::Int(value) => serializer.serialize_i64(*value),
            FieldValue::Float(value) => serializer.serialize_f64(*value),
            FieldValue::Text(value) => serializer.serialize_str(value),
            FieldValue::Date(value) => serializer.collect_str(&value.format("%Y-%m-%d")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_is_idempotent_and_never_pads() {
        let value = FieldValue::Text("abcdefgh".to_string());
        let once = value.clone().truncated(3);
        let twice = once.clone().truncated(3);
        assert_eq!(once, FieldValue::Text("abc".to_string()));
        assert_eq!(once, twice);

        let short = FieldValue::Text("ab".to_string()).truncated(5);
        assert_eq!(short, FieldValue::Text("ab".to_string()));
    }

    #[test]
    fn truncation_leaves_non_text_values_alone() {
        assert_eq!(FieldValue::Int(123456).truncated(2), FieldValue::Int(123456));
        assert_eq!(FieldValue::Null.truncated(0), FieldValue::Null);
    }

    #[test]
    fn null_renders_as_empty_csv_cell() {
        assert_eq!(FieldValue::Null.to_csv(), "");
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap_or_default();
        assert_eq!(FieldValue::Date(date).to_csv(), "2024-03-09");
    }
}
