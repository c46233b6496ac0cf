use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::value::FieldValue;

/// Metadata keys written into every serialized record; no field may use them.
pub const RESERVED_KEYS: [&str; 3] = ["_testType", "_targetField", "_autoSelected"];

pub fn is_reserved_key(name: &str) -> bool {
    RESERVED_KEYS.contains(&name)
}

/// Kind of deliberately invalid value injected into a negative record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NegativeKind {
    Empty,
    Null,
    TooLong,
    ExceedLength,
    SpecialChars,
    SqlInjection,
    InvalidFormat,
    MissingAt,
    MissingDomain,
    TooShort,
    Letters,
    StringValue,
    Negative,
    Decimal,
    Overflow,
    BelowMin,
    AboveMax,
    FutureDate,
    PastDate,
    InvalidDay,
    NumberValue,
}

impl NegativeKind {
    pub const ALL: [NegativeKind; 21] = [
        NegativeKind::Empty,
        NegativeKind::Null,
        NegativeKind::TooLong,
        NegativeKind::ExceedLength,
        NegativeKind::SpecialChars,
        NegativeKind::SqlInjection,
        NegativeKind::InvalidFormat,
        NegativeKind::MissingAt,
        NegativeKind::MissingDomain,
        NegativeKind::TooShort,
        NegativeKind::Letters,
        NegativeKind::StringValue,
        NegativeKind::Negative,
        NegativeKind::Decimal,
        NegativeKind::Overflow,
        NegativeKind::BelowMin,
        NegativeKind::AboveMax,
        NegativeKind::FutureDate,
        NegativeKind::PastDate,
        NegativeKind::InvalidDay,
        NegativeKind::NumberValue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NegativeKind::Empty => "empty",
            NegativeKind::Null => "null",
            NegativeKind::TooLong => "too_long",
            NegativeKind::ExceedLength => "exceed_length",
            NegativeKind::SpecialChars => "special_chars",
            NegativeKind::SqlInjection => "sql_injection",
            NegativeKind::InvalidFormat => "invalid_format",
            NegativeKind::MissingAt => "missing_at",
            NegativeKind::MissingDomain => "missing_domain",
            NegativeKind::TooShort => "too_short",
            NegativeKind::Letters => "letters",
            NegativeKind::StringValue => "string_value",
            NegativeKind::Negative => "negative",
            NegativeKind::Decimal => "decimal",
            NegativeKind::Overflow => "overflow",
            NegativeKind::BelowMin => "below_min",
            NegativeKind::AboveMax => "above_max",
            NegativeKind::FutureDate => "future_date",
            NegativeKind::PastDate => "past_date",
            NegativeKind::InvalidDay => "invalid_day",
            NegativeKind::NumberValue => "number_value",
        }
    }
}

impl fmt::Display for NegativeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NegativeKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        NegativeKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| format!("unknown negative kind '{value}'"))
    }
}

/// Test classification carried in `_testType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestType {
    Positive,
    Negative(NegativeKind),
}

impl TestType {
    pub fn is_positive(&self) -> bool {
        matches!(self, TestType::Positive)
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestType::Positive => f.write_str("positive"),
            TestType::Negative(kind) => write!(f, "negative_{kind}"),
        }
    }
}

impl Serialize for TestType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One generated record: field values in declaration order plus test metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedRecord {
    pub test_type: TestType,
    /// Field holding the deliberately invalid value; `None` for positive records.
    pub target_field: Option<String>,
    /// Whether the target field entered negative testing through automatic eligibility.
    pub auto_selected: Option<bool>,
    values: Vec<(String, FieldValue)>,
}

impl GeneratedRecord {
    pub fn positive() -> Self {
        Self {
            test_type: TestType::Positive,
            target_field: None,
            auto_selected: None,
            values: Vec::new(),
        }
    }

    pub fn negative(kind: NegativeKind, target: impl Into<String>, auto_selected: bool) -> Self {
        Self {
            test_type: TestType::Negative(kind),
            target_field: Some(target.into()),
            auto_selected: Some(auto_selected),
            values: Vec::new(),
        }
    }

    /// Set a field value, replacing an existing entry with the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        let name = name.into();
        match self.values.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => self.values.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn values(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for GeneratedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extra = 1 + usize::from(self.target_field.is_some())
            + usize::from(self.auto_selected.is_some());
        let mut map = serializer.serialize_map(Some(self.values.len() + extra))?;
        for (key, value) in &self.values {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry("_testType", &self.test_type)?;
        if let Some(target) = &self.target_field {
            map.serialize_entry("_targetField", target)?;
        }
        if let Some(auto_selected) = self.auto_selected {
            map.serialize_entry("_autoSelected", &auto_selected)?;
        }
        map.end()
    }
}
