//! Negative test-case taxonomy and generation.

use rand::RngCore;

use fieldsmith_core::{FieldConfig, FieldType, FieldValue, GeneratedRecord, NegativeKind};

use crate::generators::{SynthesisContext, synthesize};

/// Marker used for kinds without a dedicated literal.
pub const INVALID_MARKER: &str = "INVALID_VALUE";

const TOO_LONG_LEN: usize = 1000;
const EXCEED_LENGTH_MARGIN: usize = 10;
const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;':\",./<>?";
const SQL_INJECTION: &str = "'; DROP TABLE users; --";

/// Whether a field qualifies for negative testing by its declared constraints alone.
pub fn is_auto_eligible(field: &FieldConfig) -> bool {
    field.required
        || field.max_field_length.is_some()
        || field.config.range_min.is_some()
        || field.config.range_max.is_some()
        || matches!(
            field.field_type,
            FieldType::Email | FieldType::Phone | FieldType::Date
        )
}

/// Whether a field enters negative generation, by opt-in or automatic eligibility.
pub fn wants_negative(field: &FieldConfig) -> bool {
    field.generate_negative_tests || is_auto_eligible(field)
}

/// Negative kinds applicable to a field, in generation order.
pub fn applicable_kinds(field: &FieldConfig) -> Vec<NegativeKind> {
    let mut kinds = Vec::new();
    if field.required {
        kinds.extend([NegativeKind::Empty, NegativeKind::Null]);
    }

    match field.field_type {
        FieldType::String => {
            kinds.extend([
                NegativeKind::TooLong,
                NegativeKind::SpecialChars,
                NegativeKind::SqlInjection,
            ]);
            if field.max_field_length.is_some() {
                kinds.push(NegativeKind::ExceedLength);
            }
        }
        FieldType::Email => kinds.extend([
            NegativeKind::InvalidFormat,
            NegativeKind::MissingAt,
            NegativeKind::MissingDomain,
        ]),
        FieldType::Phone => kinds.extend([
            NegativeKind::InvalidFormat,
            NegativeKind::TooShort,
            NegativeKind::TooLong,
            NegativeKind::Letters,
        ]),
        FieldType::Number => {
            kinds.extend([
                NegativeKind::StringValue,
                NegativeKind::Negative,
                NegativeKind::Decimal,
                NegativeKind::Overflow,
            ]);
            if field.config.range_min.is_some() {
                kinds.push(NegativeKind::BelowMin);
            }
            if field.config.range_max.is_some() {
                kinds.push(NegativeKind::AboveMax);
            }
        }
        FieldType::Date => kinds.extend([
            NegativeKind::InvalidFormat,
            NegativeKind::FutureDate,
            NegativeKind::PastDate,
            NegativeKind::InvalidDay,
        ]),
        FieldType::Boolean => kinds.extend([NegativeKind::StringValue, NegativeKind::NumberValue]),
    }

    kinds
}

/// Deterministic invalid value for a field and kind.
pub fn value_for(field: &FieldConfig, kind: NegativeKind) -> FieldValue {
    match kind {
        NegativeKind::Empty => FieldValue::from(""),
        NegativeKind::Null => FieldValue::Null,
        NegativeKind::TooLong => FieldValue::Text("a".repeat(TOO_LONG_LEN)),
        NegativeKind::ExceedLength => {
            let len = field.max_field_length.unwrap_or_default() + EXCEED_LENGTH_MARGIN;
            FieldValue::Text("a".repeat(len))
        }
        NegativeKind::SpecialChars => FieldValue::from(SPECIAL_CHARS),
        NegativeKind::SqlInjection => FieldValue::from(SQL_INJECTION),
        NegativeKind::InvalidFormat => FieldValue::from(match field.field_type {
            FieldType::Email => "invalid-email",
            FieldType::Phone => "abc-def-ghij",
            FieldType::Date => "31/13/2024",
            _ => "invalid_format",
        }),
        NegativeKind::MissingAt => FieldValue::from("userexample.com"),
        NegativeKind::MissingDomain => FieldValue::from("user@"),
        NegativeKind::TooShort => FieldValue::from("123"),
        NegativeKind::Letters => FieldValue::from("abcdefghij"),
        NegativeKind::StringValue => FieldValue::from(match field.field_type {
            FieldType::Boolean => "not_a_boolean",
            _ => "not_a_number",
        }),
        NegativeKind::Negative => FieldValue::Int(-1),
        NegativeKind::Decimal => FieldValue::Float(12.5),
        NegativeKind::Overflow => FieldValue::Int(i64::MAX),
        NegativeKind::BelowMin => match field.config.range_min {
            Some(min) => FieldValue::Int(min.saturating_sub(1)),
            None => FieldValue::from(INVALID_MARKER),
        },
        NegativeKind::AboveMax => match field.config.range_max {
            Some(max) => FieldValue::Int(max.saturating_add(1)),
            None => FieldValue::from(INVALID_MARKER),
        },
        NegativeKind::FutureDate => FieldValue::from("2099-12-31"),
        NegativeKind::PastDate => FieldValue::from("1900-01-01"),
        NegativeKind::InvalidDay => FieldValue::from("2024-02-30"),
        NegativeKind::NumberValue => FieldValue::Int(2),
    }
}

/// Invalid value for a kind given by name; unknown names yield the generic marker.
pub fn value_for_name(field: &FieldConfig, kind: &str) -> FieldValue {
    match kind.parse::<NegativeKind>() {
        Ok(kind) => value_for(field, kind),
        Err(_) => FieldValue::from(INVALID_MARKER),
    }
}

/// One negative record per applicable kind of `target`.
///
/// Every other named field gets a freshly synthesized valid value. Fields that
/// share the target's name are left out so the invalid value is never
/// overwritten.
pub fn negative_records(
    fields: &[FieldConfig],
    target: &FieldConfig,
    ctx: &SynthesisContext,
    rng: &mut dyn RngCore,
) -> Vec<GeneratedRecord> {
    if !target.is_generated() {
        return Vec::new();
    }

    let auto_selected = is_auto_eligible(target);
    applicable_kinds(target)
        .into_iter()
        .map(|kind| {
            let mut record = GeneratedRecord::negative(kind, target.name.as_str(), auto_selected);
            for field in fields.iter().filter(|field| field.is_generated()) {
                if field.id == target.id {
                    record.insert(field.name.as_str(), value_for(target, kind));
                } else if field.name != target.name {
                    record.insert(field.name.as_str(), synthesize(field, ctx, rng));
                }
            }
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldsmith_core::GenerationStrategy;

    #[test]
    fn exceed_length_is_ten_past_the_cap() {
        let mut field = FieldConfig::new("code", FieldType::String, GenerationStrategy::Static);
        field.max_field_length = Some(5);
        let value = value_for(&field, NegativeKind::ExceedLength);
        assert_eq!(value.as_str().map(str::len), Some(15));
    }

    #[test]
    fn unknown_kind_name_falls_back_to_marker() {
        let field = FieldConfig::new("x", FieldType::String, GenerationStrategy::Static);
        assert_eq!(value_for_name(&field, "sideways"), FieldValue::from(INVALID_MARKER));
        assert_eq!(value_for_name(&field, "null"), FieldValue::Null);
    }
}
