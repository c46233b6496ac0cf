//! Value synthesis per generation strategy.

pub mod primitives;

use chrono::NaiveDate;
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

use fieldsmith_core::{FieldConfig, FieldType, FieldValue, GenerationStrategy};

use crate::lookup;
use crate::pattern;
use primitives::{random_alphanumeric, random_past_date, random_phone};

pub const DEFAULT_RANGE_MIN: i64 = 0;
pub const DEFAULT_RANGE_MAX: i64 = 100;
pub const DEFAULT_MIN_LENGTH: usize = 1;
pub const DEFAULT_MAX_LENGTH: usize = 10;
const FALLBACK_LEN: usize = 5;
const SMALL_INT_MAX: i64 = 1000;

/// Inputs to synthesis that do not come from the field itself.
#[derive(Debug, Clone, Copy)]
pub struct SynthesisContext {
    /// Upper bound for synthesized dates.
    pub today: NaiveDate,
}

impl SynthesisContext {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn local() -> Self {
        Self {
            today: chrono::Local::now().date_naive(),
        }
    }
}

/// Produce one value honoring the field's strategy, then apply `maxFieldLength`.
pub fn synthesize(
    field: &FieldConfig,
    ctx: &SynthesisContext,
    rng: &mut dyn RngCore,
) -> FieldValue {
    let value = match field.data_type {
        GenerationStrategy::Static => static_value(field),
        GenerationStrategy::Range => {
            let (min, max) = range_bounds(field);
            FieldValue::Int(rng.random_range(min..=max))
        }
        GenerationStrategy::Lookup => {
            let values = lookup::resolve(field);
            FieldValue::Text(values.choose(rng).cloned().unwrap_or_default())
        }
        GenerationStrategy::Minmax => synthesize_minmax(field, ctx, rng),
        GenerationStrategy::Pattern => {
            let template = field.config.pattern.as_deref().unwrap_or_default();
            FieldValue::Text(pattern::expand(template, field.field_type, rng))
        }
        GenerationStrategy::Unknown => FieldValue::Text(random_alphanumeric(rng, FALLBACK_LEN)),
    };

    apply_max_length(field, value)
}

/// Truncate textual values to the field's `maxFieldLength`, if declared.
pub fn apply_max_length(field: &FieldConfig, value: FieldValue) -> FieldValue {
    match field.max_field_length {
        Some(max_len) => value.truncated(max_len),
        None => value,
    }
}

/// Inclusive integer bounds, defaulting to `0..=100` and swapped if reversed.
pub fn range_bounds(field: &FieldConfig) -> (i64, i64) {
    let min = field.config.range_min.unwrap_or(DEFAULT_RANGE_MIN);
    let max = field.config.range_max.unwrap_or(DEFAULT_RANGE_MAX);
    if min <= max { (min, max) } else { (max, min) }
}

/// Inclusive length bounds, defaulting to `1..=10` and swapped if reversed.
pub fn length_bounds(field: &FieldConfig) -> (usize, usize) {
    let min = field.config.min_length.unwrap_or(DEFAULT_MIN_LENGTH);
    let max = field.config.max_length.unwrap_or(DEFAULT_MAX_LENGTH);
    if min <= max { (min, max) } else { (max, min) }
}

/// The configured literal, typed by `field_type` when it parses cleanly.
fn static_value(field: &FieldConfig) -> FieldValue {
    let text = field.config.static_value.clone().unwrap_or_default();
    let typed = match field.field_type {
        FieldType::Number => text.trim().parse::<i64>().ok().map(FieldValue::Int),
        FieldType::Boolean => text.trim().parse::<bool>().ok().map(FieldValue::Bool),
        FieldType::Date => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .ok()
            .map(FieldValue::Date),
        _ => None,
    };
    typed.unwrap_or(FieldValue::Text(text))
}

fn synthesize_minmax(
    field: &FieldConfig,
    ctx: &SynthesisContext,
    rng: &mut dyn RngCore,
) -> FieldValue {
    let (min, max) = length_bounds(field);
    let len = rng.random_range(min..=max);
    let text = random_alphanumeric(rng, len);

    match field.field_type {
        FieldType::Email => FieldValue::Text(format!("{text}@example.com")),
        FieldType::Phone => FieldValue::Text(random_phone(rng)),
        FieldType::Number => FieldValue::Int(rng.random_range(0..=SMALL_INT_MAX)),
        FieldType::Boolean => FieldValue::Bool(rng.random_bool(0.5)),
        FieldType::Date => FieldValue::Date(random_past_date(rng, ctx.today)),
        FieldType::String => FieldValue::Text(text),
    }
}
