use std::time::Instant;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use fieldsmith_core::{FieldConfig, GeneratedRecord, GenerationStrategy, NegativeKind};

use crate::generators::{SynthesisContext, apply_max_length, synthesize};
use crate::lookup;
use crate::model::{GenerationOptions, LookupMode, RecordSet};
use crate::negative::{applicable_kinds, is_auto_eligible, negative_records, wants_negative};

/// Entry point for turning field configurations into an ordered record set.
///
/// The builder holds no state between calls; every build reads the fields
/// without mutating them and returns a fresh record set.
#[derive(Debug, Clone, Default)]
pub struct RecordSetBuilder {
    options: GenerationOptions,
}

impl RecordSetBuilder {
    pub fn new(options: GenerationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Build with a generator seeded from `options.seed`, or from OS entropy.
    pub fn build(&self, fields: &[FieldConfig]) -> RecordSet {
        let mut rng = match self.options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        self.build_with_rng(fields, &mut rng)
    }

    /// Build using a caller-supplied random source.
    pub fn build_with_rng(&self, fields: &[FieldConfig], rng: &mut dyn RngCore) -> RecordSet {
        let start = Instant::now();
        let ctx = match self.options.today {
            Some(today) => SynthesisContext::new(today),
            None => SynthesisContext::local(),
        };
        let named: Vec<&FieldConfig> = fields
            .iter()
            .filter(|field| field.is_generated())
            .collect();

        info!(
            fields = named.len(),
            record_count = self.options.record_count,
            include_negative = self.options.include_negative,
            seed = self.options.seed,
            "record set generation started"
        );

        let mut records = self.positive_records(&named, &ctx, rng);
        let positive_count = records.len();

        if self.options.include_negative {
            for target in named.iter().copied().filter(|field| wants_negative(field)) {
                let batch = negative_records(fields, target, &ctx, rng);
                debug!(
                    field = %target.name,
                    kinds = batch.len(),
                    auto_selected = is_auto_eligible(target),
                    "negative batch generated"
                );
                records.extend(batch);
            }
        }

        let negative_count = records.len() - positive_count;
        info!(
            positive = positive_count,
            negative = negative_count,
            duration_ms = start.elapsed().as_millis() as u64,
            "record set generation completed"
        );

        RecordSet {
            records,
            positive_count,
            negative_count,
        }
    }

    fn positive_records(
        &self,
        fields: &[&FieldConfig],
        ctx: &SynthesisContext,
        rng: &mut dyn RngCore,
    ) -> Vec<GeneratedRecord> {
        let lookups = resolve_lookups(fields);
        let count = self.positive_count(&lookups);

        (0..count)
            .map(|index| {
                let mut record = GeneratedRecord::positive();
                for (field, values) in fields.iter().zip(&lookups) {
                    let value = match values {
                        Some(values) if !values.is_empty() => {
                            let pinned = values[index % values.len()].clone();
                            apply_max_length(field, pinned.into())
                        }
                        _ => synthesize(field, ctx, rng),
                    };
                    record.insert(field.name.as_str(), value);
                }
                record
            })
            .collect()
    }

    /// Positive batch size: the requested count, capped by the longest lookup
    /// list when lookups drive generation under [`LookupMode::Capped`].
    fn positive_count(&self, lookups: &[Option<Vec<String>>]) -> usize {
        let longest = lookups.iter().flatten().map(Vec::len).max().unwrap_or(0);
        if longest == 0 {
            return self.options.record_count;
        }
        match self.options.lookup_mode {
            LookupMode::Capped => longest.min(self.options.record_count),
            LookupMode::Cycle => self.options.record_count,
        }
    }
}

fn resolve_lookups(fields: &[&FieldConfig]) -> Vec<Option<Vec<String>>> {
    fields
        .iter()
        .map(|field| match field.data_type {
            GenerationStrategy::Lookup => Some(lookup::resolve(field)),
            _ => None,
        })
        .collect()
}

/// Kinds the builder will emit for each eligible field, in output order.
pub fn negative_plan(fields: &[FieldConfig]) -> Vec<(&FieldConfig, Vec<NegativeKind>)> {
    fields
        .iter()
        .filter(|field| field.is_generated() && wants_negative(field))
        .map(|field| (field, applicable_kinds(field)))
        .collect()
}
