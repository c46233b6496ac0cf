use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use fieldsmith_core::GeneratedRecord;

pub const DEFAULT_RECORD_COUNT: usize = 10;

/// How positive records are sized when lookup fields drive generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupMode {
    /// One record per lookup value, never more than the requested count.
    #[default]
    Capped,
    /// Exactly the requested count, wrapping around the lookup values.
    Cycle,
}

/// Options for the record set builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Number of positive records requested.
    pub record_count: usize,
    /// Append negative batches for eligible fields.
    pub include_negative: bool,
    pub lookup_mode: LookupMode,
    /// Seed for reproducible output; entropy-seeded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Reference date for date synthesis; defaults to the local date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<NaiveDate>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            record_count: DEFAULT_RECORD_COUNT,
            include_negative: true,
            lookup_mode: LookupMode::Capped,
            seed: None,
            today: None,
        }
    }
}

/// Ordered output of one build: positive batch first, then negative batches.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    pub records: Vec<GeneratedRecord>,
    pub positive_count: usize,
    pub negative_count: usize,
}

impl RecordSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn positives(&self) -> &[GeneratedRecord] {
        &self.records[..self.positive_count]
    }

    pub fn negatives(&self) -> &[GeneratedRecord] {
        &self.records[self.positive_count..]
    }
}
