//! Test data generation engine for fieldsmith.
//!
//! This crate turns field configurations into ordered record sets of
//! positive records followed by negative records, each tagged with its test
//! kind, and serializes them as JSON or CSV exports.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod lookup;
pub mod model;
pub mod negative;
pub mod output;
pub mod pattern;

pub use engine::{RecordSetBuilder, negative_plan};
pub use errors::GenerationError;
pub use generators::{SynthesisContext, synthesize};
pub use model::{GenerationOptions, LookupMode, RecordSet};
pub use negative::{applicable_kinds, is_auto_eligible, value_for, wants_negative};
pub use output::{FieldSummary, GenerationInfo, OutputFormat, write_export};
