use std::io;

use chrono::Utc;

use fieldsmith_core::{FieldConfig, FieldType, GenerationStrategy};
use fieldsmith_generate::output::csv::write_csv;
use fieldsmith_generate::{GenerationInfo, GenerationOptions, RecordSetBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut email = FieldConfig::new("email", FieldType::Email, GenerationStrategy::Pattern);
    email.required = true;
    email.config.pattern = Some("{random}@example.com".to_string());

    let mut age = FieldConfig::new("age", FieldType::Number, GenerationStrategy::Range);
    age.config.range_min = Some(18);
    age.config.range_max = Some(99);

    let mut plan = FieldConfig::new("plan", FieldType::String, GenerationStrategy::Lookup);
    plan.config
        .set_lookup_values(vec!["free".to_string(), "pro".to_string()]);

    let fields = vec![email, age, plan];
    let builder = RecordSetBuilder::new(GenerationOptions {
        record_count: 5,
        seed: Some(7),
        ..GenerationOptions::default()
    });
    let records = builder.build(&fields);
    let info = GenerationInfo::new("example", &fields, &records, Utc::now());

    write_csv(io::stdout().lock(), &info, &records)?;
    Ok(())
}
