use chrono::{NaiveDate, TimeZone, Utc};

use fieldsmith_core::{FieldConfig, FieldType, GenerationStrategy};
use fieldsmith_generate::output::csv::write_csv;
use fieldsmith_generate::output::json::{write_json, write_json_file};
use fieldsmith_generate::{GenerationInfo, GenerationOptions, RecordSetBuilder};

fn fixture() -> (Vec<FieldConfig>, fieldsmith_generate::RecordSet, GenerationInfo) {
    let mut name = FieldConfig::new("name", FieldType::String, GenerationStrategy::Static);
    name.config.static_value = Some("Ana, Maria".to_string());
    let mut email = FieldConfig::new("email", FieldType::Email, GenerationStrategy::Static);
    email.config.static_value = Some("ana@example.com".to_string());
    let fields = vec![name, email];

    let builder = RecordSetBuilder::new(GenerationOptions {
        record_count: 2,
        seed: Some(1),
        today: NaiveDate::from_ymd_opt(2024, 1, 1),
        ..GenerationOptions::default()
    });
    let records = builder.build(&fields);
    let created_at = Utc
        .with_ymd_and_hms(2024, 5, 1, 12, 30, 0)
        .single()
        .expect("valid timestamp");
    let info = GenerationInfo::new("signup form", &fields, &records, created_at);
    (fields, records, info)
}

#[test]
fn json_export_has_info_and_data() {
    let (_, records, info) = fixture();
    let mut buffer = Vec::new();
    write_json(&mut buffer, &info, &records).expect("write json");

    let value: serde_json::Value = serde_json::from_slice(&buffer).expect("parse json");
    let generation = &value["generationInfo"];
    assert_eq!(generation["name"], "signup form");
    assert_eq!(generation["totalRecords"], 5);
    assert_eq!(generation["positiveTests"], 2);
    assert_eq!(generation["negativeTests"], 3);
    assert_eq!(
        generation["fields"],
        serde_json::json!([
            { "name": "name", "type": "string" },
            { "name": "email", "type": "email" }
        ])
    );
    assert!(generation["createdAt"].as_str().is_some());

    let data = value["data"].as_array().expect("data array");
    assert_eq!(data.len(), 5);
    assert_eq!(data[0]["_testType"], "positive");
    assert_eq!(data[2]["_testType"], "negative_invalid_format");
    assert_eq!(data[2]["_targetField"], "email");
    assert_eq!(data[2]["_autoSelected"], true);
}

#[test]
fn csv_export_has_comment_lines_and_metadata_columns() {
    let (_, records, info) = fixture();
    let mut buffer = Vec::new();
    write_csv(&mut buffer, &info, &records).expect("write csv");

    let text = String::from_utf8(buffer).expect("utf8 csv");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "# Generation: signup form");
    assert_eq!(lines[1], "# Created: 2024-05-01T12:30:00.000Z");
    assert_eq!(lines[2], "_testType,_targetField,name,email");
    assert_eq!(lines[3], "positive,,\"Ana, Maria\",ana@example.com");
    assert_eq!(lines.len(), 3 + 5);
    assert!(lines[5..].iter().all(|line| line.starts_with("negative_")));
}

#[test]
fn json_export_writes_to_file() {
    let (_, records, info) = fixture();
    let path = std::env::temp_dir().join(format!("fieldsmith_export_{}.json", uuid::Uuid::new_v4()));
    write_json_file(&path, &info, &records).expect("write json file");

    let contents = std::fs::read_to_string(&path).expect("read export");
    assert!(contents.contains("\"generationInfo\""));
    std::fs::remove_file(&path).expect("remove export");
}

#[test]
fn export_format_parses_names_and_extensions() {
    use std::path::Path;

    use fieldsmith_generate::{GenerationError, OutputFormat};

    assert_eq!("CSV".parse::<OutputFormat>().ok(), Some(OutputFormat::Csv));
    assert!(matches!(
        "xml".parse::<OutputFormat>(),
        Err(GenerationError::InvalidOptions(_))
    ));
    assert_eq!(
        OutputFormat::from_path(Path::new("out/records.json")),
        Some(OutputFormat::Json)
    );
    assert_eq!(OutputFormat::from_path(Path::new("records")), None);
}
