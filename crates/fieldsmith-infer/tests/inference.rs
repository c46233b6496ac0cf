use fieldsmith_core::{FieldType, GenerationStrategy, SidCommand};
use fieldsmith_infer::{InferOptions, field_name, infer_fields, propose_field};

fn typed(label: &str, value: &str) -> SidCommand {
    SidCommand::new("type", Some(label), value)
}

#[test]
fn email_sample_yields_random_local_part_pattern() {
    let fields = infer_fields(
        &[typed("Email Address", "jane@acme.com")],
        &InferOptions::default(),
    );
    assert_eq!(fields.len(), 1);
    let field = &fields[0];
    assert_eq!(field.name, "email_address");
    assert_eq!(field.field_type, FieldType::Email);
    assert_eq!(field.data_type, GenerationStrategy::Pattern);
    assert_eq!(field.config.pattern.as_deref(), Some("{random}@acme.com"));
    assert!(field.required);
}

#[test]
fn password_sample_is_mapped_by_character_class() {
    let command = SidCommand::new("password", None, "Ab3x");
    let field = propose_field("Password", &command);
    assert_eq!(field.field_type, FieldType::String);
    assert_eq!(field.data_type, GenerationStrategy::Pattern);
    assert_eq!(
        field.config.pattern.as_deref(),
        Some("{UPPER}{lower}{digit}{lower}")
    );
}

#[test]
fn password_rule_wins_over_digits() {
    let command = SidCommand::new("password", Some("PIN"), "123456");
    let fields = infer_fields(&[command], &InferOptions::default());
    assert_eq!(fields[0].data_type, GenerationStrategy::Pattern);
    assert_eq!(
        fields[0].config.pattern.as_deref(),
        Some("{digit}{digit}{digit}{digit}{digit}{digit}")
    );
}

#[test]
fn long_digit_strings_become_ranges() {
    let field = propose_field("Account", &typed("Account", "1500000"));
    assert_eq!(field.field_type, FieldType::Number);
    assert_eq!(field.data_type, GenerationStrategy::Range);
    assert_eq!(field.config.range_min, Some(500_000));
    assert_eq!(field.config.range_max, Some(2_500_000));

    let low = propose_field("Code", &typed("Code", "000123"));
    assert_eq!(low.config.range_min, Some(1));
    assert_eq!(low.config.range_max, Some(1_000_123));
}

#[test]
fn short_digit_strings_stay_static() {
    let field = propose_field("Age", &typed("Age", "42"));
    assert_eq!(field.field_type, FieldType::Number);
    assert_eq!(field.data_type, GenerationStrategy::Static);
    assert_eq!(field.config.static_value.as_deref(), Some("42"));
}

#[test]
fn digit_strings_beyond_i64_stay_static() {
    let huge = "99999999999999999999999";
    let field = propose_field("Card", &typed("Card", huge));
    assert_eq!(field.field_type, FieldType::Number);
    assert_eq!(field.data_type, GenerationStrategy::Static);
    assert_eq!(field.config.static_value.as_deref(), Some(huge));
}

#[test]
fn email_without_domain_uses_default() {
    let field = propose_field("Login", &typed("Login", "jane@"));
    assert_eq!(field.config.pattern.as_deref(), Some("{random}@example.com"));
}

#[test]
fn formatted_phone_numbers_are_digit_masked() {
    let field = propose_field("Phone", &typed("Phone", "(555) 123-4567"));
    assert_eq!(field.field_type, FieldType::Phone);
    assert_eq!(field.data_type, GenerationStrategy::Pattern);
    assert_eq!(
        field.config.pattern.as_deref(),
        Some("({digit}{digit}{digit}) {digit}{digit}{digit}-{digit}{digit}{digit}{digit}")
    );
}

#[test]
fn free_text_gets_length_window() {
    let field = propose_field("City", &typed("City", "Recife"));
    assert_eq!(field.field_type, FieldType::String);
    assert_eq!(field.data_type, GenerationStrategy::Minmax);
    assert_eq!(field.config.min_length, Some(4));
    assert_eq!(field.config.max_length, Some(8));

    let short = propose_field("Initial", &typed("Initial", "J"));
    assert_eq!(short.config.min_length, Some(1));
    assert_eq!(short.config.max_length, Some(3));
}

#[test]
fn first_occurrence_of_a_label_wins() {
    let commands = vec![
        SidCommand::new("open", None, "/signup"),
        typed("Name", "Ana"),
        SidCommand::new("click", Some("Submit"), "x"),
        typed("Name", "ana@example.com"),
        typed("Empty", ""),
        SidCommand::new("type", None, "no label"),
        typed("Zip Code", "50000"),
    ];
    let fields = infer_fields(&commands, &InferOptions::default());
    let names: Vec<&str> = fields.iter().map(|field| field.name.as_str()).collect();
    assert_eq!(names, vec!["name", "zip_code"]);
    assert_eq!(fields[0].field_type, FieldType::String);
}

#[test]
fn options_control_required_and_target_labels() {
    let mut command = SidCommand::new("type", None, "Ana");
    command.target = "id=first_name".to_string();
    let options = InferOptions {
        label_from_target: true,
        required: false,
    };

    let fields = infer_fields(&[command], &options);
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name, "first_name");
    assert!(!fields[0].required);
}

#[test]
fn names_collapse_whitespace_runs() {
    assert_eq!(field_name("  First \t Name  "), "first_name");
    assert_eq!(field_name("E-mail"), "e-mail");
}
