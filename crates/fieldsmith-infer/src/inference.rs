//! Field proposals from observed input values.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use fieldsmith_core::{FieldConfig, FieldType, GenerationStrategy, SidCommand};
use fieldsmith_generate::pattern::{derive_password_pattern, derive_phone_pattern};

use crate::options::InferOptions;

const RANGE_SPREAD: i64 = 1_000_000;
const RANGE_MIN_DIGITS: usize = 6;
const PHONE_MIN_DIGITS: usize = 10;
const LENGTH_SLACK: usize = 2;
const DEFAULT_EMAIL_DOMAIN: &str = "example.com";

static DIGITS: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\d+$").ok());
static XPATH_ATTR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"@(?:id|name)\s*=\s*['"]([^'"]+)['"]"#).ok());

/// Propose one field per distinct label typed into an input.
///
/// Commands that are not `type`/`password`, carry an empty value, or have no
/// label are skipped; the first command seen for a label decides its field.
pub fn infer_fields(commands: &[SidCommand], options: &InferOptions) -> Vec<FieldConfig> {
    let mut seen = HashSet::new();
    let mut fields = Vec::new();

    for (index, command) in commands.iter().enumerate() {
        if !command.is_input() {
            continue;
        }
        if command.value.is_empty() {
            debug!(index, command = %command.command, "skipping input without value");
            continue;
        }

        let label = command
            .label
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .or_else(|| {
                options
                    .label_from_target
                    .then(|| label_from_target(&command.target))
                    .flatten()
            });
        let Some(label) = label else {
            debug!(index, target = %command.target, "skipping unlabeled input");
            continue;
        };

        if !seen.insert(label.clone()) {
            debug!(index, label = %label, "skipping repeated label");
            continue;
        }

        let mut field = propose_field(&label, command);
        field.required = options.required;
        fields.push(field);
    }

    info!(
        commands = commands.len(),
        fields = fields.len(),
        "field inference completed"
    );
    fields
}

/// Propose a field for `label` from the shape of the command's sample value.
pub fn propose_field(label: &str, command: &SidCommand) -> FieldConfig {
    let sample = command.value.as_str();
    let name = field_name(label);

    let mut field = if command.command == "password" {
        let mut field = FieldConfig::new(name, FieldType::String, GenerationStrategy::Pattern);
        field.config.pattern = Some(derive_password_pattern(sample));
        field
    } else if is_digits(sample) {
        numeric_field(name, sample)
    } else if let Some((_, domain)) = sample.split_once('@') {
        let domain = if domain.is_empty() {
            DEFAULT_EMAIL_DOMAIN
        } else {
            domain
        };
        let mut field = FieldConfig::new(name, FieldType::Email, GenerationStrategy::Pattern);
        field.config.pattern = Some(format!("{{random}}@{domain}"));
        field
    } else if sample.chars().filter(char::is_ascii_digit).count() >= PHONE_MIN_DIGITS {
        let mut field = FieldConfig::new(name, FieldType::Phone, GenerationStrategy::Pattern);
        field.config.pattern = Some(derive_phone_pattern(sample));
        field
    } else {
        let len = sample.chars().count();
        let mut field = FieldConfig::new(name, FieldType::String, GenerationStrategy::Minmax);
        field.config.min_length = Some(len.saturating_sub(LENGTH_SLACK).max(1));
        field.config.max_length = Some(len + LENGTH_SLACK);
        field
    };

    field.required = true;
    field
}

/// Lower-cased label with whitespace runs collapsed to one underscore.
pub fn field_name(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

fn is_digits(value: &str) -> bool {
    value.is_ascii()
        && DIGITS
            .as_ref()
            .is_some_and(|digits| digits.is_match(value))
}

fn numeric_field(name: String, sample: &str) -> FieldConfig {
    let parsed = sample.parse::<i64>().ok();
    match parsed {
        Some(value) if sample.len() >= RANGE_MIN_DIGITS => {
            let mut field = FieldConfig::new(name, FieldType::Number, GenerationStrategy::Range);
            field.config.range_min = Some(value.saturating_sub(RANGE_SPREAD).max(1));
            field.config.range_max = Some(value.saturating_add(RANGE_SPREAD));
            field
        }
        _ => {
            let mut field = FieldConfig::new(name, FieldType::Number, GenerationStrategy::Static);
            field.config.static_value = Some(sample.to_string());
            field
        }
    }
}

/// Best-effort label from a Selenium locator such as `id=email`,
/// `name=user`, `css=#email` or an xpath with `@id`/`@name`.
fn label_from_target(target: &str) -> Option<String> {
    let target = target.trim();
    let label = if let Some(rest) = target
        .strip_prefix("id=")
        .or_else(|| target.strip_prefix("name="))
    {
        Some(rest.to_string())
    } else if let Some(rest) = target.strip_prefix("css=#") {
        let end = rest
            .find(|ch: char| !(ch.is_alphanumeric() || ch == '_' || ch == '-'))
            .unwrap_or(rest.len());
        Some(rest[..end].to_string())
    } else if target.starts_with("xpath=") || target.starts_with("//") {
        XPATH_ATTR
            .as_ref()?
            .captures_iter(target)
            .last()
            .and_then(|caps| caps.get(1))
            .map(|found| found.as_str().to_string())
    } else {
        None
    };

    label
        .map(|label| label.trim().to_string())
        .filter(|label| !label.is_empty())
}
