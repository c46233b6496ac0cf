mod atomic;
mod logging;
mod settings;
mod store;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use thiserror::Error;

use fieldsmith_core::{
    Error as CoreError, FieldConfig, FieldsDocument, fields_json_schema, validate_fields,
    validate_fields_json,
};
use fieldsmith_generate::{
    GenerationError, GenerationInfo, LookupMode, OutputFormat, RecordSetBuilder, negative_plan,
    write_export,
};
use fieldsmith_infer::{InferError, InferOptions, import_json_schema, infer_fields, parse_recording};

use atomic::{write_bytes_atomic, write_json_atomic};
use settings::{DEFAULT_SETTINGS_PATH, Settings, SettingsError, load_or_create_settings};
use store::{DirectoryStore, GenerationStore, StoreError};

#[derive(Debug, Error)]
enum CliError {
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("inference error: {0}")]
    Infer(#[from] InferError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("field document has {0} error(s)")]
    InvalidFields(usize),
}

#[derive(Parser, Debug)]
#[command(name = "fieldsmith", version, about = "Fieldsmith test data generator")]
struct Cli {
    /// Settings file, created with defaults when missing.
    #[arg(long, global = true, default_value = DEFAULT_SETTINGS_PATH)]
    config: PathBuf,
    /// Append JSON log lines to this file instead of logging to stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Propose fields from a recorded UI test.
    Infer(InferArgs),
    /// Convert a JSON Schema's properties into fields.
    ImportSchema(ImportSchemaArgs),
    /// Generate positive and negative records from a fields document.
    Generate(GenerateArgs),
    /// Report schema violations and consistency warnings for a fields document.
    Validate(FieldsArgs),
    /// List the negative cases each field would produce.
    Negatives(FieldsArgs),
    /// Manage saved generations.
    #[command(subcommand)]
    Saved(SavedCommand),
    /// Print the JSON Schema of the fields document.
    Schema(SchemaArgs),
}

#[derive(Args, Debug)]
struct InferArgs {
    /// Recording file (`.side` project or command list).
    recording: PathBuf,
    /// Output path for the fields document; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Label unlabeled inputs from their locator.
    #[arg(long, default_value_t = false)]
    label_from_target: bool,
    /// Mark proposed fields as optional.
    #[arg(long, default_value_t = false)]
    optional: bool,
}

#[derive(Args, Debug)]
struct ImportSchemaArgs {
    /// JSON Schema file describing an object.
    schema: PathBuf,
    /// Output path for the fields document; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Fields document.
    fields: PathBuf,
    /// Generation name; defaults to the fields file stem.
    #[arg(long)]
    name: Option<String>,
    /// Positive records requested.
    #[arg(long)]
    records: Option<usize>,
    /// Skip negative batches.
    #[arg(long, default_value_t = false)]
    no_negative: bool,
    /// Wrap around lookup values instead of capping the record count.
    #[arg(long, default_value_t = false)]
    cycle_lookups: bool,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Export format (`json` or `csv`); inferred from `--out` when omitted.
    #[arg(long)]
    format: Option<OutputFormat>,
    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Also keep the export in the generation store.
    #[arg(long, default_value_t = false)]
    save: bool,
}

#[derive(Args, Debug)]
struct FieldsArgs {
    /// Fields document.
    fields: PathBuf,
}

#[derive(Subcommand, Debug)]
enum SavedCommand {
    /// List saved generations, newest first.
    List,
    /// Delete a saved generation by id.
    Delete { id: String },
}

#[derive(Args, Debug)]
struct SchemaArgs {
    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    let settings = load_or_create_settings(&cli.config)?;
    let log_file = cli.log_file.as_deref().or(settings.log_file.as_deref());
    logging::init_logging(&settings.log_level, log_file).map_err(CliError::Logging)?;

    match cli.command {
        Command::Infer(args) => run_infer(args),
        Command::ImportSchema(args) => run_import_schema(args),
        Command::Generate(args) => run_generate(args, &settings),
        Command::Validate(args) => run_validate(args),
        Command::Negatives(args) => run_negatives(args),
        Command::Saved(command) => run_saved(command, &settings),
        Command::Schema(args) => {
            let schema = serde_json::to_value(fields_json_schema())?;
            emit_json(&schema, args.out.as_deref())
        }
    }
}

fn run_infer(args: InferArgs) -> Result<(), CliError> {
    let content = std::fs::read_to_string(&args.recording)?;
    let commands = parse_recording(&content)?;
    tracing::info!(
        event = "recording_parsed",
        path = %args.recording.display(),
        commands = commands.len()
    );

    let options = InferOptions {
        label_from_target: args.label_from_target,
        required: !args.optional,
    };
    let fields = infer_fields(&commands, &options);
    tracing::info!(event = "fields_inferred", fields = fields.len());

    emit_json(&FieldsDocument::new(fields), args.out.as_deref())
}

fn run_import_schema(args: ImportSchemaArgs) -> Result<(), CliError> {
    let content = std::fs::read_to_string(&args.schema)?;
    let fields = import_json_schema(&content)?;
    tracing::info!(
        event = "schema_imported",
        path = %args.schema.display(),
        fields = fields.len()
    );

    emit_json(&FieldsDocument::new(fields), args.out.as_deref())
}

fn run_generate(args: GenerateArgs, settings: &Settings) -> Result<(), CliError> {
    let timer = Instant::now();
    let fields = load_fields(&args.fields)?;

    let mut options = settings.generation_options();
    if let Some(records) = args.records {
        options.record_count = records;
    }
    if args.no_negative {
        options.include_negative = false;
    }
    if args.cycle_lookups {
        options.lookup_mode = LookupMode::Cycle;
    }
    options.seed = args.seed;

    let format = args
        .format
        .or_else(|| args.out.as_deref().and_then(OutputFormat::from_path))
        .unwrap_or(settings.format);
    let name = args.name.unwrap_or_else(|| {
        args.fields
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "generation".to_string())
    });

    tracing::info!(
        event = "generation_started",
        name = %name,
        fields = fields.len(),
        record_count = options.record_count,
        format = %format
    );

    let records = RecordSetBuilder::new(options).build(&fields);
    let info = GenerationInfo::new(name, &fields, &records, chrono::Utc::now());

    let mut buffer = Vec::new();
    write_export(&mut buffer, format, &info, &records)?;
    match args.out.as_deref() {
        Some(path) => {
            write_bytes_atomic(path, &buffer)?;
            tracing::info!(event = "export_written", path = %path.display());
        }
        None => io::stdout().lock().write_all(&buffer)?,
    }

    if args.save {
        let store = DirectoryStore::new(&settings.store_dir);
        let saved = store.create(&info, &records)?;
        tracing::info!(event = "generation_saved", id = %saved.id, path = %saved.path.display());
        eprintln!("saved generation {}", saved.id);
    }

    tracing::info!(
        event = "generation_finished",
        positive = records.positive_count,
        negative = records.negative_count,
        duration_ms = timer.elapsed().as_millis() as u64
    );
    Ok(())
}

fn run_validate(args: FieldsArgs) -> Result<(), CliError> {
    let fields = load_fields(&args.fields)?;
    let report = validate_fields(&fields);
    if report.warnings.is_empty() {
        println!("{}: {} field(s), no warnings", args.fields.display(), fields.len());
    }
    for warning in &report.warnings {
        println!("warning [{}] {}: {}", warning.code, warning.path, warning.message);
    }
    Ok(())
}

fn run_negatives(args: FieldsArgs) -> Result<(), CliError> {
    let fields = load_fields(&args.fields)?;
    for (field, kinds) in negative_plan(&fields) {
        let selection = if fieldsmith_generate::is_auto_eligible(field) {
            "auto"
        } else {
            "opt-in"
        };
        let kinds: Vec<&str> = kinds.iter().map(|kind| kind.as_str()).collect();
        println!("{}\t{}\t{}", field.name, selection, kinds.join(","));
    }
    Ok(())
}

fn run_saved(command: SavedCommand, settings: &Settings) -> Result<(), CliError> {
    let store = DirectoryStore::new(&settings.store_dir);
    match command {
        SavedCommand::List => {
            for saved in store.list()? {
                println!(
                    "{}\t{}\t{}\t{} record(s)",
                    saved.id,
                    saved.created_at.to_rfc3339(),
                    saved.name,
                    saved.total_records
                );
            }
        }
        SavedCommand::Delete { id } => {
            store.delete(&id)?;
            tracing::info!(event = "generation_deleted", id = %id);
        }
    }
    Ok(())
}

/// Read a fields document, rejecting schema violations and field errors and
/// logging warnings.
fn load_fields(path: &Path) -> Result<Vec<FieldConfig>, CliError> {
    let content = std::fs::read_to_string(path)?;
    let document: Value = serde_json::from_str(&content)?;

    let report = validate_fields_json(&document)?;
    if !report.is_ok() {
        for issue in &report.errors {
            tracing::error!(
                event = "schema_violation",
                path = %issue.path,
                message = %issue.message
            );
            eprintln!("{}: {}", issue.path, issue.message);
        }
        return Err(CliError::InvalidFields(report.errors.len()));
    }

    let document: FieldsDocument = serde_json::from_value(document)?;
    let report = validate_fields(&document.fields);
    if !report.is_ok() {
        for issue in &report.errors {
            tracing::error!(
                event = "field_error",
                code = %issue.code,
                path = %issue.path,
                message = %issue.message
            );
            eprintln!("{}: {}", issue.path, issue.message);
        }
        return Err(CliError::InvalidFields(report.errors.len()));
    }
    for warning in report.warnings {
        tracing::warn!(
            event = "field_warning",
            code = %warning.code,
            path = %warning.path,
            message = %warning.message
        );
    }
    Ok(document.fields)
}

fn emit_json<T: serde::Serialize>(value: &T, out: Option<&Path>) -> Result<(), CliError> {
    match out {
        Some(path) => {
            write_json_atomic(path, value)?;
            tracing::info!(event = "file_written", path = %path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, value)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
