use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::SecondsFormat;

use crate::errors::GenerationError;
use crate::model::RecordSet;
use crate::output::GenerationInfo;

/// Write records as CSV preceded by `# Generation:` and `# Created:` comment lines.
///
/// Columns are `_testType`, `_targetField`, then every exported field; missing
/// and null values become empty cells.
pub fn write_csv<W: Write>(
    mut writer: W,
    info: &GenerationInfo,
    records: &RecordSet,
) -> Result<(), GenerationError> {
    writeln!(writer, "# Generation: {}", info.name)?;
    writeln!(
        writer,
        "# Created: {}",
        info.created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    )?;

    let columns = info.column_names();
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    let mut header = vec!["_testType", "_targetField"];
    header.extend(columns.iter().copied());
    csv_writer.write_record(&header)?;

    for record in &records.records {
        let mut row = Vec::with_capacity(columns.len() + 2);
        row.push(record.test_type.to_string());
        row.push(record.target_field.clone().unwrap_or_default());
        for column in &columns {
            row.push(record.get(column).map(|value| value.to_csv()).unwrap_or_default());
        }
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn write_csv_file(
    path: &Path,
    info: &GenerationInfo,
    records: &RecordSet,
) -> Result<(), GenerationError> {
    let writer = BufWriter::new(File::create(path)?);
    write_csv(writer, info, records)
}
