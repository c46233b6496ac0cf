use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use fieldsmith_core::GeneratedRecord;

use crate::errors::GenerationError;
use crate::model::RecordSet;
use crate::output::GenerationInfo;

/// `{ generationInfo, data }` document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationExport<'a> {
    pub generation_info: &'a GenerationInfo,
    pub data: &'a [GeneratedRecord],
}

pub fn write_json<W: Write>(
    writer: W,
    info: &GenerationInfo,
    records: &RecordSet,
) -> Result<(), GenerationError> {
    let export = GenerationExport {
        generation_info: info,
        data: &records.records,
    };
    serde_json::to_writer_pretty(writer, &export)?;
    Ok(())
}

pub fn write_json_file(
    path: &Path,
    info: &GenerationInfo,
    records: &RecordSet,
) -> Result<(), GenerationError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_json(&mut writer, info, records)?;
    writer.flush()?;
    Ok(())
}
