//! Lookup value resolution from manual lists or uploaded CSV grids.

use std::io::Read;

use fieldsmith_core::{FieldConfig, LookupSource};

use crate::errors::GenerationError;

/// Resolve the ordered candidate values of a field's lookup source.
///
/// A CSV column that is not present in the header resolves to an empty list.
pub fn resolve(field: &FieldConfig) -> Vec<String> {
    match &field.config.lookup {
        Some(LookupSource::Csv { data, column }) => resolve_csv_column(data, column),
        Some(LookupSource::Manual { values }) => values
            .iter()
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}

fn resolve_csv_column(data: &[Vec<String>], column: &str) -> Vec<String> {
    let Some((header, rows)) = data.split_first() else {
        return Vec::new();
    };
    let Some(index) = header.iter().position(|cell| cell.trim() == column) else {
        return Vec::new();
    };

    rows.iter()
        .filter_map(|row| row.get(index))
        .filter(|cell| !cell.trim().is_empty())
        .cloned()
        .collect()
}

/// Read an uploaded CSV file into a grid of rows; the first row is the header.
pub fn load_csv_grid<R: Read>(reader: R) -> Result<Vec<Vec<String>>, GenerationError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut grid = Vec::new();
    for record in reader.records() {
        let record = record?;
        grid.push(record.iter().map(str::to_string).collect());
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn csv_column_skips_blank_and_short_rows() {
        let data = grid(&[
            &["id", "city"],
            &["1", "Recife"],
            &["2", "   "],
            &["3"],
            &["4", "Olinda"],
        ]);
        assert_eq!(resolve_csv_column(&data, "city"), vec!["Recife", "Olinda"]);
    }

    #[test]
    fn missing_header_resolves_empty() {
        let data = grid(&[&["id"], &["1"]]);
        assert!(resolve_csv_column(&data, "city").is_empty());
        assert!(resolve_csv_column(&[], "city").is_empty());
    }
}
