// Module responsible for the two data reshaping tools.
//
// Expansion turns `name;v1;...;vn` rows into one `(name, value)` CSV line per
// measurement, the shape most downstream statistics tooling wants. Transpose
// flips a semicolon grid into tab-separated columns.

use crate::ingest::{self, NumberFormat, RowPolicy};
use anyhow::Context;
use itertools::Itertools;
use log::warn;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct Measurement<'a> {
    name: &'a str,
    execution_time: f64,
}

/// Expands every retained row into one output line per measurement. A row
/// with any unparseable value is dropped whole; partially kept rows would
/// silently skew per-name sample counts.
pub fn expand_to_pairs(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    delimiter: u8,
    format: NumberFormat,
) -> anyhow::Result<()> {
    let output = output.as_ref();
    let rows = ingest::read_rows(input, delimiter, format, RowPolicy::DiscardRow)?;

    // the header is written by hand so it appears even when no row survives;
    // serialize's automatic header would duplicate it on the first record
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(output)
        .with_context(|| format!("couldn't create {}", output.display()))?;

    writer.write_record(["name", "execution_time"])?;
    for row in &rows {
        for &value in &row.values {
            writer.serialize(Measurement {
                name: &row.name,
                execution_time: value,
            })?;
        }
    }
    writer.flush()?;

    Ok(())
}

/// Transposes a delimited grid and writes it tab-separated. The grid must be
/// rectangular; a jagged grid would silently lose the tail of longer rows, so
/// it is rejected instead.
pub fn transpose(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    delimiter: u8,
) -> anyhow::Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .flexible(true)
        .from_path(input)
        .with_context(|| format!("couldn't open {}", input.display()))?;

    let mut grid: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("couldn't read record from {}", input.display()))?;
        grid.push(record.iter().map(str::to_string).collect());
    }

    if grid.is_empty() {
        warn!("{} is empty, writing an empty transposition", input.display());
    }

    let expected = grid.first().map_or(0, |row| row.len());
    if !grid.iter().map(|row| row.len()).all_equal() {
        for (idx, row) in grid.iter().enumerate() {
            if row.len() != expected {
                anyhow::bail!(
                    "can't transpose {}: row {} ({:?}) has {} fields, expected {}",
                    input.display(),
                    idx + 1,
                    row[0],
                    row.len(),
                    expected
                );
            }
        }
    }

    // the output file only gets created once the grid shape is known good
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(output)
        .with_context(|| format!("couldn't create {}", output.display()))?;

    for column in 0..expected {
        let out_row: Vec<&str> = grid.iter().map(|row| row[column].as_str()).collect();
        writer.write_record(&out_row)?;
    }
    writer.flush()?;

    Ok(())
}
