// Module responsible for reading delimited benchmark timing files.
//
// Every input is row-oriented: the first field is a free-text name, the
// remaining fields are numeric strings. Exported measurements come from
// different locales, so a `,` can be either the decimal separator or a
// thousands separator; which one is fixed per file, never mixed.

use anyhow::Context;
use log::{debug, warn};
use std::path::Path;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NumberFormat {
    /// `,` is the decimal separator: "1,5" parses as 1.5.
    DecimalComma,
    /// `,` groups thousands: "1,500" parses as 1500.0.
    ThousandsComma,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RowPolicy {
    /// Skip fields that don't parse and keep the rest of the row.
    SkipField,
    /// Drop the whole row as soon as one field doesn't parse.
    DiscardRow,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRow {
    pub name: String,
    pub values: Vec<f64>,
}

/// Reads all usable rows from a delimited file, in file order. Rows that end
/// up with no values are dropped here so downstream code never sees them.
pub fn read_rows(
    path: impl AsRef<Path>,
    delimiter: u8,
    format: NumberFormat,
    policy: RowPolicy,
) -> anyhow::Result<Vec<BenchmarkRow>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("couldn't open {}", path.display()))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("couldn't read record from {}", path.display()))?;
        if let Some(row) = parse_row(&record, format, policy) {
            rows.push(row);
        }
    }

    Ok(rows)
}

fn parse_row(
    record: &csv::StringRecord,
    format: NumberFormat,
    policy: RowPolicy,
) -> Option<BenchmarkRow> {
    let mut fields = record.iter();
    let name = fields.next()?.to_string();

    let mut values = Vec::new();
    for field in fields {
        if field.trim().is_empty() {
            // blank fields are not parse failures, only discarded rows care
            match policy {
                RowPolicy::SkipField => continue,
                RowPolicy::DiscardRow => {
                    warn!("discarding row {name:?}: blank value field");
                    return None;
                }
            }
        }

        match parse_number(field, format) {
            Some(value) => values.push(value),
            None => match policy {
                RowPolicy::SkipField => {
                    debug!("skipping unparseable field {field:?} in row {name:?}");
                }
                RowPolicy::DiscardRow => {
                    warn!("discarding row {name:?}: unparseable field {field:?}");
                    return None;
                }
            },
        }
    }

    if values.is_empty() {
        debug!("dropping row {name:?}: no parseable values");
        return None;
    }

    Some(BenchmarkRow { name, values })
}

pub fn parse_number(raw: &str, format: NumberFormat) -> Option<f64> {
    let normalized = match format {
        NumberFormat::DecimalComma => raw.trim().replace(',', "."),
        NumberFormat::ThousandsComma => raw.trim().replace(',', ""),
    };

    normalized.parse().ok()
}
