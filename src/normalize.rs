// Module responsible for turning parsed rows into chart-ready entries.

use crate::ingest::BenchmarkRow;
use crate::statistics::calculate_mean;
use log::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedEntry {
    pub name: String,
    pub mean: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DistributionEntry {
    pub name: String,
    pub samples: Vec<f64>,
}

/// One bar per row: the arithmetic mean of its measurements, in row order.
pub fn aggregate_rows(rows: &[BenchmarkRow]) -> Vec<AggregatedEntry> {
    rows.iter()
        .map(|row| AggregatedEntry {
            name: row.name.clone(),
            mean: calculate_mean(&row.values),
        })
        .collect()
}

/// One box per row, drawn from the measurements as they were recorded.
pub fn direct_distributions(rows: &[BenchmarkRow]) -> Vec<DistributionEntry> {
    rows.iter()
        .map(|row| DistributionEntry {
            name: row.name.clone(),
            samples: row.values.clone(),
        })
        .collect()
}

/// Rows of the form `name;min;max;mean;rme` carry a precomputed summary, not
/// samples. A box still needs a numeric series, so a 3-point `[min, mean,
/// max]` set stands in. `rme` is part of the format but is not plotted.
pub fn synthesized_distributions(rows: &[BenchmarkRow]) -> Vec<DistributionEntry> {
    rows.iter()
        .filter_map(|row| match row.values[..] {
            [min, max, mean, _rme] => Some(DistributionEntry {
                name: row.name.clone(),
                samples: vec![min, mean, max],
            }),
            _ => {
                warn!(
                    "skipping row {:?}: expected 4 summary fields, got {}",
                    row.name,
                    row.values.len()
                );
                None
            }
        })
        .collect()
}
