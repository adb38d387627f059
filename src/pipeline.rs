// Module responsible for driving one chart job from input file to SVG.
//
// # Procedure
// 1. Read and parse the input rows
// 2. Normalize them for the configured chart kind
// 3. Render the chart and write the output file
// 4. Print per-row statistics

use crate::charts::{bar, whisker, BarStyle, WhiskerStyle};
use crate::ingest::{self, NumberFormat, RowPolicy};
use crate::normalize;
use crate::statistics::calculate_distribution;
use log::info;

pub enum ChartKind {
    Bar(BarStyle),
    /// Boxes drawn from the measurements as recorded, one row per series.
    WhiskerDirect(WhiskerStyle),
    /// Boxes synthesized from `name;min;max;mean;rme` summary rows.
    WhiskerSummary(WhiskerStyle),
}

/// Fixed description of one chart tool run. Changing what a tool reads or
/// draws means editing its job, not passing flags.
pub struct ChartJob<'a> {
    pub name: &'a str,
    pub input: &'a str,
    pub output: &'a str,
    pub delimiter: u8,
    pub number_format: NumberFormat,
    pub kind: ChartKind,
}

pub fn run_chart_job(job: &ChartJob) -> anyhow::Result<()> {
    println!("\n=== {} ===", job.name);
    info!("reading {}", job.input);

    let rows = ingest::read_rows(
        job.input,
        job.delimiter,
        job.number_format,
        RowPolicy::SkipField,
    )?;
    anyhow::ensure!(!rows.is_empty(), "no usable rows in {}", job.input);

    match &job.kind {
        ChartKind::Bar(style) => {
            let entries = normalize::aggregate_rows(&rows);
            bar::render(&entries, style, job.output)?;
            print_statistics(rows.iter().map(|row| (row.name.as_str(), &row.values[..])))?;
        }
        ChartKind::WhiskerDirect(style) => {
            let entries = normalize::direct_distributions(&rows);
            whisker::render(&entries, style, job.output)?;
            print_statistics(
                entries
                    .iter()
                    .map(|entry| (entry.name.as_str(), &entry.samples[..])),
            )?;
        }
        ChartKind::WhiskerSummary(style) => {
            let entries = normalize::synthesized_distributions(&rows);
            anyhow::ensure!(
                !entries.is_empty(),
                "no summary rows with 4 value fields in {}",
                job.input
            );
            whisker::render(&entries, style, job.output)?;
            print_statistics(
                entries
                    .iter()
                    .map(|entry| (entry.name.as_str(), &entry.samples[..])),
            )?;
        }
    }

    info!("wrote {}", job.output);
    Ok(())
}

fn print_statistics<'a>(series: impl Iterator<Item = (&'a str, &'a [f64])>) -> anyhow::Result<()> {
    for (name, samples) in series {
        let distribution = calculate_distribution(samples)?;
        println!("\n=== {name} ===\n{distribution}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{LabelLayout, GREEN_TINT};

    #[test]
    fn test_missing_input_file_is_an_error() {
        let job = ChartJob {
            name: "missing input",
            input: "does-not-exist.csv",
            output: "unused.svg",
            delimiter: b';',
            number_format: NumberFormat::DecimalComma,
            kind: ChartKind::Bar(BarStyle {
                size: (100, 100),
                title: "",
                y_desc: "",
                labels: LabelLayout::Wrapped(10),
                bar_color: GREEN_TINT,
                highlight: None,
                annotation_font_size: 12,
                transparent: false,
            }),
        };

        assert!(run_chart_job(&job).is_err());
    }
}
