// Renders the mean execution time per parser as an annotated bar chart.
//
// The two leading bars are the baseline parsers, everything after them is an
// alternative and gets the highlight color.

use bench_charts::charts::{BarStyle, LabelLayout, GREEN_TINT, ORANGE_TINT};
use bench_charts::ingest::NumberFormat;
use bench_charts::pipeline::{run_chart_job, ChartJob, ChartKind};

const JOB: ChartJob = ChartJob {
    name: "mean execution time per parser",
    input: "bench-times.csv",
    output: "barplot_means.svg",
    delimiter: b';',
    number_format: NumberFormat::DecimalComma,
    kind: ChartKind::Bar(BarStyle {
        size: (1200, 600),
        title: "Mean Execution Time per Parser",
        y_desc: "Mean Execution Time (ms)",
        labels: LabelLayout::Wrapped(30),
        bar_color: GREEN_TINT,
        highlight: Some((2, ORANGE_TINT)),
        annotation_font_size: 12,
        transparent: true,
    }),
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run_chart_job(&JOB)
}
