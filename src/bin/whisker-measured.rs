// Renders box plots from raw measurement rows, one box per parser.
//
// Outliers are suppressed here: single cold-start spikes would stretch the
// axis until every box collapses into a line.

use bench_charts::charts::{LabelLayout, WhiskerStyle};
use bench_charts::ingest::NumberFormat;
use bench_charts::pipeline::{run_chart_job, ChartJob, ChartKind};

const JOB: ChartJob = ChartJob {
    name: "execution time boxes per parser",
    input: "my-bench-times.csv",
    output: "boxplot_measured.svg",
    delimiter: b';',
    number_format: NumberFormat::DecimalComma,
    kind: ChartKind::WhiskerDirect(WhiskerStyle {
        size: (1200, 800),
        title: "Execution Times per Parser",
        y_desc: "Execution Time (ms)",
        labels: LabelLayout::Wrapped(20),
        clamp_zero: true,
        show_outliers: false,
        horizontal_grid: true,
        transparent: true,
    }),
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run_chart_job(&JOB)
}
