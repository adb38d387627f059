// Renders box plots from benchmark summary rows (`name;min;max;mean;rme`).

use bench_charts::charts::{LabelLayout, WhiskerStyle};
use bench_charts::ingest::NumberFormat;
use bench_charts::pipeline::{run_chart_job, ChartJob, ChartKind};

const JOB: ChartJob = ChartJob {
    name: "summary boxes per benchmark",
    input: "bench-to-ast11.csv",
    output: "boxplot_summary.svg",
    delimiter: b';',
    number_format: NumberFormat::ThousandsComma,
    kind: ChartKind::WhiskerSummary(WhiskerStyle {
        size: (1000, 600),
        title: "Boxplots for Each Row in CSV",
        y_desc: "Values",
        labels: LabelLayout::Vertical,
        clamp_zero: false,
        show_outliers: true,
        horizontal_grid: false,
        transparent: false,
    }),
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run_chart_job(&JOB)
}
