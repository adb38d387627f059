use bench_charts::charts::{BarStyle, LabelLayout, WhiskerStyle, GREEN_TINT, ORANGE_TINT};
use bench_charts::ingest::NumberFormat;
use bench_charts::pipeline::{run_chart_job, ChartJob, ChartKind};
use std::path::Path;

fn write_input(dir: &Path, contents: &str) -> String {
    let path = dir.join("input.csv");
    std::fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

fn bar_style() -> BarStyle {
    BarStyle {
        size: (1200, 600),
        title: "Mean Execution Time per Parser",
        y_desc: "Mean Execution Time (ms)",
        labels: LabelLayout::Wrapped(30),
        bar_color: GREEN_TINT,
        highlight: Some((2, ORANGE_TINT)),
        annotation_font_size: 12,
        transparent: false,
    }
}

fn whisker_style() -> WhiskerStyle {
    WhiskerStyle {
        size: (1200, 800),
        title: "Execution Times per Parser",
        y_desc: "Execution Time (ms)",
        labels: LabelLayout::Wrapped(20),
        clamp_zero: true,
        show_outliers: false,
        horizontal_grid: true,
        transparent: false,
    }
}

#[test]
fn test_bar_chart_from_decimal_comma_measurements() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "parserA;10,0;12,0;\nparserB;20,0\n");
    let output = dir.path().join("barplot_means.svg");

    let job = ChartJob {
        name: "bar chart",
        input: &input,
        output: output.to_str().unwrap(),
        delimiter: b';',
        number_format: NumberFormat::DecimalComma,
        kind: ChartKind::Bar(bar_style()),
    };
    run_chart_job(&job).unwrap();

    let svg = std::fs::read_to_string(&output).unwrap().to_lowercase();
    assert!(svg.contains("parsera"));
    assert!(svg.contains("11.00"), "mean of 10,0 and 12,0 is annotated");
    assert!(svg.contains("parserb"));
    assert!(svg.contains("20.00"));
}

#[test]
fn test_bar_chart_from_thousands_comma_measurements() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "toolX;1,000;2,000;3,000\n");
    let output = dir.path().join("barplot_means.svg");

    let job = ChartJob {
        name: "bar chart",
        input: &input,
        output: output.to_str().unwrap(),
        delimiter: b';',
        number_format: NumberFormat::ThousandsComma,
        kind: ChartKind::Bar(bar_style()),
    };
    run_chart_job(&job).unwrap();

    let svg = std::fs::read_to_string(&output).unwrap().to_lowercase();
    assert!(svg.contains("toolx"));
    assert!(svg.contains("2000.00"), "mean of the degrouped values is annotated");
}

#[test]
fn test_measured_boxes_skip_unusable_rows() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "parserA;10,5;11,5;12,5\n\nbroken;x;y\nparserB;20,0;21,0\n",
    );
    let output = dir.path().join("boxplot_measured.svg");

    let job = ChartJob {
        name: "measured boxes",
        input: &input,
        output: output.to_str().unwrap(),
        delimiter: b';',
        number_format: NumberFormat::DecimalComma,
        kind: ChartKind::WhiskerDirect(whisker_style()),
    };
    run_chart_job(&job).unwrap();

    let svg = std::fs::read_to_string(&output).unwrap().to_lowercase();
    assert!(svg.contains("parsera"));
    assert!(svg.contains("parserb"));
    assert!(!svg.contains("broken"), "rows with no parseable values are excluded");
}

#[test]
fn test_summary_boxes_from_summary_rows() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "toolX;1,000;3,000;2,000;0.05\nshort;1;2\n",
    );
    let output = dir.path().join("boxplot_summary.svg");

    let job = ChartJob {
        name: "summary boxes",
        input: &input,
        output: output.to_str().unwrap(),
        delimiter: b';',
        number_format: NumberFormat::ThousandsComma,
        kind: ChartKind::WhiskerSummary(WhiskerStyle {
            labels: LabelLayout::Vertical,
            clamp_zero: false,
            show_outliers: true,
            horizontal_grid: false,
            ..whisker_style()
        }),
    };
    run_chart_job(&job).unwrap();

    let svg = std::fs::read_to_string(&output).unwrap().to_lowercase();
    assert!(svg.contains("toolx"));
    assert!(!svg.contains("short"), "summary rows need exactly 4 value fields");
}

#[test]
fn test_summary_job_without_valid_rows_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "short;1;2\n");
    let output = dir.path().join("boxplot_summary.svg");

    let job = ChartJob {
        name: "summary boxes",
        input: &input,
        output: output.to_str().unwrap(),
        delimiter: b';',
        number_format: NumberFormat::ThousandsComma,
        kind: ChartKind::WhiskerSummary(whisker_style()),
    };

    assert!(run_chart_job(&job).is_err());
}
