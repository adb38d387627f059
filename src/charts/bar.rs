use super::{BarStyle, DEFAULT_FONT, LABEL_FONT_SIZE};
use crate::normalize::AggregatedEntry;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// Renders one bar per entry, in entry order, with the mean printed above
/// the bar top.
pub fn render(
    entries: &[AggregatedEntry],
    style: &BarStyle,
    output: impl AsRef<Path>,
) -> anyhow::Result<()> {
    anyhow::ensure!(!entries.is_empty(), "no entries to plot");
    let output = output.as_ref();

    let names: Vec<String> = entries.iter().map(|entry| entry.name.clone()).collect();

    let root = SVGBackend::new(output, style.size).into_drawing_area();
    if !style.transparent {
        root.fill(&WHITE)?;
    }

    // headroom above the tallest bar so its annotation stays inside the plot
    let tallest = entries.iter().map(|entry| entry.mean).fold(0.0f64, f64::max);
    let y_max = if tallest > 0.0 { tallest * 1.15 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption(style.title, (DEFAULT_FONT, 20))
        .margin(10)
        .x_label_area_size(super::label_area_size(&names, style.labels))
        .y_label_area_size(70)
        .build_cartesian_2d(0f64..entries.len() as f64, 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(0)
        .y_desc(style.y_desc)
        .label_style((DEFAULT_FONT, LABEL_FONT_SIZE))
        .draw()?;

    for (idx, entry) in entries.iter().enumerate() {
        let color = match style.highlight {
            Some((from, highlight)) if idx >= from => highlight,
            _ => style.bar_color,
        };

        let x0 = idx as f64 + 0.1;
        let x1 = idx as f64 + 0.9;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x0, 0.0), (x1, entry.mean)],
            color.filled(),
        )))?;

        let annotation = (DEFAULT_FONT, style.annotation_font_size)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(std::iter::once(Text::new(
            format!("{:.2}", entry.mean),
            (idx as f64 + 0.5, entry.mean),
            annotation,
        )))?;
    }

    super::draw_category_labels(&root, &chart, &names, style.labels, 0.0)?;
    root.present()?;

    Ok(())
}
