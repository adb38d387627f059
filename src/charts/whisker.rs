use super::{WhiskerStyle, DEFAULT_FONT, LABEL_FONT_SIZE, MEDIAN_ORANGE, OUTLIER_GRAY};
use crate::normalize::DistributionEntry;
use crate::statistics::{calculate_distribution, Distribution};
use plotters::prelude::*;
use std::path::Path;

const BOX_HALF_WIDTH: f64 = 0.25;
const CAP_HALF_WIDTH: f64 = 0.125;

/// Renders one box per entry, in entry order. Boxes span the quartiles with
/// a median line, whiskers reach the most extreme samples inside the 1.5 IQR
/// fences, and anything beyond the fences is an outlier.
pub fn render(
    entries: &[DistributionEntry],
    style: &WhiskerStyle,
    output: impl AsRef<Path>,
) -> anyhow::Result<()> {
    anyhow::ensure!(!entries.is_empty(), "no entries to plot");
    let output = output.as_ref();

    let distributions = entries
        .iter()
        .map(|entry| calculate_distribution(&entry.samples))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let names: Vec<String> = entries.iter().map(|entry| entry.name.clone()).collect();

    let root = SVGBackend::new(output, style.size).into_drawing_area();
    if !style.transparent {
        root.fill(&WHITE)?;
    }

    let (y_lo, y_hi) = y_bounds(&distributions, style);

    let mut chart = ChartBuilder::on(&root)
        .caption(style.title, (DEFAULT_FONT, 20))
        .margin(10)
        .x_label_area_size(super::label_area_size(&names, style.labels))
        .y_label_area_size(70)
        .build_cartesian_2d(0f64..entries.len() as f64, y_lo..y_hi)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_labels(0)
        .y_desc(style.y_desc)
        .label_style((DEFAULT_FONT, LABEL_FONT_SIZE));
    if style.horizontal_grid {
        mesh.disable_x_mesh()
            .bold_line_style(BLACK.mix(0.2))
            .light_line_style(TRANSPARENT);
    } else {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    for ((idx, entry), dist) in entries.iter().enumerate().zip(&distributions) {
        let center = idx as f64 + 0.5;

        // whisker stems and caps, lower from q25 and upper from q75
        for (whisker_end, stem_base) in [
            (dist.min_without_outliers, dist.q25),
            (dist.max_without_outliers, dist.q75),
        ] {
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(center, stem_base), (center, whisker_end)],
                BLACK.stroke_width(1),
            )))?;
            chart.draw_series(std::iter::once(PathElement::new(
                vec![
                    (center - CAP_HALF_WIDTH, whisker_end),
                    (center + CAP_HALF_WIDTH, whisker_end),
                ],
                BLACK.stroke_width(1),
            )))?;
        }

        chart.draw_series(std::iter::once(Rectangle::new(
            [
                (center - BOX_HALF_WIDTH, dist.q25),
                (center + BOX_HALF_WIDTH, dist.q75),
            ],
            BLACK.stroke_width(1),
        )))?;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![
                (center - BOX_HALF_WIDTH, dist.median),
                (center + BOX_HALF_WIDTH, dist.median),
            ],
            MEDIAN_ORANGE.stroke_width(2),
        )))?;

        if style.show_outliers {
            chart.draw_series(
                entry
                    .samples
                    .iter()
                    .copied()
                    .filter(|&sample| {
                        sample < dist.min_without_outliers || sample > dist.max_without_outliers
                    })
                    .map(|sample| Circle::new((center, sample), 2, OUTLIER_GRAY.filled())),
            )?;
        }
    }

    super::draw_category_labels(&root, &chart, &names, style.labels, y_lo)?;
    root.present()?;

    Ok(())
}

fn y_bounds(distributions: &[Distribution], style: &WhiskerStyle) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for dist in distributions {
        if style.show_outliers {
            lo = lo.min(dist.min);
            hi = hi.max(dist.max);
        } else {
            // hidden outliers don't get to stretch the axis
            lo = lo.min(dist.min_without_outliers);
            hi = hi.max(dist.max_without_outliers);
        }
    }

    let span = hi - lo;
    let pad = if span > 0.0 {
        span * 0.05
    } else {
        hi.abs().max(1.0) * 0.05
    };

    let y_lo = if style.clamp_zero { 0.0 } else { lo - pad };
    (y_lo, hi + pad)
}
