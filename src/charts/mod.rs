// Module responsible for rendering charts to SVG.
//
// Bars and boxes are assembled from plotters primitives on an f64 category
// axis: entry i owns the segment [i, i+1] and everything for it is drawn
// around the center i + 0.5. Category labels are placed manually below the
// axis so they can be word-wrapped over several lines or rotated, which the
// mesh labels can't do.

use crate::labels::wrap_label;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;

pub mod bar;
pub mod whisker;

static DEFAULT_FONT: &str = "sans-serif";

pub const GREEN_TINT: RGBColor = RGBColor(0xd5, 0xe8, 0xd4);
pub const ORANGE_TINT: RGBColor = RGBColor(0xff, 0xe6, 0xcc);
pub const SKY_BLUE: RGBColor = RGBColor(0x87, 0xce, 0xeb);

const MEDIAN_ORANGE: RGBColor = RGBColor(0xff, 0x7f, 0x0e);
const OUTLIER_GRAY: RGBColor = RGBColor(0x80, 0x80, 0x80);

const LABEL_FONT_SIZE: u32 = 12;
const LABEL_LINE_HEIGHT: i32 = 16;
const TICK_GAP: i32 = 5;

#[derive(Debug, Copy, Clone)]
pub enum LabelLayout {
    /// Horizontal labels, word-wrapped to the given width.
    Wrapped(usize),
    /// One vertical line per label, for long names on narrow charts.
    Vertical,
}

#[derive(Debug, Copy, Clone)]
pub struct BarStyle {
    pub size: (u32, u32),
    pub title: &'static str,
    pub y_desc: &'static str,
    pub labels: LabelLayout,
    pub bar_color: RGBColor,
    /// Bars at index >= `.0` are drawn in color `.1`. Cosmetic only.
    pub highlight: Option<(usize, RGBColor)>,
    pub annotation_font_size: u32,
    pub transparent: bool,
}

#[derive(Debug, Copy, Clone)]
pub struct WhiskerStyle {
    pub size: (u32, u32),
    pub title: &'static str,
    pub y_desc: &'static str,
    pub labels: LabelLayout,
    /// Pin the y-axis floor to zero instead of following the data.
    pub clamp_zero: bool,
    /// Draw samples beyond the whisker fences as small muted dots.
    pub show_outliers: bool,
    pub horizontal_grid: bool,
    pub transparent: bool,
}

/// Pixel height to reserve under the plot for the category labels.
fn label_area_size(names: &[String], layout: LabelLayout) -> u32 {
    match layout {
        LabelLayout::Wrapped(width) => {
            let lines = names
                .iter()
                .map(|name| wrap_label(name, width).len())
                .max()
                .unwrap_or(1);
            10 + lines as u32 * LABEL_LINE_HEIGHT as u32
        }
        LabelLayout::Vertical => {
            let longest = names.iter().map(|name| name.len()).max().unwrap_or(0);
            10 + longest as u32 * 7
        }
    }
}

/// Draws the category labels below the axis, one per entry, centered under
/// the entry's segment. `y_base` is the bottom of the y range.
fn draw_category_labels(
    root: &DrawingArea<SVGBackend, Shift>,
    chart: &ChartContext<SVGBackend, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    names: &[String],
    layout: LabelLayout,
    y_base: f64,
) -> anyhow::Result<()> {
    for (idx, name) in names.iter().enumerate() {
        let (px, py) = chart.backend_coord(&(idx as f64 + 0.5, y_base));

        match layout {
            LabelLayout::Wrapped(width) => {
                for (line_idx, line) in wrap_label(name, width).into_iter().enumerate() {
                    let style = (DEFAULT_FONT, LABEL_FONT_SIZE)
                        .into_font()
                        .color(&BLACK)
                        .pos(Pos::new(HPos::Center, VPos::Top));
                    root.draw(&Text::new(
                        line,
                        (px, py + TICK_GAP + line_idx as i32 * LABEL_LINE_HEIGHT),
                        style,
                    ))?;
                }
            }
            LabelLayout::Vertical => {
                let style = (DEFAULT_FONT, LABEL_FONT_SIZE)
                    .into_font()
                    .transform(FontTransform::Rotate90)
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Left, VPos::Center));
                root.draw(&Text::new(name.clone(), (px, py + TICK_GAP), style))?;
            }
        }
    }

    Ok(())
}
