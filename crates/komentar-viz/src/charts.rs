//! Bar and line chart recipes.

use plotters::prelude::*;

use crate::ChartError;
use crate::figure::{Canvas, FONT};
use crate::plan::{BarSpec, LineSpec};

/// Colour scheme for a series of bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// Qualitative colours, cycled.
    Set2,
    /// Soft qualitative colours, cycled.
    Pastel,
    /// Sequential viridis ramp, spread evenly across the bars.
    Viridis,
}

const SET2: &[RGBColor] = &[
    RGBColor(102, 194, 165),
    RGBColor(252, 141, 98),
    RGBColor(141, 160, 203),
    RGBColor(231, 138, 195),
    RGBColor(166, 216, 84),
    RGBColor(255, 217, 47),
    RGBColor(229, 196, 148),
    RGBColor(179, 179, 179),
];

const PASTEL: &[RGBColor] = &[
    RGBColor(161, 201, 244),
    RGBColor(255, 180, 130),
    RGBColor(141, 229, 161),
    RGBColor(255, 159, 155),
    RGBColor(208, 187, 255),
    RGBColor(222, 187, 155),
    RGBColor(250, 176, 228),
    RGBColor(207, 207, 207),
    RGBColor(255, 254, 163),
    RGBColor(185, 242, 240),
];

const VIRIDIS: &[RGBColor] = &[
    RGBColor(68, 1, 84),
    RGBColor(72, 40, 120),
    RGBColor(62, 74, 137),
    RGBColor(49, 104, 142),
    RGBColor(38, 130, 142),
    RGBColor(31, 158, 137),
    RGBColor(53, 183, 121),
    RGBColor(109, 205, 89),
    RGBColor(180, 222, 44),
    RGBColor(253, 231, 37),
];

const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);

impl Palette {
    /// Colour of bar `i` out of `n`.
    pub fn color(self, i: usize, n: usize) -> RGBColor {
        match self {
            Self::Set2 => SET2[i % SET2.len()],
            Self::Pastel => PASTEL[i % PASTEL.len()],
            Self::Viridis => {
                if n <= 1 {
                    return VIRIDIS[0];
                }
                let pos = i.min(n - 1) * (VIRIDIS.len() - 1) / (n - 1);
                VIRIDIS[pos]
            }
        }
    }
}

/// Upper bound for the count axis, leaving room above the tallest bar.
fn count_axis_max(max: usize) -> u32 {
    let max = max as u32;
    (max + max / 10).max(max + 1)
}

pub(crate) fn draw_bar(root: &Canvas<'_>, spec: &BarSpec) -> Result<(), ChartError> {
    let n = spec.categories.len();
    let y_max = count_axis_max(spec.counts.iter().copied().max().unwrap_or(0));

    let mut chart = ChartBuilder::on(root)
        .caption(&spec.title, (FONT, 22))
        .margin(12)
        .x_label_area_size(44)
        .y_label_area_size(56)
        .build_cartesian_2d((0u32..n.max(1) as u32).into_segmented(), 0u32..y_max)?;

    let label = |v: &SegmentValue<u32>| match v {
        SegmentValue::CenterOf(i) => spec.categories.get(*i as usize).cloned().unwrap_or_default(),
        _ => String::new(),
    };
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n.max(1))
        .x_label_formatter(&label)
        .x_desc(spec.x_desc.as_str())
        .y_desc(spec.y_desc.as_str())
        .draw()?;

    chart.draw_series(spec.counts.iter().enumerate().map(|(i, &count)| {
        let x = i as u32;
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(x), 0),
                (SegmentValue::Exact(x + 1), count as u32),
            ],
            spec.palette.color(i, n).filled(),
        );
        bar.set_margin(0, 0, 6, 6);
        bar
    }))?;

    Ok(())
}

pub(crate) fn draw_line(root: &Canvas<'_>, spec: &LineSpec) -> Result<(), ChartError> {
    let n = spec.points.len();
    let x_max = n.saturating_sub(1).max(1) as u32;
    let y_max = count_axis_max(spec.points.iter().map(|(_, c)| *c).max().unwrap_or(0));

    let mut chart = ChartBuilder::on(root)
        .caption(&spec.title, (FONT, 22))
        .margin(12)
        .x_label_area_size(44)
        .y_label_area_size(56)
        .build_cartesian_2d(0u32..x_max, 0u32..y_max)?;

    let label = |v: &u32| {
        spec.points
            .get(*v as usize)
            .map(|(x, _)| x.clone())
            .unwrap_or_default()
    };
    chart
        .configure_mesh()
        .x_labels(n.clamp(1, 12))
        .x_label_formatter(&label)
        .x_desc(spec.x_desc.as_str())
        .y_desc(spec.y_desc.as_str())
        .draw()?;

    let color = LINE_COLOR;
    let points: Vec<(u32, u32)> = spec
        .points
        .iter()
        .enumerate()
        .map(|(i, (_, c))| (i as u32, *c as u32))
        .collect();
    chart.draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?;
    chart.draw_series(
        points
            .iter()
            .map(|&p| Circle::new(p, 3, color.filled())),
    )?;

    Ok(())
}
