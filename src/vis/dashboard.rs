//! Six-panel image dashboard drawn with plotters
//!
//! The panels are laid out on a 2x3 grid:
//!
//! | | | |
//! |---|---|---|
//! | histogram | box plot by branch | performance pie |
//! | CGPA vs rank | branch means | cumulative distribution |

use std::f64::consts::{FRAC_PI_2, TAU};
use std::path::Path;

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::panels::DashboardData;
use crate::config::{AnalysisConfig, ChartFormat};
use crate::error::Result;

type Chart2d<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Dashboard appearance
#[derive(Debug, Clone)]
pub struct PlotSettings {
    /// Title above the grid
    pub title: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    pub format: ChartFormat,
    /// Draw grid lines behind the axes panels
    pub show_grid: bool,
    /// Histogram bar colour
    pub histogram_color: (u8, u8, u8),
    /// Pie wedges and box fills
    pub palette: Vec<(u8, u8, u8)>,
    /// Bars of the branch means panel
    pub branch_palette: Vec<(u8, u8, u8)>,
}

impl Default for PlotSettings {
    fn default() -> Self {
        PlotSettings {
            title: "CGPA Analysis Dashboard".to_string(),
            width: 1800,
            height: 1200,
            format: ChartFormat::Svg,
            show_grid: true,
            histogram_color: (135, 206, 235),
            palette: vec![
                (31, 119, 180),
                (255, 127, 14),
                (44, 160, 44),
                (214, 39, 40),
                (148, 103, 189),
            ],
            branch_palette: vec![(255, 107, 107), (78, 205, 196), (69, 183, 209)],
        }
    }
}

impl PlotSettings {
    pub fn from_config(config: &AnalysisConfig) -> Self {
        PlotSettings {
            width: config.width,
            height: config.height,
            format: config.output_format,
            ..PlotSettings::default()
        }
    }
}

fn pick(palette: &[(u8, u8, u8)], i: usize) -> RGBColor {
    let (r, g, b) = palette
        .get(i % palette.len().max(1))
        .copied()
        .unwrap_or((0, 0, 0));
    RGBColor(r, g, b)
}

fn label_style(size: f64, pos: Pos) -> TextStyle<'static> {
    TextStyle::from(("sans-serif", size).into_font()).pos(pos)
}

/// Draw the dashboard to `path` in the configured format
pub fn render_dashboard<P: AsRef<Path>>(
    data: &DashboardData,
    path: P,
    settings: &PlotSettings,
) -> Result<()> {
    let path = path.as_ref();
    let size = (settings.width, settings.height);
    match settings.format {
        ChartFormat::Svg => {
            draw_dashboard(SVGBackend::new(path, size).into_drawing_area(), data, settings)?
        }
        ChartFormat::Png => {
            draw_dashboard(BitMapBackend::new(path, size).into_drawing_area(), data, settings)?
        }
    }
    log::debug!("dashboard written to {}", path.display());
    Ok(())
}

fn draw_dashboard<DB>(
    root: DrawingArea<DB, Shift>,
    data: &DashboardData,
    settings: &PlotSettings,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let body = root.titled(&settings.title, ("sans-serif", 32))?;
    let panels = body.split_evenly((2, 3));

    draw_histogram(&panels[0], data, settings)?;
    draw_box_plot(&panels[1], data, settings)?;
    draw_pie(&panels[2], data, settings)?;
    draw_rank_curve(&panels[3], data, settings)?;
    draw_branch_means(&panels[4], data, settings)?;
    draw_ecdf(&panels[5], data, settings)?;

    root.present()?;
    Ok(())
}

fn axes<'a, DB>(
    area: &'a DrawingArea<DB, Shift>,
    caption: &str,
    x: std::ops::Range<f64>,
    y: std::ops::Range<f64>,
) -> Result<Chart2d<'a, DB>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    Ok(ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x, y)?)
}

fn mesh<DB>(chart: &mut Chart2d<'_, DB>, x_desc: &str, y_desc: &str, grid: bool) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let mut mesh = chart.configure_mesh();
    mesh.x_desc(x_desc).y_desc(y_desc);
    if !grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;
    Ok(())
}

/// Axis labels at integer positions name the categories
fn category_mesh<DB>(
    chart: &mut Chart2d<'_, DB>,
    names: &[String],
    x_desc: &str,
    y_desc: &str,
    grid: bool,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let formatter = |v: &f64| {
        let i = v.round();
        if (v - i).abs() < 1e-6 && i >= 0.0 {
            names.get(i as usize).cloned().unwrap_or_default()
        } else {
            String::new()
        }
    };
    let mut mesh = chart.configure_mesh();
    mesh.x_labels(names.len() * 2 + 1)
        .x_label_formatter(&formatter)
        .x_desc(x_desc)
        .y_desc(y_desc)
        .disable_x_mesh();
    if !grid {
        mesh.disable_y_mesh();
    }
    mesh.draw()?;
    Ok(())
}

fn padded(lo: f64, hi: f64, pad: f64) -> std::ops::Range<f64> {
    let margin = ((hi - lo) * pad).max(1e-3);
    (lo - margin)..(hi + margin)
}

fn draw_histogram<DB>(
    area: &DrawingArea<DB, Shift>,
    data: &DashboardData,
    settings: &PlotSettings,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (Some(first), Some(last)) = (data.histogram.first(), data.histogram.last()) else {
        return Ok(());
    };
    let top = data.histogram.iter().map(|b| b.count).max().unwrap_or(1).max(1) as f64 * 1.15;

    let mut chart = axes(area, "CGPA Distribution", first.lower..last.upper, 0.0..top)?;
    mesh(&mut chart, "CGPA", "Frequency", settings.show_grid)?;

    let (r, g, b) = settings.histogram_color;
    let fill = RGBColor(r, g, b);
    chart.draw_series(data.histogram.iter().map(|bin| {
        Rectangle::new(
            [(bin.lower, 0.0), (bin.upper, bin.count as f64)],
            fill.mix(0.7).filled(),
        )
    }))?;
    chart.draw_series(data.histogram.iter().map(|bin| {
        Rectangle::new(
            [(bin.lower, 0.0), (bin.upper, bin.count as f64)],
            BLACK.stroke_width(1),
        )
    }))?;

    chart
        .draw_series(LineSeries::new(
            vec![(data.mean, 0.0), (data.mean, top)],
            RED.stroke_width(2),
        ))?
        .label(format!("Mean: {:.2}", data.mean))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));
    let median_color = RGBColor(0, 128, 0);
    chart
        .draw_series(LineSeries::new(
            vec![(data.median, 0.0), (data.median, top)],
            median_color.stroke_width(2),
        ))?
        .label(format!("Median: {:.2}", data.median))
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], median_color.stroke_width(2))
        });

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;
    Ok(())
}

fn draw_box_plot<DB>(
    area: &DrawingArea<DB, Shift>,
    data: &DashboardData,
    settings: &PlotSettings,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let boxes = &data.branch_boxes;
    if boxes.is_empty() {
        return Ok(());
    }
    let values = boxes.iter().flat_map(|b| {
        b.outliers
            .iter()
            .cloned()
            .chain([b.whisker_low, b.whisker_high])
    });
    let lo = values.clone().fold(f64::INFINITY, f64::min);
    let hi = values.fold(f64::NEG_INFINITY, f64::max);
    let names: Vec<String> = boxes.iter().map(|b| b.label.clone()).collect();

    let mut chart = axes(
        area,
        "CGPA Distribution by Branch",
        -0.5..(boxes.len() as f64 - 0.5),
        padded(lo, hi, 0.08),
    )?;
    category_mesh(&mut chart, &names, "Branch", "CGPA", settings.show_grid)?;

    const HALF: f64 = 0.25;
    for (i, b) in boxes.iter().enumerate() {
        let x = i as f64;
        let color = pick(&settings.palette, i);
        let corners = [(x - HALF, b.q1), (x + HALF, b.q3)];
        chart.draw_series(std::iter::once(Rectangle::new(
            corners,
            color.mix(0.4).filled(),
        )))?;
        chart.draw_series(std::iter::once(Rectangle::new(
            corners,
            BLACK.stroke_width(1),
        )))?;
        chart.draw_series([
            PathElement::new(vec![(x, b.whisker_low), (x, b.q1)], BLACK.stroke_width(1)),
            PathElement::new(vec![(x, b.q3), (x, b.whisker_high)], BLACK.stroke_width(1)),
            PathElement::new(
                vec![(x - HALF / 2.0, b.whisker_low), (x + HALF / 2.0, b.whisker_low)],
                BLACK.stroke_width(1),
            ),
            PathElement::new(
                vec![(x - HALF / 2.0, b.whisker_high), (x + HALF / 2.0, b.whisker_high)],
                BLACK.stroke_width(1),
            ),
            PathElement::new(
                vec![(x - HALF, b.median), (x + HALF, b.median)],
                RED.stroke_width(2),
            ),
        ])?;
        chart.draw_series(
            b.outliers
                .iter()
                .map(|&v| Circle::new((x, v), 3, BLACK.stroke_width(1))),
        )?;
    }
    Ok(())
}

fn draw_pie<DB>(
    area: &DrawingArea<DB, Shift>,
    data: &DashboardData,
    settings: &PlotSettings,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let total: usize = data.performance_slices.iter().map(|s| s.count).sum();
    if total == 0 {
        return Ok(());
    }

    // Unit circle in a frame stretched to the panel so the pie stays round
    let (w, h) = area.dim_in_pixel();
    let aspect = w as f64 / h.max(1) as f64;
    let mut chart = ChartBuilder::on(area)
        .caption("Performance Level Distribution", ("sans-serif", 22))
        .margin(12)
        .build_cartesian_2d(-1.5 * aspect..1.5 * aspect, -1.5..1.5)?;

    let centered = label_style(16.0, Pos::new(HPos::Center, VPos::Center));
    let mut start = FRAC_PI_2;
    for (i, slice) in data.performance_slices.iter().enumerate() {
        let sweep = slice.count as f64 / total as f64 * TAU;
        let steps = ((sweep / TAU) * 180.0).ceil().max(2.0) as usize;

        let mut outline = Vec::with_capacity(steps + 2);
        outline.push((0.0, 0.0));
        for s in 0..=steps {
            let angle = start + sweep * s as f64 / steps as f64;
            outline.push((angle.cos(), angle.sin()));
        }
        chart.draw_series(std::iter::once(Polygon::new(
            outline,
            pick(&settings.palette, i).filled(),
        )))?;

        let mid = start + sweep / 2.0;
        chart.draw_series([
            Text::new(
                slice.label.clone(),
                (1.2 * mid.cos(), 1.2 * mid.sin()),
                centered.clone(),
            ),
            Text::new(
                format!("{:.1}%", slice.percent),
                (0.6 * mid.cos(), 0.6 * mid.sin()),
                centered.clone(),
            ),
        ])?;
        start += sweep;
    }
    Ok(())
}

fn draw_rank_curve<DB>(
    area: &DrawingArea<DB, Shift>,
    data: &DashboardData,
    settings: &PlotSettings,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let points = &data.rank_curve;
    let Some(&(_, best)) = points.first() else {
        return Ok(());
    };
    let worst = points.last().map(|p| p.1).unwrap_or(best);

    let mut chart = axes(
        area,
        "CGPA vs Student Rank",
        padded(1.0, points.len() as f64, 0.02),
        padded(worst, best, 0.05),
    )?;
    mesh(&mut chart, "Rank", "CGPA", settings.show_grid)?;

    let color = pick(&settings.palette, 0);
    chart.draw_series(LineSeries::new(
        points.iter().copied(),
        color.mix(0.6).stroke_width(1),
    ))?;
    chart.draw_series(
        points
            .iter()
            .map(|&p| Circle::new(p, 2, color.mix(0.6).filled())),
    )?;
    Ok(())
}

fn draw_branch_means<DB>(
    area: &DrawingArea<DB, Shift>,
    data: &DashboardData,
    settings: &PlotSettings,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let means = &data.branch_means;
    if means.is_empty() {
        return Ok(());
    }
    let top = means.iter().map(|(_, m)| *m).fold(0.0, f64::max) * 1.15;
    let names: Vec<String> = means.iter().map(|(name, _)| name.clone()).collect();

    let mut chart = axes(
        area,
        "Average CGPA by Branch",
        -0.5..(means.len() as f64 - 0.5),
        0.0..top.max(1.0),
    )?;
    category_mesh(&mut chart, &names, "Branch", "Average CGPA", settings.show_grid)?;

    chart.draw_series(means.iter().enumerate().map(|(i, (_, m))| {
        let x = i as f64;
        Rectangle::new(
            [(x - 0.4, 0.0), (x + 0.4, *m)],
            pick(&settings.branch_palette, i).filled(),
        )
    }))?;

    let above = label_style(16.0, Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(means.iter().enumerate().map(|(i, (_, m))| {
        Text::new(format!("{:.3}", m), (i as f64, m + 0.02), above.clone())
    }))?;
    Ok(())
}

fn draw_ecdf<DB>(
    area: &DrawingArea<DB, Shift>,
    data: &DashboardData,
    settings: &PlotSettings,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let points = &data.ecdf;
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Ok(());
    };

    let mut chart = axes(
        area,
        "Cumulative Distribution of CGPA",
        padded(first.0, last.0, 0.03),
        0.0..1.05,
    )?;
    mesh(
        &mut chart,
        "CGPA",
        "Cumulative Probability",
        settings.show_grid,
    )?;

    let color = pick(&settings.palette, 0);
    chart.draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(1)))?;
    chart.draw_series(points.iter().map(|&p| Circle::new(p, 2, color.filled())))?;
    Ok(())
}
