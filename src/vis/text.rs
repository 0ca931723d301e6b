//! The six dashboard panels as terminal text

use super::ascii::{
    BarChart, BarChartConfig, BoxPlot, Chart, ChartConfig, Histogram, HistogramConfig, LinePlot,
    LinePlotConfig,
};
use super::panels::DashboardData;

/// Render every panel, separated by blank lines
pub fn render_text_dashboard(data: &DashboardData) -> String {
    let mut panels = Vec::with_capacity(6);

    let mut histogram = Histogram::with_config(
        &data.histogram,
        HistogramConfig {
            base: ChartConfig::titled("CGPA Distribution"),
            ..Default::default()
        },
    )
    .render();
    histogram.push_str(&format!(
        "Mean: {:.2}  Median: {:.2}\n",
        data.mean, data.median
    ));
    panels.push(histogram);

    panels.push(
        BoxPlot::new(
            &data.branch_boxes,
            ChartConfig::titled("CGPA Distribution by Branch"),
        )
        .render(),
    );

    let labels: Vec<&str> = data
        .performance_slices
        .iter()
        .map(|s| s.label.as_str())
        .collect();
    let shares: Vec<f64> = data.performance_slices.iter().map(|s| s.percent).collect();
    panels.push(
        BarChart::with_config(
            &labels,
            &shares,
            BarChartConfig {
                base: ChartConfig::titled("Performance Level Distribution"),
                precision: 1,
                unit: "%".to_string(),
                ..Default::default()
            },
        )
        .render(),
    );

    panels.push(
        LinePlot::with_config(
            &data.rank_curve,
            LinePlotConfig {
                base: ChartConfig::titled("CGPA vs Student Rank"),
                ..Default::default()
            },
        )
        .render(),
    );

    let branches: Vec<&str> = data.branch_means.iter().map(|(b, _)| b.as_str()).collect();
    let means: Vec<f64> = data.branch_means.iter().map(|(_, m)| *m).collect();
    panels.push(
        BarChart::with_config(
            &branches,
            &means,
            BarChartConfig {
                base: ChartConfig::titled("Average CGPA by Branch"),
                precision: 3,
                ..Default::default()
            },
        )
        .render(),
    );

    panels.push(
        LinePlot::with_config(
            &data.ecdf,
            LinePlotConfig {
                base: ChartConfig::titled("Cumulative Distribution of CGPA"),
                point_char: '•',
            },
        )
        .render(),
    );

    panels.join("\n")
}
