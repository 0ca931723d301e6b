//! Chart implementations for text-based visualization

use super::{title_line, Chart, ChartConfig, ChartStyle};
use crate::vis::panels::{BoxSummary, HistogramBin};

// ============================================================================
// Histogram
// ============================================================================

/// Configuration for histogram
#[derive(Debug, Clone)]
pub struct HistogramConfig {
    /// Base chart config
    pub base: ChartConfig,
    /// Chart style
    pub style: ChartStyle,
    /// Show bin counts
    pub show_counts: bool,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            base: ChartConfig::default(),
            style: ChartStyle::Unicode,
            show_counts: true,
        }
    }
}

/// Histogram chart for distribution visualization
#[derive(Debug, Clone)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    config: HistogramConfig,
}

impl Histogram {
    /// Histogram of precomputed bins
    pub fn new(bins: &[HistogramBin]) -> Self {
        Self::with_config(bins, HistogramConfig::default())
    }

    pub fn with_config(bins: &[HistogramBin], config: HistogramConfig) -> Self {
        Self {
            bins: bins.to_vec(),
            config,
        }
    }
}

impl Chart for Histogram {
    fn render(&self) -> String {
        if self.bins.is_empty() {
            return String::from("No data to display");
        }

        let mut output = title_line(&self.config.base.title, self.config.base.width);
        let max_count = self.bins.iter().map(|b| b.count).max().unwrap_or(1).max(1);
        let bar_width = self.config.base.width.saturating_sub(15);
        let bar_char = self.config.style.bar_char();

        for bin in &self.bins {
            let bar_len =
                (bin.count as f64 / max_count as f64 * bar_width as f64).round() as usize;
            let bar: String = std::iter::repeat(bar_char).take(bar_len).collect();

            output.push_str(&format!(
                "{:>6.2}-{:<6.2} │{:<width$}│",
                bin.lower,
                bin.upper,
                bar,
                width = bar_width
            ));
            if self.config.show_counts {
                output.push_str(&format!(" {}", bin.count));
            }
            output.push('\n');
        }

        output
    }
}

// ============================================================================
// Bar Chart
// ============================================================================

/// Configuration for bar chart
#[derive(Debug, Clone)]
pub struct BarChartConfig {
    /// Base chart config
    pub base: ChartConfig,
    /// Chart style
    pub style: ChartStyle,
    /// Show values on bars
    pub show_values: bool,
    /// Max label width
    pub label_width: usize,
    /// Decimal places of the printed values
    pub precision: usize,
    /// Appended to each printed value
    pub unit: String,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            base: ChartConfig::default(),
            style: ChartStyle::Unicode,
            show_values: true,
            label_width: 18,
            precision: 2,
            unit: String::new(),
        }
    }
}

/// Horizontal bar chart for labelled values
#[derive(Debug, Clone)]
pub struct BarChart {
    labels: Vec<String>,
    values: Vec<f64>,
    config: BarChartConfig,
}

impl BarChart {
    pub fn new(labels: &[&str], values: &[f64]) -> Self {
        Self::with_config(labels, values, BarChartConfig::default())
    }

    pub fn with_config(labels: &[&str], values: &[f64], config: BarChartConfig) -> Self {
        Self {
            labels: labels.iter().map(|s| s.to_string()).collect(),
            values: values.to_vec(),
            config,
        }
    }
}

impl Chart for BarChart {
    fn render(&self) -> String {
        if self.values.is_empty() {
            return String::from("No data to display");
        }

        let mut output = title_line(&self.config.base.title, self.config.base.width);
        let max_val = self
            .values
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        let bar_width = self
            .config
            .base
            .width
            .saturating_sub(self.config.label_width + 10);
        let bar_char = self.config.style.bar_char();

        for (label, &value) in self.labels.iter().zip(self.values.iter()) {
            let bar_len = if max_val > 0.0 {
                (value / max_val * bar_width as f64).round() as usize
            } else {
                0
            };

            let bar: String = std::iter::repeat(bar_char).take(bar_len).collect();
            let truncated_label: String = label.chars().take(self.config.label_width).collect();

            output.push_str(&format!(
                "{:>label_width$} │{:<bar_width$}│",
                truncated_label,
                bar,
                label_width = self.config.label_width,
                bar_width = bar_width
            ));
            if self.config.show_values {
                output.push_str(&format!(
                    " {:.prec$}{}",
                    value,
                    self.config.unit,
                    prec = self.config.precision
                ));
            }
            output.push('\n');
        }

        output
    }
}

// ============================================================================
// Line Plot
// ============================================================================

/// Configuration for line plot
#[derive(Debug, Clone)]
pub struct LinePlotConfig {
    /// Base chart config
    pub base: ChartConfig,
    /// Point character
    pub point_char: char,
}

impl Default for LinePlotConfig {
    fn default() -> Self {
        Self {
            base: ChartConfig::default(),
            point_char: '●',
        }
    }
}

/// Plot of `(x, y)` points on a character grid
#[derive(Debug, Clone)]
pub struct LinePlot {
    points: Vec<(f64, f64)>,
    config: LinePlotConfig,
}

impl LinePlot {
    /// Plot values against their position
    pub fn new(values: &[f64]) -> Self {
        let points: Vec<(f64, f64)> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect();
        Self::with_config(&points, LinePlotConfig::default())
    }

    pub fn with_config(points: &[(f64, f64)], config: LinePlotConfig) -> Self {
        Self {
            points: points.to_vec(),
            config,
        }
    }
}

fn span(values: impl Iterator<Item = f64> + Clone) -> (f64, f64) {
    let min = values.clone().fold(f64::INFINITY, f64::min);
    let max = values.fold(f64::NEG_INFINITY, f64::max);
    let range = if (max - min).abs() < f64::EPSILON {
        1.0
    } else {
        max - min
    };
    (min, range)
}

impl Chart for LinePlot {
    fn render(&self) -> String {
        if self.points.is_empty() {
            return String::from("No data to display");
        }

        let height = self.config.base.height.max(2);
        let width = self.config.base.width.max(2);
        let (x_min, x_range) = span(self.points.iter().map(|p| p.0));
        let (y_min, y_range) = span(self.points.iter().map(|p| p.1));

        let mut grid = vec![vec![' '; width]; height];
        for &(x, y) in &self.points {
            let col = ((x - x_min) / x_range * (width - 1) as f64).round() as usize;
            let row = ((y - y_min) / y_range * (height - 1) as f64).round() as usize;
            grid[row.min(height - 1)][col.min(width - 1)] = self.config.point_char;
        }

        let mut output = title_line(&self.config.base.title, width + 8);
        for row in (0..height).rev() {
            if self.config.base.show_labels {
                let y_val = y_min + (row as f64 / (height - 1) as f64) * y_range;
                output.push_str(&format!("{:>6.2} │", y_val));
            }
            output.extend(grid[row].iter());
            output.push('\n');
        }

        if self.config.base.show_labels {
            output.push_str("       └");
            output.extend(std::iter::repeat('─').take(width));
            output.push('\n');
            output.push_str(&format!(
                "        {:<w$.2}{:>8.2}\n",
                x_min,
                x_min + x_range,
                w = width.saturating_sub(8)
            ));
        }

        output
    }
}

// ============================================================================
// Box Plot
// ============================================================================

/// Horizontal box plots on a shared scale, one row per group
///
/// `├` and `┤` mark the whiskers, `[` `]` the quartiles, `|` the median and
/// `o` the outliers.
#[derive(Debug, Clone)]
pub struct BoxPlot {
    boxes: Vec<BoxSummary>,
    config: ChartConfig,
}

impl BoxPlot {
    pub fn new(boxes: &[BoxSummary], config: ChartConfig) -> Self {
        Self {
            boxes: boxes.to_vec(),
            config,
        }
    }

    fn row(&self, b: &BoxSummary, lo: f64, range: f64, width: usize) -> String {
        let col = |v: f64| (((v - lo) / range) * (width - 1) as f64).round() as usize;
        let mut cells = vec![' '; width];

        let (wl, q1, med, q3, wh) = (
            col(b.whisker_low),
            col(b.q1),
            col(b.median),
            col(b.q3),
            col(b.whisker_high),
        );
        for cell in cells.iter_mut().take(wh + 1).skip(wl) {
            *cell = '─';
        }
        for cell in cells.iter_mut().take(q3 + 1).skip(q1) {
            *cell = '=';
        }
        cells[wl] = '├';
        cells[wh] = '┤';
        cells[q1] = '[';
        cells[q3] = ']';
        cells[med] = '|';
        for &o in &b.outliers {
            cells[col(o).min(width - 1)] = 'o';
        }
        cells.into_iter().collect()
    }
}

impl Chart for BoxPlot {
    fn render(&self) -> String {
        if self.boxes.is_empty() {
            return String::from("No data to display");
        }

        let width = self.config.width.max(10);
        let values = self.boxes.iter().flat_map(|b| {
            b.outliers
                .iter()
                .cloned()
                .chain([b.whisker_low, b.whisker_high])
        });
        let (lo, range) = span(values);
        let label_width = self
            .boxes
            .iter()
            .map(|b| b.label.chars().count())
            .max()
            .unwrap_or(0);

        let mut output = title_line(&self.config.title, width + label_width + 2);
        for b in &self.boxes {
            output.push_str(&format!(
                "{:>lw$} │{}\n",
                b.label,
                self.row(b, lo, range, width),
                lw = label_width
            ));
        }
        if self.config.show_labels {
            output.push_str(&format!(
                "{:>lw$} └{}\n{:>lw$}  {:<w$.2}{:>8.2}\n",
                "",
                "─".repeat(width),
                "",
                lo,
                lo + range,
                lw = label_width,
                w = width.saturating_sub(8)
            ));
        }
        output
    }
}
