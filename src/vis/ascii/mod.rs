//! Text-based charts for terminal output
//!
//! Histograms, horizontal bar charts, line plots and box plots drawn with
//! ASCII or Unicode block characters.

mod charts;

pub use charts::{
    BarChart, BarChartConfig, BoxPlot, Histogram, HistogramConfig, LinePlot, LinePlotConfig,
};

/// Chart rendering trait
pub trait Chart {
    /// Render the chart to a string
    fn render(&self) -> String;
}

/// Common chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Chart width in characters
    pub width: usize,
    /// Chart height in characters
    pub height: usize,
    /// Show axis labels
    pub show_labels: bool,
    /// Title for the chart
    pub title: Option<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 12,
            show_labels: true,
            title: None,
        }
    }
}

impl ChartConfig {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }
}

/// Chart style options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartStyle {
    /// Simple ASCII characters
    Ascii,
    /// Unicode block characters
    #[default]
    Unicode,
}

impl ChartStyle {
    fn bar_char(&self) -> char {
        match self {
            ChartStyle::Ascii => '#',
            ChartStyle::Unicode => '█',
        }
    }
}

fn title_line(title: &Option<String>, width: usize) -> String {
    match title {
        Some(title) => format!("{:^width$}\n\n", title, width = width),
        None => String::new(),
    }
}
