//! Run configuration
//!
//! Every field has a default, so an empty TOML file (or no file at all)
//! reproduces the standard report for the bundled roster.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Image format of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartFormat {
    Svg,
    Png,
}

impl ChartFormat {
    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ChartFormat::Svg => "svg",
            ChartFormat::Png => "png",
        }
    }
}

/// How the report is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Sectioned console text
    Text,
    /// The computed report as JSON
    Json,
}

/// Settings for one analysis run
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Roster CSV; the bundled roster when absent
    pub input: Option<PathBuf>,
    /// Directory for the dashboard image and the export
    pub output_dir: PathBuf,
    /// Dashboard image format
    pub output_format: ChartFormat,
    /// Console report format
    pub report_format: ReportFormat,
    /// Render the image dashboard
    pub charts: bool,
    /// Print the text chart panels after the report
    pub text_charts: bool,
    /// Write the roster with derived bands to this CSV file
    pub export: Option<PathBuf>,
    /// Length of the top and bottom lists
    pub top_n: usize,
    /// Histogram bin count
    pub histogram_bins: usize,
    /// Significance level for the tests
    pub alpha: f64,
    /// Percentiles for the percentile table, 0-100
    pub percentiles: Vec<f64>,
    /// Dashboard width in pixels
    pub width: u32,
    /// Dashboard height in pixels
    pub height: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            input: None,
            output_dir: PathBuf::from("."),
            output_format: ChartFormat::Svg,
            report_format: ReportFormat::Text,
            charts: true,
            text_charts: false,
            export: None,
            top_n: 10,
            histogram_bins: 20,
            alpha: 0.05,
            percentiles: vec![10.0, 25.0, 50.0, 75.0, 90.0, 95.0, 99.0],
            width: 1800,
            height: 1200,
        }
    }
}

impl AnalysisConfig {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AnalysisConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loaded config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(Error::Config(format!(
                "alpha must be in (0, 1), got {}",
                self.alpha
            )));
        }
        if self.top_n == 0 {
            return Err(Error::Config("top_n must be at least 1".to_string()));
        }
        if self.histogram_bins == 0 {
            return Err(Error::Config(
                "histogram_bins must be at least 1".to_string(),
            ));
        }
        if let Some(p) = self
            .percentiles
            .iter()
            .find(|p| !(0.0..=100.0).contains(*p))
        {
            return Err(Error::Config(format!(
                "percentiles must be between 0 and 100, got {}",
                p
            )));
        }
        if self.width < 300 || self.height < 200 {
            return Err(Error::Config(format!(
                "dashboard size {}x{} is too small",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Full path of the dashboard image
    pub fn dashboard_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("cgpa_dashboard.{}", self.output_format.extension()))
    }
}
