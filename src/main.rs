use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use cgpa_insights::{AnalysisConfig, ChartFormat, ReportFormat};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ImageFormat {
    /// Scalable vector graphics
    Svg,
    /// Bitmap image
    Png,
}

impl From<ImageFormat> for ChartFormat {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Svg => ChartFormat::Svg,
            ImageFormat::Png => ChartFormat::Png,
        }
    }
}

#[derive(Parser)]
#[command(name = "cgpa-insights", author, version, about)]
struct Cli {
    /// Roster CSV with Student_ID, CGPA and Branch columns
    #[arg(long, short = 'i', env = "CGPA_INPUT")]
    input: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Directory for the dashboard image
    #[arg(long, short = 'o')]
    output_dir: Option<PathBuf>,

    /// Dashboard image format
    #[arg(long, value_enum)]
    format: Option<ImageFormat>,

    /// Skip the dashboard image
    #[arg(long)]
    no_charts: bool,

    /// Print the chart panels as text after the report
    #[arg(long)]
    text_charts: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Write the roster with its derived bands to this CSV file
    #[arg(long)]
    export: Option<PathBuf>,

    /// Length of the top and bottom lists
    #[arg(long)]
    top: Option<usize>,
}

impl Cli {
    /// Command-line flags override the config file
    fn into_config(self) -> Result<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::from_file(path)
                .with_context(|| format!("failed to load config '{}'", path.display()))?,
            None => AnalysisConfig::default(),
        };

        if let Some(input) = self.input {
            config.input = Some(input);
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(format) = self.format {
            config.output_format = format.into();
        }
        if self.no_charts {
            config.charts = false;
        }
        if self.text_charts {
            config.text_charts = true;
        }
        if self.json {
            config.report_format = ReportFormat::Json;
        }
        if let Some(export) = self.export {
            config.export = Some(export);
        }
        if let Some(top) = self.top {
            config.top_n = top;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Cli::parse().into_config()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let summary = cgpa_insights::run(&config, &mut out).context("analysis failed")?;
    if let Some(path) = &summary.dashboard {
        log::info!("dashboard saved to {}", path.display());
    }
    if let Some(path) = &summary.export {
        log::info!("roster exported to {}", path.display());
    }
    Ok(())
}
