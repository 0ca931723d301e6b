//! One end-to-end analysis run

use std::io::Write;
use std::path::PathBuf;

use crate::config::{AnalysisConfig, ReportFormat};
use crate::error::Result;
use crate::io::{read_roster_csv, write_roster_csv};
use crate::report::Report;
use crate::roster::Roster;
use crate::vis::{render_text_dashboard, DashboardData};

/// What a run produced
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Students analysed
    pub students: usize,
    /// Dashboard image, when one was written
    pub dashboard: Option<PathBuf>,
    /// Roster export, when one was written
    pub export: Option<PathBuf>,
}

/// The configured input file, or the bundled roster
pub fn load_roster(config: &AnalysisConfig) -> Result<Roster> {
    match &config.input {
        Some(path) => read_roster_csv(path),
        None => {
            log::info!("no input file given, using the bundled roster");
            Roster::bundled()
        }
    }
}

/// Load, analyse and report, writing the report to `out`
pub fn run<W: Write>(config: &AnalysisConfig, out: &mut W) -> Result<RunSummary> {
    config.validate()?;
    let roster = load_roster(config)?;

    let export = match &config.export {
        Some(path) => {
            write_roster_csv(&roster, path)?;
            Some(path.clone())
        }
        None => None,
    };

    let report = Report::compute(&roster, config)?;
    match config.report_format {
        ReportFormat::Text => report.render_text(out)?,
        ReportFormat::Json => report.render_json(out)?,
    }

    let data = if config.charts || config.text_charts {
        Some(DashboardData::from_roster(&roster, config.histogram_bins)?)
    } else {
        None
    };

    if let Some(data) = data.as_ref().filter(|_| config.text_charts) {
        if config.report_format == ReportFormat::Text {
            writeln!(out, "\n{}", render_text_dashboard(data))?;
        } else {
            log::warn!("text charts are not printed with a JSON report");
        }
    }

    let dashboard = match data.as_ref().filter(|_| config.charts) {
        Some(data) => render_image(data, config)?,
        None => None,
    };

    Ok(RunSummary {
        students: roster.len(),
        dashboard,
        export,
    })
}

#[cfg(feature = "visualization")]
fn render_image(data: &DashboardData, config: &AnalysisConfig) -> Result<Option<PathBuf>> {
    use crate::vis::{render_dashboard, PlotSettings};

    std::fs::create_dir_all(&config.output_dir)?;
    let path = config.dashboard_path();
    render_dashboard(data, &path, &PlotSettings::from_config(config))?;
    Ok(Some(path))
}

#[cfg(not(feature = "visualization"))]
fn render_image(_data: &DashboardData, _config: &AnalysisConfig) -> Result<Option<PathBuf>> {
    log::warn!("built without the visualization feature, skipping the dashboard image");
    Ok(None)
}
