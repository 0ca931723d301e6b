mod common;

use cgpa_insights::{run, AnalysisConfig, ChartFormat, ReportFormat};
use common::{create_roster_csv, TempTestDir};

fn small_roster() -> Vec<(u32, f64, &'static str)> {
    vec![
        (101, 9.10, "CS"),
        (102, 6.40, "CS"),
        (103, 7.80, "CS"),
        (104, 8.20, "EC"),
        (105, 7.10, "EC"),
        (106, 5.90, "EC"),
        (107, 8.60, "ME"),
        (108, 7.40, "ME"),
        (109, 6.90, "ME"),
    ]
}

#[test]
fn test_run_on_input_file() {
    let file = create_roster_csv("run_input", &small_roster());
    let config = AnalysisConfig {
        input: Some(file.path().to_path_buf()),
        charts: false,
        top_n: 3,
        ..AnalysisConfig::default()
    };
    let mut out = Vec::new();
    let summary = run(&config, &mut out).unwrap();
    assert_eq!(summary.students, 9);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Total Students: 9"));
    assert!(text.contains("Top 3 Students by CGPA:"));
    assert!(text.contains("Rank 1: Student 101 - CGPA: 9.100 (CS)"));
    assert!(text.contains("Student 106 - CGPA: 5.900 (EC)"));
}

#[test]
fn test_config_file_drives_run() {
    let dir = TempTestDir::new("config_run").unwrap();
    let export = dir.path().join("export.csv");
    let config_path = dir.path().join("analysis.toml");
    std::fs::write(
        &config_path,
        format!(
            "charts = false\nreport_format = \"json\"\nexport = \"{}\"\ntop_n = 5\n",
            export.display()
        ),
    )
    .unwrap();

    let config = AnalysisConfig::from_file(&config_path).unwrap();
    assert_eq!(config.report_format, ReportFormat::Json);

    let mut out = Vec::new();
    let summary = run(&config, &mut out).unwrap();
    assert_eq!(summary.export.as_deref(), Some(export.as_path()));
    assert!(export.exists());

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["top"].as_array().map(|a| a.len()), Some(5));
}

#[cfg(feature = "visualization")]
#[test]
fn test_dashboard_written() {
    let dir = TempTestDir::new("dashboard").unwrap();
    for format in [ChartFormat::Svg, ChartFormat::Png] {
        let config = AnalysisConfig {
            output_dir: dir.path().join("charts"),
            output_format: format,
            width: 900,
            height: 600,
            ..AnalysisConfig::default()
        };
        let summary = run(&config, &mut Vec::new()).unwrap();
        let path = summary.dashboard.expect("dashboard path");
        assert_eq!(path, config.dashboard_path());
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}

#[test]
fn test_invalid_config_rejected() {
    let config = AnalysisConfig {
        alpha: 0.0,
        ..AnalysisConfig::default()
    };
    assert!(run(&config, &mut Vec::new()).is_err());
}
