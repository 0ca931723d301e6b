mod common;

use cgpa_insights::io::{read_roster_csv, write_roster_csv};
use cgpa_insights::{Error, Roster};
use common::{create_roster_csv, create_test_csv, TempTestFile};

#[test]
fn test_read_roster_file() {
    let file = create_roster_csv(
        "read_roster",
        &[(1, 9.44, "CS"), (2, 6.25, "EC"), (3, 7.5, "ME"), (4, 5.99, "CS")],
    );
    let roster = read_roster_csv(file.path()).unwrap();

    assert_eq!(roster.len(), 4);
    assert_eq!(roster.branch_names(), vec!["CS", "EC", "ME"]);
    assert_eq!(roster.grade_band().get(3), Some("Below 6"));
    assert_eq!(roster.performance_level().get(1), Some("Needs Improvement"));
    assert_eq!(roster.performance_level().get(2), Some("Very Good"));
}

#[test]
fn test_export_carries_derived_bands() {
    let roster = Roster::bundled().unwrap();
    let out = TempTestFile::new("export", "csv");
    write_roster_csv(&roster, out.path()).unwrap();

    let content = std::fs::read_to_string(out.path()).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("Student_ID,CGPA,Branch,CGPA_Category,Performance_Level")
    );
    assert_eq!(lines.count(), 152);

    // The export reads back as the same roster
    let again = read_roster_csv(out.path()).unwrap();
    assert_eq!(again.cgpa().values(), roster.cgpa().values());
    assert_eq!(again.ids().values(), roster.ids().values());
}

#[test]
fn test_out_of_range_cgpa_rejected() {
    let file = create_roster_csv("out_of_range", &[(1, 9.0, "CS"), (2, 11.0, "EC")]);
    assert!(matches!(
        read_roster_csv(file.path()),
        Err(Error::InvalidValue(_))
    ));
}

#[test]
fn test_non_numeric_cgpa_rejected() {
    let rows = vec![
        vec!["1".to_string(), "8.1".to_string(), "CS".to_string()],
        vec!["2".to_string(), "n/a".to_string(), "EC".to_string()],
    ];
    let file = create_test_csv("non_numeric", &["Student_ID", "CGPA", "Branch"], &rows);
    match read_roster_csv(file.path()) {
        Err(Error::MalformedRow { row, .. }) => assert_eq!(row, 2),
        other => panic!("expected a malformed row, got {:?}", other),
    }
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        read_roster_csv("/nonexistent/roster.csv"),
        Err(Error::Io(_))
    ));
}

#[test]
fn test_boundary_cgpa_bands() {
    let file = create_roster_csv(
        "boundary_bands",
        &[(1, 6.0, "CS"), (2, 7.0, "EC"), (3, 8.0, "ME"), (4, 9.0, "CS"), (5, 10.0, "EC")],
    );
    let roster = read_roster_csv(file.path()).unwrap();
    let bands: Vec<&str> = (0..roster.len())
        .filter_map(|i| roster.grade_band().get(i))
        .collect();
    assert_eq!(
        bands,
        vec!["6.0-7.0", "7.0-8.0", "8.0-9.0", "9.0-10.0", "9.0-10.0"]
    );
}
