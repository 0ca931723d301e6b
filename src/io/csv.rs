use csv::{ReaderBuilder, Writer};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::roster::{Roster, Student};

/// One input row; columns other than these three are ignored
#[derive(Debug, Deserialize)]
struct RosterRecord {
    #[serde(rename = "Student_ID")]
    student_id: u32,
    #[serde(rename = "CGPA")]
    cgpa: f64,
    #[serde(rename = "Branch")]
    branch: String,
}

/// Read a roster from a CSV file with a `Student_ID,CGPA,Branch` header
pub fn read_roster_csv<P: AsRef<Path>>(path: P) -> Result<Roster> {
    let file = File::open(path.as_ref())?;
    log::info!("reading roster from {}", path.as_ref().display());
    read_roster_from_reader(file)
}

/// Read a roster from any CSV source.
///
/// Fails on the first malformed row, reporting its 1-based data row number.
pub fn read_roster_from_reader<R: Read>(reader: R) -> Result<Roster> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for required in ["Student_ID", "CGPA", "Branch"] {
        if !headers.iter().any(|h| h == required) {
            return Err(Error::ColumnNotFound(required.to_string()));
        }
    }

    let mut students = Vec::new();
    for (i, result) in rdr.deserialize::<RosterRecord>().enumerate() {
        let record = result.map_err(|e| Error::MalformedRow {
            row: i + 1,
            message: e.to_string(),
        })?;
        students.push(Student::new(record.student_id, record.cgpa, record.branch));
    }

    log::info!("loaded {} student records", students.len());
    Roster::from_students(students)
}

/// Write the roster with its derived bands to a CSV file
pub fn write_roster_csv<P: AsRef<Path>>(roster: &Roster, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record([
        "Student_ID",
        "CGPA",
        "Branch",
        "CGPA_Category",
        "Performance_Level",
    ])?;

    for i in 0..roster.len() {
        let student = match roster.student(i) {
            Some(student) => student,
            None => break,
        };
        wtr.write_record([
            student.id.to_string(),
            format!("{:.2}", student.cgpa),
            student.branch,
            roster.grade_band().get(i).unwrap_or_default().to_string(),
            roster
                .performance_level()
                .get(i)
                .unwrap_or_default()
                .to_string(),
        ])?;
    }

    wtr.flush()?;
    log::info!("wrote {} rows to {}", roster.len(), path.as_ref().display());
    Ok(())
}
