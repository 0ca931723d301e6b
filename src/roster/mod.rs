//! The student roster table
//!
//! A `Roster` is built once from `Student` records and never changed
//! afterwards. It keeps the records column-wise and adds the two derived
//! categorical bands.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::groupby::GroupBy;
use crate::io::csv::read_roster_from_reader;
use crate::series::{cut, Categorical, Series};

/// Roster shipped with the binary: Student_ID, CGPA, Branch
const BUNDLED_ROSTER_CSV: &str = include_str!("../../data/roster.csv");

/// Lowest valid CGPA
pub const CGPA_MIN: f64 = 0.0;
/// Highest valid CGPA
pub const CGPA_MAX: f64 = 10.0;

/// Grade band edges and labels
pub const GRADE_BAND_EDGES: [f64; 6] = [0.0, 6.0, 7.0, 8.0, 9.0, 10.0];
pub const GRADE_BAND_LABELS: [&str; 5] = ["Below 6", "6.0-7.0", "7.0-8.0", "8.0-9.0", "9.0-10.0"];

/// Performance level edges and labels
pub const PERFORMANCE_EDGES: [f64; 5] = [0.0, 6.5, 7.5, 8.5, 10.0];
pub const PERFORMANCE_LABELS: [&str; 4] = ["Needs Improvement", "Good", "Very Good", "Excellent"];

/// One student record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    pub id: u32,
    pub cgpa: f64,
    pub branch: String,
}

impl Student {
    pub fn new(id: u32, cgpa: f64, branch: impl Into<String>) -> Self {
        Student {
            id,
            cgpa,
            branch: branch.into(),
        }
    }
}

/// A student together with its position in a ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedStudent {
    /// 1-based rank
    pub rank: usize,
    #[serde(flatten)]
    pub student: Student,
}

/// Column-wise student table with derived bands
#[derive(Debug, Clone)]
pub struct Roster {
    ids: Series<u32>,
    cgpa: Series<f64>,
    branches: Series<String>,
    grade_band: Categorical,
    performance_level: Categorical,
}

impl Roster {
    /// The bundled 152-student roster
    pub fn bundled() -> Result<Self> {
        read_roster_from_reader(BUNDLED_ROSTER_CSV.as_bytes())
    }

    /// Build a roster from records, validating CGPA bounds
    pub fn from_students(students: Vec<Student>) -> Result<Self> {
        if students.is_empty() {
            return Err(Error::EmptyData("the roster has no students".to_string()));
        }

        for student in &students {
            if !student.cgpa.is_finite() || !(CGPA_MIN..=CGPA_MAX).contains(&student.cgpa) {
                return Err(Error::InvalidValue(format!(
                    "student {} has CGPA {} outside [{}, {}]",
                    student.id, student.cgpa, CGPA_MIN, CGPA_MAX
                )));
            }
            if student.branch.trim().is_empty() {
                return Err(Error::InvalidValue(format!(
                    "student {} has an empty branch",
                    student.id
                )));
            }
        }

        let mut ids = Vec::with_capacity(students.len());
        let mut cgpa = Vec::with_capacity(students.len());
        let mut branches = Vec::with_capacity(students.len());
        for student in students {
            ids.push(student.id);
            cgpa.push(student.cgpa);
            branches.push(student.branch);
        }

        let grade_band = cut(&cgpa, &GRADE_BAND_EDGES, &GRADE_BAND_LABELS)?;
        let performance_level = cut(&cgpa, &PERFORMANCE_EDGES, &PERFORMANCE_LABELS)?;

        log::debug!(
            "derived grade bands and performance levels for {} students",
            cgpa.len()
        );

        Ok(Roster {
            ids: Series::new(ids, Some("Student_ID".to_string())),
            cgpa: Series::new(cgpa, Some("CGPA".to_string())),
            branches: Series::new(branches, Some("Branch".to_string())),
            grade_band,
            performance_level,
        })
    }

    /// Number of students
    pub fn len(&self) -> usize {
        self.cgpa.len()
    }

    /// Always false; an empty roster cannot be built
    pub fn is_empty(&self) -> bool {
        self.cgpa.is_empty()
    }

    pub fn ids(&self) -> &Series<u32> {
        &self.ids
    }

    pub fn cgpa(&self) -> &Series<f64> {
        &self.cgpa
    }

    pub fn branches(&self) -> &Series<String> {
        &self.branches
    }

    /// CGPA band: Below 6 up to 9.0-10.0
    pub fn grade_band(&self) -> &Categorical {
        &self.grade_band
    }

    /// Needs Improvement, Good, Very Good or Excellent
    pub fn performance_level(&self) -> &Categorical {
        &self.performance_level
    }

    /// Record at row `index`
    pub fn student(&self, index: usize) -> Option<Student> {
        Some(Student {
            id: *self.ids.get(index)?,
            cgpa: *self.cgpa.get(index)?,
            branch: self.branches.get(index)?.clone(),
        })
    }

    /// Distinct branch labels, sorted
    pub fn branch_names(&self) -> Vec<String> {
        let mut names = self.branches.values().to_vec();
        names.sort();
        names.dedup();
        names
    }

    /// CGPA grouped by branch
    pub fn group_by_branch(&self) -> Result<GroupBy<'_, String>> {
        GroupBy::new(self.branches.values(), &self.cgpa)
    }

    /// The `n` highest CGPAs; ties keep input order
    pub fn top_n(&self, n: usize) -> Vec<RankedStudent> {
        self.rank_by(self.cgpa.argsort_desc(), n)
    }

    /// The `n` lowest CGPAs; ties keep input order
    pub fn bottom_n(&self, n: usize) -> Vec<RankedStudent> {
        self.rank_by(self.cgpa.argsort_asc(), n)
    }

    /// Every student, highest CGPA first
    pub fn ranked(&self) -> Vec<RankedStudent> {
        self.top_n(self.len())
    }

    /// Students whose CGPA matches the predicate
    pub fn count_where<F>(&self, predicate: F) -> usize
    where
        F: Fn(f64) -> bool,
    {
        self.cgpa.count_where(predicate)
    }

    fn rank_by(&self, order: Vec<usize>, n: usize) -> Vec<RankedStudent> {
        order
            .into_iter()
            .take(n)
            .enumerate()
            .filter_map(|(i, row)| {
                self.student(row).map(|student| RankedStudent {
                    rank: i + 1,
                    student,
                })
            })
            .collect()
    }
}
