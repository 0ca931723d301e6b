//! Test utilities for temporary file handling
//!
//! Provides consistent temporary file and directory management with automatic cleanup
//! and support for environment variables (TMPDIR, TEMP, TMP).

use std::env;
use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static TEST_FILE_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Get the temporary directory, respecting environment variables
fn get_temp_dir() -> PathBuf {
    env::var("TMPDIR")
        .or_else(|_| env::var("TEMP"))
        .or_else(|_| env::var("TMP"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir())
}

fn unique_name(kind: &str, test_name: &str) -> String {
    let counter = TEST_FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
    format!(
        "cgpa_{}_{}_{}_{}",
        kind,
        test_name,
        std::process::id(),
        counter
    )
}

/// Generate a unique test file path
pub fn test_temp_path(test_name: &str, extension: &str) -> PathBuf {
    get_temp_dir().join(format!("{}.{}", unique_name("test", test_name), extension))
}

/// Temporary test file, deleted on drop
pub struct TempTestFile {
    path: PathBuf,
}

impl TempTestFile {
    pub fn new(test_name: &str, extension: &str) -> Self {
        TempTestFile {
            path: test_temp_path(test_name, extension),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempTestFile {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// Temporary test directory, removed with its contents on drop
pub struct TempTestDir {
    path: PathBuf,
}

impl TempTestDir {
    pub fn new(test_name: &str) -> std::io::Result<Self> {
        let path = get_temp_dir().join(unique_name("dir", test_name));
        fs::create_dir_all(&path)?;
        Ok(TempTestDir { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempTestDir {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = fs::remove_dir_all(&self.path);
        }
    }
}

/// Helper to create a test CSV file with given data
pub fn create_test_csv(test_name: &str, headers: &[&str], rows: &[Vec<String>]) -> TempTestFile {
    let temp_file = TempTestFile::new(test_name, "csv");
    let mut file = File::create(temp_file.path()).expect("Failed to create test CSV");

    writeln!(file, "{}", headers.join(",")).expect("Failed to write headers");
    for row in rows {
        writeln!(file, "{}", row.join(",")).expect("Failed to write row");
    }

    temp_file
}

/// A `Student_ID,CGPA,Branch` roster file
pub fn create_roster_csv(test_name: &str, rows: &[(u32, f64, &str)]) -> TempTestFile {
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|(id, cgpa, branch)| vec![id.to_string(), format!("{:.2}", cgpa), branch.to_string()])
        .collect();
    create_test_csv(test_name, &["Student_ID", "CGPA", "Branch"], &rows)
}
