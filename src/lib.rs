//! CGPA roster analysis
//!
//! Loads a student roster (`Student_ID`, `CGPA`, `Branch`), derives grade
//! bands and performance levels, and reports descriptive statistics, branch
//! comparisons, rankings, normality and ANOVA tests, and a six-panel chart
//! dashboard.
//!
//! ```rust
//! use cgpa_insights::{AnalysisConfig, Report, Roster};
//!
//! let roster = Roster::bundled().unwrap();
//! let report = Report::compute(&roster, &AnalysisConfig::default()).unwrap();
//! assert_eq!(report.summary.count, 152);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod groupby;
pub mod io;
pub mod pivot;
pub mod report;
pub mod roster;
pub mod series;
pub mod stats;
pub mod vis;

// Re-export commonly used types
pub use analysis::{run, RunSummary};
pub use config::{AnalysisConfig, ChartFormat, ReportFormat};
pub use error::{Error, Result};
pub use groupby::{GroupBy, GroupStats};
pub use pivot::{crosstab, CrossTab, Normalize};
pub use report::Report;
pub use roster::{RankedStudent, Roster, Student};
pub use series::{cut, Categorical, Series};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
