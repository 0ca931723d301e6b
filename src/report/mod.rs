//! The CGPA analysis report
//!
//! [`Report::compute`] runs every statistic once and keeps the results;
//! rendering (text or JSON) never recomputes anything.

mod insights;
mod render;

use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::groupby::GroupStats;
use crate::pivot::{crosstab, CrossTab, Normalize};
use crate::roster::{RankedStudent, Roster};
use crate::series::Categorical;
use crate::stats::{self, AnovaResult, DescriptiveStats, ShapiroWilkResult};

pub use self::insights::{Insight, InsightKind, RECOMMENDATIONS};

/// Count and share of one category or threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Share {
    pub label: String,
    pub count: usize,
    /// Percentage of all students
    pub percent: f64,
}

impl Share {
    fn new(label: impl Into<String>, count: usize, total: usize) -> Self {
        Share {
            label: label.into(),
            count,
            percent: count as f64 / total as f64 * 100.0,
        }
    }
}

/// Branch comparison: group statistics and the performance crosstab
#[derive(Debug, Clone, Serialize)]
pub struct BranchAnalysis {
    pub stats: Vec<GroupStats<String>>,
    pub performance: CrossTab,
    /// Row-normalized crosstab, each branch sums to 100
    pub performance_percent: Vec<Vec<f64>>,
}

/// Normality and group-difference tests
#[derive(Debug, Clone, Serialize)]
pub struct StatisticalTests {
    pub shapiro_wilk: ShapiroWilkResult,
    pub skewness: f64,
    pub kurtosis: f64,
    pub anova: AnovaResult,
}

/// Everything the report prints
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub alpha: f64,
    pub summary: DescriptiveStats,
    pub grade_bands: Vec<Share>,
    /// Performance levels in descending frequency
    pub performance_levels: Vec<Share>,
    pub branches: BranchAnalysis,
    pub top: Vec<RankedStudent>,
    pub bottom: Vec<RankedStudent>,
    pub thresholds: Vec<Share>,
    pub tests: StatisticalTests,
    pub insights: Vec<Insight>,
    pub recommendations: Vec<String>,
    /// (percent, value) pairs
    pub percentiles: Vec<(f64, f64)>,
}

fn shares(counts: Vec<(String, usize)>, total: usize) -> Vec<Share> {
    counts
        .into_iter()
        .map(|(label, count)| Share::new(label, count, total))
        .collect()
}

fn distribution(categorical: &Categorical, total: usize, by_frequency: bool) -> Vec<Share> {
    let counts = if by_frequency {
        categorical.value_counts_by_frequency()
    } else {
        categorical.value_counts()
    };
    shares(counts, total)
}

impl Report {
    /// Compute the full report for a roster
    pub fn compute(roster: &Roster, config: &AnalysisConfig) -> Result<Self> {
        let total = roster.len();
        let cgpa = roster.cgpa().values();

        let summary = stats::describe(cgpa)?;
        log::info!(
            "summary over {} students: mean {:.3}, std {:.3}",
            summary.count,
            summary.mean,
            summary.std
        );

        let grouped = roster.group_by_branch()?;
        let performance = crosstab(roster.branches().values(), roster.performance_level())?;
        let performance_percent = performance.normalize(Normalize::Index);
        let branches = BranchAnalysis {
            stats: grouped.agg()?,
            performance,
            performance_percent,
        };

        let thresholds = vec![
            Share::new("CGPA ≥ 8.0", roster.count_where(|v| v >= 8.0), total),
            Share::new("CGPA ≥ 7.0", roster.count_where(|v| v >= 7.0), total),
            Share::new("CGPA < 7.0", roster.count_where(|v| v < 7.0), total),
        ];

        let group_values = grouped.groups();
        let anova_input: Vec<(&str, &[f64])> = group_values
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
            .collect();

        let tests = StatisticalTests {
            shapiro_wilk: stats::shapiro_wilk(cgpa, config.alpha)?,
            skewness: stats::skewness(cgpa)?,
            kurtosis: stats::kurtosis(cgpa)?,
            anova: stats::anova(&anova_input, config.alpha)?,
        };

        let insights = insights::derive(roster, &summary, &grouped.mean());

        Ok(Report {
            alpha: config.alpha,
            grade_bands: distribution(roster.grade_band(), total, false),
            performance_levels: distribution(roster.performance_level(), total, true),
            branches,
            top: roster.top_n(config.top_n),
            bottom: roster.bottom_n(config.top_n),
            thresholds,
            tests,
            insights,
            recommendations: RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
            percentiles: stats::percentiles(cgpa, &config.percentiles)?,
            summary,
        })
    }

    /// The report as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
