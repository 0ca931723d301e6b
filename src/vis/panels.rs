//! Data behind the six dashboard panels
//!
//! Both the text panels and the image dashboard draw from a
//! [`DashboardData`], so they always show the same numbers.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::roster::Roster;
use crate::stats;

/// One histogram bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width bins spanning the data range
///
/// Every bin is closed on the left; the last one is also closed on the
/// right so the maximum is counted. Constant data is spread over a unit
/// range centred on the value.
pub fn histogram_bins(values: &[f64], bins: usize) -> Result<Vec<HistogramBin>> {
    if values.is_empty() {
        return Err(Error::EmptyData("histogram of no values".into()));
    }
    if bins == 0 {
        return Err(Error::InvalidInput("histogram needs at least one bin".into()));
    }

    let mut lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let mut hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: lo + i as f64 * width,
            upper: if i + 1 == bins {
                hi
            } else {
                lo + (i + 1) as f64 * width
            },
            count,
        })
        .collect())
}

/// Five-number summary of one group with 1.5 IQR whiskers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSummary {
    pub label: String,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest value not below `q1 - 1.5 * IQR`
    pub whisker_low: f64,
    /// Largest value not above `q3 + 1.5 * IQR`
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

impl BoxSummary {
    pub fn from_values(label: impl Into<String>, values: &[f64]) -> Result<Self> {
        let q1 = stats::quantile(values, 0.25)?;
        let median = stats::quantile(values, 0.5)?;
        let q3 = stats::quantile(values, 0.75)?;
        let iqr = q3 - q1;
        let low_fence = q1 - 1.5 * iqr;
        let high_fence = q3 + 1.5 * iqr;

        let inside = values
            .iter()
            .cloned()
            .filter(|v| (low_fence..=high_fence).contains(v));
        let whisker_low = inside.clone().fold(f64::INFINITY, f64::min).min(q1);
        let whisker_high = inside.fold(f64::NEG_INFINITY, f64::max).max(q3);

        let mut outliers: Vec<f64> = values
            .iter()
            .cloned()
            .filter(|v| *v < low_fence || *v > high_fence)
            .collect();
        outliers.sort_by(|a, b| a.total_cmp(b));

        Ok(BoxSummary {
            label: label.into(),
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            outliers,
        })
    }
}

/// One pie wedge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    pub percent: f64,
}

/// Everything the dashboard draws
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub histogram: Vec<HistogramBin>,
    pub mean: f64,
    pub median: f64,
    /// One box per branch, in branch order
    pub branch_boxes: Vec<BoxSummary>,
    /// Performance levels, most frequent first
    pub performance_slices: Vec<PieSlice>,
    /// `(rank, cgpa)`, rank 1 is the highest CGPA
    pub rank_curve: Vec<(f64, f64)>,
    pub branch_means: Vec<(String, f64)>,
    /// `(cgpa, cumulative fraction)` in ascending CGPA order
    pub ecdf: Vec<(f64, f64)>,
}

impl DashboardData {
    pub fn from_roster(roster: &Roster, bins: usize) -> Result<Self> {
        let cgpa = roster.cgpa().values();
        let grouped = roster.group_by_branch()?;

        let branch_boxes = grouped
            .groups()
            .iter()
            .map(|(branch, values)| BoxSummary::from_values(branch.clone(), values))
            .collect::<Result<Vec<_>>>()?;

        let total = roster.len() as f64;
        let performance_slices = roster
            .performance_level()
            .value_counts_by_frequency()
            .into_iter()
            .map(|(label, count)| PieSlice {
                label,
                count,
                percent: count as f64 / total * 100.0,
            })
            .collect();

        let rank_curve = roster
            .ranked()
            .iter()
            .map(|r| (r.rank as f64, r.student.cgpa))
            .collect();

        let mut sorted = cgpa.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let ecdf = sorted
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, (i + 1) as f64 / total))
            .collect();

        Ok(DashboardData {
            histogram: histogram_bins(cgpa, bins)?,
            mean: roster.cgpa().mean()?,
            median: roster.cgpa().median()?,
            branch_boxes,
            performance_slices,
            rank_curve,
            branch_means: grouped.mean(),
            ecdf,
        })
    }
}
