//! Statistics module
//!
//! Descriptive statistics, shape measures and the hypothesis tests used by
//! the CGPA report. The public functions validate their input and delegate
//! to the `descriptive`, `inference` and `distribution` submodules.

pub mod descriptive;
pub mod distribution;
pub mod inference;

use crate::error::{Error, Result};
use serde::Serialize;

/// Compute basic descriptive statistics
///
/// # Example
/// ```rust
/// use cgpa_insights::stats;
///
/// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let stats = stats::describe(&data).unwrap();
/// assert_eq!(stats.median, 3.0);
/// ```
pub fn describe<T: AsRef<[f64]>>(data: T) -> Result<DescriptiveStats> {
    descriptive::describe_impl(data.as_ref())
}

/// Result of [`describe`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveStats {
    /// Number of values
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (ddof = 1)
    pub std: f64,
    /// Minimum
    pub min: f64,
    /// 25% quantile
    pub q1: f64,
    /// 50% quantile
    pub median: f64,
    /// 75% quantile
    pub q3: f64,
    /// Maximum
    pub max: f64,
}

impl DescriptiveStats {
    /// Interquartile range, Q3 - Q1
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Max - min
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Sample variance (ddof = 1)
pub fn variance<T: AsRef<[f64]>>(data: T) -> Result<f64> {
    descriptive::variance_impl(data.as_ref())
}

/// Linear-interpolation quantile
///
/// `q` must lie in `[0, 1]`. `quantile(data, 0.0)` is the minimum and
/// `quantile(data, 1.0)` the maximum.
///
/// # Example
/// ```rust
/// use cgpa_insights::stats;
///
/// let q = stats::quantile(&[1.0, 2.0, 3.0, 4.0], 0.25).unwrap();
/// assert!((q - 1.75).abs() < 1e-12);
/// ```
pub fn quantile<T: AsRef<[f64]>>(data: T, q: f64) -> Result<f64> {
    let data = data.as_ref();
    if !(0.0..=1.0).contains(&q) {
        return Err(Error::InvalidInput(format!(
            "quantile must be between 0 and 1, got {}",
            q
        )));
    }
    if data.is_empty() {
        return Err(Error::EmptyData(
            "quantile of an empty sequence is undefined".into(),
        ));
    }
    Ok(descriptive::quantile_sorted(&descriptive::sorted(data), q))
}

/// Several percentiles at once, `percents` given on the 0-100 scale
pub fn percentiles<T: AsRef<[f64]>>(data: T, percents: &[f64]) -> Result<Vec<(f64, f64)>> {
    let data = data.as_ref();
    if data.is_empty() {
        return Err(Error::EmptyData(
            "percentiles of an empty sequence are undefined".into(),
        ));
    }
    let sorted = descriptive::sorted(data);
    percents
        .iter()
        .map(|&p| {
            if !(0.0..=100.0).contains(&p) {
                return Err(Error::InvalidInput(format!(
                    "percentile must be between 0 and 100, got {}",
                    p
                )));
            }
            Ok((p, descriptive::quantile_sorted(&sorted, p / 100.0)))
        })
        .collect()
}

/// Sample skewness from population moments (biased estimator)
pub fn skewness<T: AsRef<[f64]>>(data: T) -> Result<f64> {
    descriptive::skewness_impl(data.as_ref())
}

/// Fisher's excess kurtosis from population moments (biased estimator)
pub fn kurtosis<T: AsRef<[f64]>>(data: T) -> Result<f64> {
    descriptive::kurtosis_impl(data.as_ref())
}

/// Result of the Shapiro-Wilk normality test
#[derive(Debug, Clone, Serialize)]
pub struct ShapiroWilkResult {
    /// W statistic
    pub statistic: f64,
    /// p-value
    pub p_value: f64,
    /// Normality is not rejected at the given significance level
    pub normal: bool,
}

/// Shapiro-Wilk test for normality
///
/// Uses Royston's (1995) approximation of the coefficients and of the null
/// distribution of W. Valid for 3 to 5000 observations.
///
/// # Example
/// ```rust
/// use cgpa_insights::stats;
///
/// let result = stats::shapiro_wilk(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.05).unwrap();
/// assert!((result.statistic - 0.98676).abs() < 1e-4);
/// assert!(result.normal);
/// ```
pub fn shapiro_wilk<T: AsRef<[f64]>>(data: T, alpha: f64) -> Result<ShapiroWilkResult> {
    inference::shapiro_wilk_impl(data.as_ref(), alpha)
}

/// Result of a one-way analysis of variance
#[derive(Debug, Clone, Serialize)]
pub struct AnovaResult {
    /// F statistic
    pub f_statistic: f64,
    /// p-value
    pub p_value: f64,
    /// Between-group sum of squares
    pub ss_between: f64,
    /// Within-group sum of squares
    pub ss_within: f64,
    /// Total sum of squares
    pub ss_total: f64,
    /// Between-group degrees of freedom
    pub df_between: usize,
    /// Within-group degrees of freedom
    pub df_within: usize,
    /// Total degrees of freedom
    pub df_total: usize,
    /// Between-group mean square
    pub ms_between: f64,
    /// Within-group mean square
    pub ms_within: f64,
    /// Significant at the given level
    pub significant: bool,
}

/// One-way ANOVA across groups
///
/// Tests whether the group means are equal. Groups are passed as
/// `(name, values)` pairs.
///
/// # Example
/// ```rust
/// use cgpa_insights::stats;
///
/// let a = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let b = [2.0, 3.0, 4.0, 5.0, 6.0];
/// let c = [3.0, 4.0, 5.0, 6.0, 7.0];
/// let result = stats::anova(&[("A", &a[..]), ("B", &b[..]), ("C", &c[..])], 0.05).unwrap();
/// assert!((result.f_statistic - 2.0).abs() < 1e-10);
/// ```
pub fn anova(groups: &[(&str, &[f64])], alpha: f64) -> Result<AnovaResult> {
    if groups.len() < 2 {
        return Err(Error::InsufficientData(
            "analysis of variance needs at least two groups".into(),
        ));
    }

    inference::anova_impl(groups, alpha)
}
