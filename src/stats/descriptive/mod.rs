// Descriptive statistics

use crate::error::{Error, Result};
use crate::stats::DescriptiveStats;
use std::cmp::Ordering;

/// Internal implementation of `describe`
pub(crate) fn describe_impl(data: &[f64]) -> Result<DescriptiveStats> {
    if data.is_empty() {
        return Err(Error::EmptyData(
            "descriptive statistics need at least one value".into(),
        ));
    }

    let count = data.len();
    let mean = mean(data);

    // Sample standard deviation, undefined for a single value
    let std = if count > 1 {
        variance_impl(data)?.sqrt()
    } else {
        f64::NAN
    };

    let sorted = sorted(data);

    Ok(DescriptiveStats {
        count,
        mean,
        std,
        min: sorted[0],
        q1: quantile_sorted(&sorted, 0.25),
        median: quantile_sorted(&sorted, 0.5),
        q3: quantile_sorted(&sorted, 0.75),
        max: sorted[count - 1],
    })
}

/// Copy of the data in ascending order
pub(crate) fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

pub(crate) fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Quantile of already-sorted, non-empty data by linear interpolation
/// between the two closest ranks
pub(crate) fn quantile_sorted(sorted_data: &[f64], q: f64) -> f64 {
    let n = sorted_data.len();
    let idx = q * (n - 1) as f64;
    let idx_floor = idx.floor() as usize;
    let idx_ceil = idx.ceil() as usize;

    if idx_floor == idx_ceil {
        return sorted_data[idx_floor];
    }

    let weight_ceil = idx - idx_floor as f64;
    sorted_data[idx_floor] + (sorted_data[idx_ceil] - sorted_data[idx_floor]) * weight_ceil
}

/// Sample variance with ddof = 1
pub(crate) fn variance_impl(data: &[f64]) -> Result<f64> {
    if data.len() < 2 {
        return Err(Error::InsufficientData(
            "sample variance needs at least two values".into(),
        ));
    }

    let mean = mean(data);
    let sum_squared_diff = data.iter().map(|&x| (x - mean).powi(2)).sum::<f64>();
    Ok(sum_squared_diff / (data.len() - 1) as f64)
}

/// Central moments m2 and the requested higher moment `m_k`
fn central_moments(data: &[f64], k: i32) -> (f64, f64) {
    let n = data.len() as f64;
    let mean = mean(data);
    let m2 = data.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / n;
    let mk = data.iter().map(|&x| (x - mean).powi(k)).sum::<f64>() / n;
    (m2, mk)
}

pub(crate) fn skewness_impl(data: &[f64]) -> Result<f64> {
    if data.len() < 3 {
        return Err(Error::InsufficientData(
            "skewness needs at least three values".into(),
        ));
    }

    let (m2, m3) = central_moments(data, 3);
    if m2 <= f64::EPSILON {
        return Err(Error::ComputationError("skewness: variance is zero".into()));
    }

    Ok(m3 / m2.powf(1.5))
}

pub(crate) fn kurtosis_impl(data: &[f64]) -> Result<f64> {
    if data.len() < 2 {
        return Err(Error::InsufficientData(
            "kurtosis needs at least two values".into(),
        ));
    }

    let (m2, m4) = central_moments(data, 4);
    if m2 <= f64::EPSILON {
        return Err(Error::ComputationError("kurtosis: variance is zero".into()));
    }

    // Excess kurtosis
    Ok(m4 / (m2 * m2) - 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_basic() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let stats = describe_impl(&data).unwrap();

        assert_eq!(stats.count, 5);
        assert!((stats.mean - 3.0).abs() < 1e-10);
        assert!((stats.std - 1.5811388300841898).abs() < 1e-10);
        assert!((stats.min - 1.0).abs() < 1e-10);
        assert!((stats.max - 5.0).abs() < 1e-10);
        assert!((stats.median - 3.0).abs() < 1e-10);
        assert!((stats.q1 - 2.0).abs() < 1e-10);
        assert!((stats.q3 - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_describe_single_value() {
        let stats = describe_impl(&[7.5]).unwrap();
        assert!(stats.std.is_nan());
        assert_eq!(stats.q1, 7.5);
        assert_eq!(stats.q3, 7.5);
    }

    #[test]
    fn test_describe_empty() {
        let data: Vec<f64> = vec![];
        assert!(describe_impl(&data).is_err());
    }

    #[test]
    fn test_quantile_interpolates() {
        let sorted = vec![1.0, 2.0, 3.0, 4.0];
        assert!((quantile_sorted(&sorted, 0.5) - 2.5).abs() < 1e-12);
        assert!((quantile_sorted(&sorted, 0.75) - 3.25).abs() < 1e-12);
        assert_eq!(quantile_sorted(&sorted, 0.0), 1.0);
        assert_eq!(quantile_sorted(&sorted, 1.0), 4.0);
    }

    #[test]
    fn test_skewness_sign() {
        assert!(skewness_impl(&[1.0, 2.0, 3.0]).unwrap().abs() < 1e-12);
        assert!(skewness_impl(&[1.0, 1.0, 1.0, 10.0]).unwrap() > 0.0);
        assert!(skewness_impl(&[1.0, 10.0, 10.0, 10.0]).unwrap() < 0.0);
        assert!(skewness_impl(&[2.0, 2.0, 2.0]).is_err());
    }

    #[test]
    fn test_kurtosis_uniform_is_light_tailed() {
        // Discrete uniform 1..=5: m2 = 2, m4 = 6.8, excess = 6.8/4 - 3
        let k = kurtosis_impl(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!((k - (-1.3)).abs() < 1e-12);
    }

    #[test]
    fn test_kurtosis_three_values() {
        // Any three distinct points give m4 / m2^2 = 1.5
        let k = kurtosis_impl(&[9.44, 8.00, 5.42]).unwrap();
        assert!((k - (-1.5)).abs() < 1e-12);
        assert!(kurtosis_impl(&[4.0]).is_err());
        assert!(kurtosis_impl(&[3.0, 3.0, 3.0]).is_err());
    }
}
