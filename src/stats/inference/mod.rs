// Hypothesis tests

use crate::error::{Error, Result};
use crate::stats::descriptive;
use crate::stats::distribution::{f_survival, normal_ppf, normal_sf};
use crate::stats::{AnovaResult, ShapiroWilkResult};
use std::f64::consts::PI;

const SW_MIN_N: usize = 3;
const SW_MAX_N: usize = 5000;

/// Evaluate c[0] + c[1] x + c[2] x^2 + ...
fn poly(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Shapiro-Wilk coefficients for the lower half of a sample of size `n`
fn shapiro_wilk_coefficients(n: usize) -> Vec<f64> {
    const C1: [f64; 6] = [0.0, 0.221157, -0.147981, -2.071190, 4.434685, -2.706056];
    const C2: [f64; 6] = [0.0, 0.042981, -0.293762, -1.752461, 5.682633, -3.582633];

    let half = n / 2;
    if n == 3 {
        return vec![std::f64::consts::FRAC_1_SQRT_2];
    }

    let an = n as f64;
    let m: Vec<f64> = (1..=half)
        .map(|i| normal_ppf((i as f64 - 0.375) / (an + 0.25)))
        .collect();
    let summ2 = 2.0 * m.iter().map(|v| v * v).sum::<f64>();
    let ssumm2 = summ2.sqrt();
    let rsn = 1.0 / an.sqrt();

    let mut a = vec![0.0; half];
    let a1 = poly(&C1, rsn) - m[0] / ssumm2;
    a[0] = a1;

    let (first, fac) = if n > 5 {
        let a2 = -m[1] / ssumm2 + poly(&C2, rsn);
        a[1] = a2;
        let fac = ((summ2 - 2.0 * m[0] * m[0] - 2.0 * m[1] * m[1])
            / (1.0 - 2.0 * a1 * a1 - 2.0 * a2 * a2))
            .sqrt();
        (2, fac)
    } else {
        let fac = ((summ2 - 2.0 * m[0] * m[0]) / (1.0 - 2.0 * a1 * a1)).sqrt();
        (1, fac)
    };

    for i in first..half {
        a[i] = -m[i] / fac;
    }
    a
}

/// Royston's normalizing transform of W into a p-value
fn shapiro_wilk_p_value(w: f64, n: usize) -> f64 {
    if n == 3 {
        // Exact distribution for n = 3
        let p = 6.0 / PI * (w.sqrt().asin() - PI / 3.0);
        return p.clamp(0.0, 1.0);
    }

    let an = n as f64;
    let mut y = (1.0 - w).ln();
    let (mean, sd) = if n <= 11 {
        let gamma = poly(&[-2.273, 0.459], an);
        if y >= gamma {
            return 1e-99;
        }
        y = -(gamma - y).ln();
        (
            poly(&[0.544, -0.39978, 0.025054, -6.714e-4], an),
            poly(&[1.3822, -0.77857, 0.062767, -0.0020322], an).exp(),
        )
    } else {
        let ln_n = an.ln();
        (
            poly(&[-1.5861, -0.31082, -0.083751, 0.0038915], ln_n),
            poly(&[-0.4803, -0.082676, 0.0030302], ln_n).exp(),
        )
    };

    normal_sf((y - mean) / sd)
}

/// Internal implementation of the Shapiro-Wilk test
pub(crate) fn shapiro_wilk_impl(data: &[f64], alpha: f64) -> Result<ShapiroWilkResult> {
    let n = data.len();
    if n < SW_MIN_N {
        return Err(Error::InsufficientData(format!(
            "Shapiro-Wilk needs at least {} values, got {}",
            SW_MIN_N, n
        )));
    }
    if n > SW_MAX_N {
        return Err(Error::InvalidInput(format!(
            "Shapiro-Wilk p-values are not reliable above {} values, got {}",
            SW_MAX_N, n
        )));
    }

    let sorted = descriptive::sorted(data);
    let range = sorted[n - 1] - sorted[0];
    if range < 1e-19 {
        return Err(Error::ComputationError(
            "Shapiro-Wilk: all values are identical".into(),
        ));
    }

    let mean = descriptive::mean(&sorted);
    let ss = sorted.iter().map(|&x| (x - mean).powi(2)).sum::<f64>();

    let a = shapiro_wilk_coefficients(n);
    let numerator: f64 = a
        .iter()
        .enumerate()
        .map(|(i, &ai)| ai * (sorted[n - 1 - i] - sorted[i]))
        .sum();

    let statistic = (numerator * numerator / ss).min(1.0);
    let p_value = shapiro_wilk_p_value(statistic, n);

    log::debug!(
        "Shapiro-Wilk on {} values: W = {:.6}, p = {:.6}",
        n,
        statistic,
        p_value
    );

    Ok(ShapiroWilkResult {
        statistic,
        p_value,
        normal: p_value > alpha,
    })
}

/// Internal implementation of one-way ANOVA
pub(crate) fn anova_impl(groups: &[(&str, &[f64])], alpha: f64) -> Result<AnovaResult> {
    let mut total_n = 0;
    let mut global_sum = 0.0;

    for (name, values) in groups {
        if values.is_empty() {
            return Err(Error::EmptyData(format!("group '{}' is empty", name)));
        }

        total_n += values.len();
        global_sum += values.iter().sum::<f64>();
    }

    if total_n <= groups.len() {
        return Err(Error::InsufficientData(format!(
            "analysis of variance needs more values ({}) than groups ({})",
            total_n,
            groups.len()
        )));
    }

    let global_mean = global_sum / total_n as f64;

    let mut ss_between = 0.0;
    let mut ss_within = 0.0;
    let mut ss_total = 0.0;

    for (_, values) in groups {
        let group_n = values.len();
        let group_mean = descriptive::mean(values);

        ss_between += group_n as f64 * (group_mean - global_mean).powi(2);

        for &value in values.iter() {
            ss_within += (value - group_mean).powi(2);
            ss_total += (value - global_mean).powi(2);
        }
    }

    let df_between = groups.len() - 1;
    let df_within = total_n - groups.len();
    let df_total = total_n - 1;

    let ms_between = ss_between / df_between as f64;
    let ms_within = ss_within / df_within as f64;

    // Zero within-group variance: F is infinite unless the means are equal too
    let f_statistic = if ms_within > 0.0 {
        ms_between / ms_within
    } else if ms_between > 0.0 {
        f64::INFINITY
    } else {
        f64::NAN
    };

    let p_value = f_survival(f_statistic, df_between, df_within);

    log::debug!(
        "ANOVA over {} groups: F({}, {}) = {:.6}, p = {:.6}",
        groups.len(),
        df_between,
        df_within,
        f_statistic,
        p_value
    );

    Ok(AnovaResult {
        f_statistic,
        p_value,
        ss_between,
        ss_within,
        ss_total,
        df_between,
        df_within,
        df_total,
        ms_between,
        ms_within,
        significant: p_value < alpha,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapiro_wilk_reference_values() {
        let result = shapiro_wilk_impl(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.05).unwrap();
        assert!((result.statistic - 0.986_762).abs() < 1e-5);
        assert!((result.p_value - 0.967_174).abs() < 1e-4);
        assert!(result.normal);

        let ten: Vec<f64> = (1..=10).map(|v| v as f64).collect();
        let result = shapiro_wilk_impl(&ten, 0.05).unwrap();
        assert!((result.statistic - 0.970_165).abs() < 1e-5);
        assert!((result.p_value - 0.892_367).abs() < 1e-4);
    }

    #[test]
    fn test_shapiro_wilk_three_values() {
        let result = shapiro_wilk_impl(&[9.44, 8.00, 5.42], 0.05).unwrap();
        assert!((result.statistic - 0.973_894).abs() < 1e-5);
        assert!((result.p_value - 0.690_056).abs() < 1e-4);
    }

    #[test]
    fn test_shapiro_wilk_rejects_skewed_sample() {
        let data: Vec<f64> = (0..50).map(|i| (i as f64 / 5.0).exp()).collect();
        let result = shapiro_wilk_impl(&data, 0.05).unwrap();
        assert!(result.p_value < 0.05);
        assert!(!result.normal);
    }

    #[test]
    fn test_shapiro_wilk_input_validation() {
        assert!(shapiro_wilk_impl(&[1.0, 2.0], 0.05).is_err());
        assert!(shapiro_wilk_impl(&[4.0, 4.0, 4.0, 4.0], 0.05).is_err());
    }

    #[test]
    fn test_anova_basic() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0, 3.0, 4.0, 5.0, 6.0];
        let c = [3.0, 4.0, 5.0, 6.0, 7.0];
        let groups = [("A", &a[..]), ("B", &b[..]), ("C", &c[..])];

        let result = anova_impl(&groups, 0.05).unwrap();

        assert!((result.f_statistic - 2.0).abs() < 1e-10);
        assert!((result.p_value - 0.177_978_515_625).abs() < 1e-10);
        assert_eq!(result.df_between, 2);
        assert_eq!(result.df_within, 12);
        assert_eq!(result.df_total, 14);
        assert!((result.ss_between + result.ss_within - result.ss_total).abs() < 1e-10);
        assert!(!result.significant);
    }

    #[test]
    fn test_anova_significant_difference() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [11.0, 12.0, 13.0, 14.0, 15.0];
        let c = [21.0, 22.0, 23.0, 24.0, 25.0];
        let groups = [("A", &a[..]), ("B", &b[..]), ("C", &c[..])];

        let result = anova_impl(&groups, 0.05).unwrap();

        assert!(result.f_statistic > 100.0);
        assert!(result.p_value < 0.05);
        assert!(result.significant);
    }

    #[test]
    fn test_anova_rejects_empty_group() {
        let a = [1.0, 2.0];
        let empty: [f64; 0] = [];
        assert!(anova_impl(&[("A", &a[..]), ("B", &empty[..])], 0.05).is_err());
        assert!(anova_impl(&[("A", &[1.0][..]), ("B", &[2.0][..])], 0.05).is_err());
    }
}
