use cgpa_insights::stats;

#[test]
fn test_shapiro_wilk_reference_values() {
    let cases: [(&[f64], f64, f64); 3] = [
        (&[1.0, 2.0, 3.0, 4.0, 5.0], 0.98676, 0.96717),
        (
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
            0.970165,
            0.892367,
        ),
        (&[9.44, 8.0, 5.42], 0.973894, 0.690056),
    ];
    for (data, w, p) in cases {
        let result = stats::shapiro_wilk(data, 0.05).unwrap();
        assert!((result.statistic - w).abs() < 1e-4, "W {} != {}", result.statistic, w);
        assert!((result.p_value - p).abs() < 1e-3, "p {} != {}", result.p_value, p);
        assert!(result.normal);
    }
}

#[test]
fn test_shapiro_wilk_rejects_skewed_sample() {
    let data: Vec<f64> = (0..60).map(|i| (i as f64 / 6.0).exp()).collect();
    let result = stats::shapiro_wilk(&data, 0.05).unwrap();
    assert!(result.p_value < 0.05);
    assert!(!result.normal);
}

#[test]
fn test_shapiro_wilk_invalid_input() {
    assert!(stats::shapiro_wilk(&[1.0, 2.0], 0.05).is_err());
    assert!(stats::shapiro_wilk(&[3.0, 3.0, 3.0, 3.0], 0.05).is_err());
}

#[test]
fn test_anova_reference_values() {
    let a = [1.0, 2.0, 3.0, 4.0, 5.0];
    let b = [2.0, 3.0, 4.0, 5.0, 6.0];
    let c = [3.0, 4.0, 5.0, 6.0, 7.0];
    let result = stats::anova(&[("a", &a[..]), ("b", &b[..]), ("c", &c[..])], 0.05).unwrap();
    assert!((result.f_statistic - 2.0).abs() < 1e-10);
    assert!((result.p_value - 0.177978515625).abs() < 1e-6);
    assert_eq!(result.df_between, 2);
    assert_eq!(result.df_within, 12);
    assert!((result.ss_total - (result.ss_between + result.ss_within)).abs() < 1e-10);
    assert!(!result.significant);
}

#[test]
fn test_anova_needs_two_groups() {
    let a = [1.0, 2.0, 3.0];
    assert!(stats::anova(&[("a", &a[..])], 0.05).is_err());
}

#[test]
fn test_moments() {
    let data = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert!(stats::skewness(data).unwrap().abs() < 1e-12);
    assert!((stats::kurtosis(data).unwrap() + 1.3).abs() < 1e-12);
    assert!(stats::skewness([1.0, 2.0]).is_err());
}

#[test]
fn test_quantile_bounds() {
    let data = [5.42, 7.0, 9.44];
    assert_eq!(stats::quantile(data, 0.0).unwrap(), 5.42);
    assert_eq!(stats::quantile(data, 1.0).unwrap(), 9.44);
    assert!(stats::quantile(data, 1.5).is_err());
    assert!(stats::quantile(&[] as &[f64], 0.5).is_err());
}

#[test]
fn test_median_matches_middle_quantile() {
    let data = [8.12, 5.42, 9.44, 7.0, 6.85, 7.56, 8.9];
    let median = stats::describe(data).unwrap().median;
    assert_eq!(median, 7.56);
    assert_eq!(stats::quantile(data, 0.5).unwrap(), median);
}

#[test]
fn test_kurtosis_of_three_values() {
    let k = stats::kurtosis([9.44, 8.00, 5.42]).unwrap();
    assert!((k + 1.5).abs() < 1e-12);
    let single = stats::describe([7.5]).unwrap();
    assert!(single.std.is_nan());
}
