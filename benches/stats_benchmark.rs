//! Statistics Benchmarks
//!
//! Descriptive statistics, the Shapiro-Wilk and ANOVA tests, and the full
//! report over rosters of increasing size.

use cgpa_insights::roster::{Roster, Student};
use cgpa_insights::{stats, AnalysisConfig, Report};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Synthetic roster with CGPAs spread over 5.0..=9.8
fn create_roster(n: usize) -> Roster {
    // Simple LCG random generator for reproducibility
    let mut state: u64 = 42;
    let students = (0..n)
        .map(|i| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let u = (state >> 33) as f64 / (u32::MAX as f64 / 2.0);
            let cgpa = ((5.0 + 4.8 * u.min(1.0)) * 100.0).round() / 100.0;
            let branch = ["CS", "EC", "ME"][i % 3];
            Student::new(i as u32 + 1, cgpa, branch)
        })
        .collect();
    Roster::from_students(students).unwrap()
}

fn bench_descriptive(c: &mut Criterion) {
    let mut group = c.benchmark_group("descriptive");
    for size in [152, 1_000, 5_000] {
        let roster = create_roster(size);
        let values = roster.cgpa().values().to_vec();
        group.bench_with_input(BenchmarkId::new("describe", size), &values, |b, v| {
            b.iter(|| stats::describe(black_box(v)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("moments", size), &values, |b, v| {
            b.iter(|| {
                (
                    stats::skewness(black_box(v)).unwrap(),
                    stats::kurtosis(black_box(v)).unwrap(),
                )
            })
        });
    }
    group.finish();
}

fn bench_tests(c: &mut Criterion) {
    let mut group = c.benchmark_group("tests");
    for size in [152, 1_000, 5_000] {
        let roster = create_roster(size);
        let values = roster.cgpa().values().to_vec();
        group.bench_with_input(BenchmarkId::new("shapiro_wilk", size), &values, |b, v| {
            b.iter(|| stats::shapiro_wilk(black_box(v), 0.05).unwrap())
        });

        let groups = roster.group_by_branch().unwrap().groups();
        group.bench_with_input(BenchmarkId::new("anova", size), &groups, |b, g| {
            b.iter(|| {
                let input: Vec<(&str, &[f64])> =
                    g.iter().map(|(k, v)| (k.as_str(), v.as_slice())).collect();
                stats::anova(black_box(&input), 0.05).unwrap()
            })
        });
    }
    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let config = AnalysisConfig::default();
    let roster = create_roster(1_000);
    c.bench_function("report_1000", |b| {
        b.iter(|| Report::compute(black_box(&roster), &config).unwrap())
    });
}

criterion_group!(benches, bench_descriptive, bench_tests, bench_report);
criterion_main!(benches);
