use serde::Serialize;

use crate::roster::Roster;
use crate::stats::DescriptiveStats;

/// Fixed advice printed after the insights
pub const RECOMMENDATIONS: [&str; 6] = [
    "Implement peer tutoring programs for students with CGPA < 7.0",
    "Recognize and reward top performers to maintain motivation",
    "Analyze teaching methodologies in branches with lower average CGPA",
    "Provide additional academic support during examination periods",
    "Create study groups mixing high and low performers",
    "Regular monitoring of academic progress through mid-semester evaluations",
];

const STRONG_MEAN: f64 = 7.5;
const EXCELLENT_CGPA: f64 = 8.0;
const AT_RISK_CGPA: f64 = 7.0;
const CONSISTENT_STD: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Positive,
    Warning,
    Info,
    Alert,
}

impl InsightKind {
    pub fn marker(&self) -> &'static str {
        match self {
            InsightKind::Positive => "✓",
            InsightKind::Warning => "⚠",
            InsightKind::Info => "📊",
            InsightKind::Alert => "🚨",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub text: String,
}

impl Insight {
    fn new(kind: InsightKind, text: impl Into<String>) -> Self {
        Insight {
            kind,
            text: text.into(),
        }
    }
}

/// First maximum (or minimum) wins, so ties resolve to the earlier branch
fn extreme_branch(means: &[(String, f64)], highest: bool) -> Option<&(String, f64)> {
    means.iter().fold(None, |best, entry| match best {
        None => Some(entry),
        Some(current) => {
            let better = if highest {
                entry.1 > current.1
            } else {
                entry.1 < current.1
            };
            if better {
                Some(entry)
            } else {
                Some(current)
            }
        }
    })
}

/// Rule-based observations about the roster
pub(crate) fn derive(
    roster: &Roster,
    summary: &DescriptiveStats,
    branch_means: &[(String, f64)],
) -> Vec<Insight> {
    let total = roster.len();
    let mut insights = Vec::new();

    insights.push(if summary.mean >= STRONG_MEAN {
        Insight::new(
            InsightKind::Positive,
            "Overall academic performance is STRONG with mean CGPA above 7.5",
        )
    } else {
        Insight::new(
            InsightKind::Warning,
            "Overall academic performance needs improvement with mean CGPA below 7.5",
        )
    });

    let excellent = roster.count_where(|v| v >= EXCELLENT_CGPA);
    insights.push(if excellent as f64 / total as f64 >= 0.5 {
        Insight::new(
            InsightKind::Positive,
            "Majority of students (≥50%) have excellent performance (CGPA ≥ 8.0)",
        )
    } else {
        Insight::new(
            InsightKind::Warning,
            "Less than 50% of students have excellent performance (CGPA ≥ 8.0)",
        )
    });

    insights.push(if summary.std <= CONSISTENT_STD {
        Insight::new(
            InsightKind::Positive,
            "CGPA distribution is relatively CONSISTENT across students",
        )
    } else {
        Insight::new(
            InsightKind::Warning,
            "High variability in CGPA suggests diverse academic performance levels",
        )
    });

    if let Some((name, mean)) = extreme_branch(branch_means, true) {
        insights.push(Insight::new(
            InsightKind::Info,
            format!("{} branch has the highest average CGPA ({:.3})", name, mean),
        ));
    }
    if let Some((name, mean)) = extreme_branch(branch_means, false) {
        insights.push(Insight::new(
            InsightKind::Info,
            format!("{} branch has the lowest average CGPA ({:.3})", name, mean),
        ));
    }

    let at_risk = roster.count_where(|v| v < AT_RISK_CGPA);
    if at_risk > 0 {
        insights.push(Insight::new(
            InsightKind::Alert,
            format!(
                "{} students have CGPA < 7.0 and may need academic support",
                at_risk
            ),
        ));
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Student;
    use crate::stats;

    #[test]
    fn test_extreme_branch_ties_pick_first() {
        let means = vec![
            ("CS".to_string(), 7.0),
            ("EC".to_string(), 8.0),
            ("ME".to_string(), 8.0),
        ];
        assert_eq!(extreme_branch(&means, true).unwrap().0, "EC");
        assert_eq!(extreme_branch(&means, false).unwrap().0, "CS");
        assert!(extreme_branch(&[], true).is_none());
    }

    #[test]
    fn test_weak_roster_gets_warnings() {
        let roster = Roster::from_students(vec![
            Student::new(1, 5.0, "CS"),
            Student::new(2, 9.5, "EC"),
            Student::new(3, 6.0, "ME"),
        ])
        .unwrap();
        let summary = stats::describe(roster.cgpa().values()).unwrap();
        let means = roster.group_by_branch().unwrap().mean();
        let insights = derive(&roster, &summary, &means);

        assert_eq!(insights[0].kind, InsightKind::Warning);
        assert_eq!(insights[1].kind, InsightKind::Warning);
        assert_eq!(insights[2].kind, InsightKind::Warning);
        assert!(insights[3].text.starts_with("EC branch has the highest"));
        assert!(insights[4].text.starts_with("CS branch has the lowest"));
        assert_eq!(insights[5].kind, InsightKind::Alert);
        assert!(insights[5].text.starts_with("2 students"));
    }

    #[test]
    fn test_no_alert_without_at_risk_students() {
        let roster = Roster::from_students(vec![
            Student::new(1, 8.5, "CS"),
            Student::new(2, 8.1, "CS"),
        ])
        .unwrap();
        let summary = stats::describe(roster.cgpa().values()).unwrap();
        let means = roster.group_by_branch().unwrap().mean();
        let insights = derive(&roster, &summary, &means);

        assert!(insights.iter().all(|i| i.kind != InsightKind::Alert));
        assert!(insights[..3].iter().all(|i| i.kind == InsightKind::Positive));
    }
}
