use std::io::Write;

use comfy_table::presets::ASCII_MARKDOWN;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Row, Table};

use super::{Report, Share};
use crate::error::Result;
use crate::roster::RankedStudent;

const BANNER_WIDTH: usize = 80;
const RULE_WIDTH: usize = 40;

fn heading<W: Write>(out: &mut W, number: usize, title: &str) -> Result<()> {
    writeln!(out, "\n{}. {}", number, title)?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    Ok(())
}

fn numeric(value: String) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}

fn new_table(header: Vec<String>) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_MARKDOWN);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn write_shares<W: Write>(out: &mut W, shares: &[Share]) -> Result<()> {
    for share in shares {
        writeln!(
            out,
            "  {}: {} students ({:.1}%)",
            share.label, share.count, share.percent
        )?;
    }
    Ok(())
}

fn describe_line<W: Write>(out: &mut W, label: &str, value: f64) -> Result<()> {
    writeln!(out, "{:<8}{:>14.6}", label, value)?;
    Ok(())
}

fn student_line(entry: &RankedStudent, with_rank: bool) -> String {
    let student = &entry.student;
    let body = format!(
        "Student {} - CGPA: {:.3} ({})",
        student.id, student.cgpa, student.branch
    );
    if with_rank {
        format!("Rank {}: {}", entry.rank, body)
    } else {
        body
    }
}

impl Report {
    /// Branch statistics as a console table
    pub fn branch_table(&self) -> Table {
        let mut table = new_table(
            ["Branch", "count", "mean", "std", "min", "max"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        for group in &self.branches.stats {
            let mut row = Row::new();
            row.add_cell(Cell::new(&group.key));
            row.add_cell(numeric(group.count.to_string()));
            row.add_cell(numeric(format!("{:.3}", group.mean)));
            row.add_cell(numeric(format!("{:.3}", group.std)));
            row.add_cell(numeric(format!("{:.3}", group.min)));
            row.add_cell(numeric(format!("{:.3}", group.max)));
            table.add_row(row);
        }
        table
    }

    /// Row percentages of performance level per branch
    pub fn performance_table(&self) -> Table {
        let crosstab = &self.branches.performance;
        let mut header = vec!["Branch".to_string()];
        header.extend(crosstab.col_labels.iter().cloned());

        let mut table = new_table(header);
        for (label, percents) in crosstab
            .row_labels
            .iter()
            .zip(&self.branches.performance_percent)
        {
            let mut row = Row::new();
            row.add_cell(Cell::new(label));
            for pct in percents {
                row.add_cell(numeric(format!("{:.1}", pct)));
            }
            table.add_row(row);
        }
        table
    }

    /// Write the sectioned console report
    pub fn render_text<W: Write>(&self, out: &mut W) -> Result<()> {
        let s = &self.summary;

        writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;
        writeln!(out, "COMPREHENSIVE CGPA ANALYSIS OF SHORTLISTED STUDENTS")?;
        writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;

        heading(out, 1, "BASIC STATISTICS")?;
        writeln!(out, "Total Students: {}", s.count)?;
        writeln!(out, "Mean CGPA: {:.3}", s.mean)?;
        writeln!(out, "Median CGPA: {:.3}", s.median)?;
        writeln!(out, "Standard Deviation: {:.3}", s.std)?;
        writeln!(out, "Minimum CGPA: {:.3}", s.min)?;
        writeln!(out, "Maximum CGPA: {:.3}", s.max)?;
        writeln!(out, "Range: {:.3}", s.range())?;
        writeln!(out, "First Quartile (Q1): {:.3}", s.q1)?;
        writeln!(out, "Third Quartile (Q3): {:.3}", s.q3)?;
        writeln!(out, "Interquartile Range (IQR): {:.3}", s.iqr())?;

        heading(out, 2, "DISTRIBUTION ANALYSIS")?;
        writeln!(out, "CGPA Category Distribution:")?;
        write_shares(out, &self.grade_bands)?;
        writeln!(out, "\nPerformance Level Distribution:")?;
        write_shares(out, &self.performance_levels)?;

        heading(out, 3, "BRANCH-WISE ANALYSIS")?;
        writeln!(out, "{}", self.branch_table())?;
        writeln!(out, "\nBranch-wise Performance Levels (%):")?;
        writeln!(out, "{}", self.performance_table())?;

        heading(out, 4, "TOP PERFORMERS")?;
        writeln!(out, "Top {} Students by CGPA:", self.top.len())?;
        for entry in &self.top {
            writeln!(out, "  {}", student_line(entry, true))?;
        }

        heading(out, 5, "STUDENTS NEEDING SUPPORT")?;
        writeln!(out, "Bottom {} Students by CGPA:", self.bottom.len())?;
        for entry in &self.bottom {
            writeln!(out, "  {}", student_line(entry, false))?;
        }

        heading(out, 6, "GRADE DISTRIBUTION INSIGHTS")?;
        for share in &self.thresholds {
            writeln!(
                out,
                "Students with {}: {} ({:.1}%)",
                share.label, share.count, share.percent
            )?;
        }

        heading(out, 7, "STATISTICAL ANALYSIS")?;
        let sw = &self.tests.shapiro_wilk;
        writeln!(out, "Shapiro-Wilk Normality Test:")?;
        writeln!(
            out,
            "  Statistic: {:.4}, p-value: {:.4}",
            sw.statistic, sw.p_value
        )?;
        writeln!(
            out,
            "  Distribution is {} (α = {})",
            if sw.normal { "Normal" } else { "Not Normal" },
            self.alpha
        )?;

        let skew = self.tests.skewness;
        let skew_word = if skew > 0.0 {
            "Right-skewed"
        } else if skew < 0.0 {
            "Left-skewed"
        } else {
            "Symmetric"
        };
        writeln!(out, "Skewness: {:.4} ({})", skew, skew_word)?;
        let kurt = self.tests.kurtosis;
        writeln!(
            out,
            "Kurtosis: {:.4} ({})",
            kurt,
            if kurt > 0.0 {
                "Heavy-tailed"
            } else {
                "Light-tailed"
            }
        )?;

        let anova = &self.tests.anova;
        writeln!(out, "\nOne-way ANOVA (Branch comparison):")?;
        writeln!(
            out,
            "  F-statistic: {:.4}, p-value: {:.4}",
            anova.f_statistic, anova.p_value
        )?;
        writeln!(
            out,
            "  {} difference between branches (α = {})",
            if anova.significant {
                "Significant"
            } else {
                "No significant"
            },
            self.alpha
        )?;

        heading(out, 8, "KEY INSIGHTS & RECOMMENDATIONS")?;
        for insight in &self.insights {
            writeln!(out, "  {} {}", insight.kind.marker(), insight.text)?;
        }

        heading(out, 9, "RECOMMENDATIONS")?;
        for rec in &self.recommendations {
            writeln!(out, "  • {}", rec)?;
        }

        heading(out, 10, "DETAILED STATISTICAL SUMMARY")?;
        describe_line(out, "count", s.count as f64)?;
        describe_line(out, "mean", s.mean)?;
        describe_line(out, "std", s.std)?;
        describe_line(out, "min", s.min)?;
        describe_line(out, "25%", s.q1)?;
        describe_line(out, "50%", s.median)?;
        describe_line(out, "75%", s.q3)?;
        describe_line(out, "max", s.max)?;

        heading(out, 11, "PERCENTILE ANALYSIS")?;
        for (p, value) in &self.percentiles {
            writeln!(out, "{}th percentile: {:.3}", p, value)?;
        }

        writeln!(out, "\n{}", "=".repeat(BANNER_WIDTH))?;
        writeln!(
            out,
            "Analysis Complete! Use this data to make informed academic decisions."
        )?;
        writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;
        Ok(())
    }

    /// Write the report as JSON
    pub fn render_json<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}
