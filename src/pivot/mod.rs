//! Cross tabulation of a row key against a categorical column

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::series::Categorical;

/// How to turn counts into percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalize {
    /// Each row sums to 100
    Index,
    /// Each column sums to 100
    Columns,
    /// The whole table sums to 100
    All,
}

/// Frequency table of row labels against categories
#[derive(Debug, Clone, Serialize)]
pub struct CrossTab {
    /// Distinct row labels, sorted
    pub row_labels: Vec<String>,
    /// Column labels in category order
    pub col_labels: Vec<String>,
    /// `counts[row][col]`
    pub counts: Vec<Vec<usize>>,
}

/// Count co-occurrences of `row_keys` and the categories of `columns`.
///
/// Every category becomes a column, including ones with no rows.
pub fn crosstab(row_keys: &[String], columns: &Categorical) -> Result<CrossTab> {
    if row_keys.len() != columns.len() {
        return Err(Error::LengthMismatch {
            expected: columns.len(),
            actual: row_keys.len(),
        });
    }

    let row_labels: Vec<String> = row_keys
        .iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let col_labels = columns.categories().to_vec();

    let mut counts = vec![vec![0usize; col_labels.len()]; row_labels.len()];
    for (key, &code) in row_keys.iter().zip(columns.codes()) {
        // row_labels is sorted, so the search always succeeds
        if let Ok(row) = row_labels.binary_search(key) {
            counts[row][code] += 1;
        }
    }

    Ok(CrossTab {
        row_labels,
        col_labels,
        counts,
    })
}

impl CrossTab {
    /// Count for a row and column label
    pub fn count(&self, row: &str, col: &str) -> Option<usize> {
        let r = self.row_labels.iter().position(|l| l == row)?;
        let c = self.col_labels.iter().position(|l| l == col)?;
        Some(self.counts[r][c])
    }

    /// Sum of every row
    pub fn row_totals(&self) -> Vec<usize> {
        self.counts.iter().map(|row| row.iter().sum()).collect()
    }

    /// Sum of every column
    pub fn col_totals(&self) -> Vec<usize> {
        (0..self.col_labels.len())
            .map(|c| self.counts.iter().map(|row| row[c]).sum())
            .collect()
    }

    /// Percentages of the counts; rows or columns with no data stay at zero
    pub fn normalize(&self, how: Normalize) -> Vec<Vec<f64>> {
        let row_totals = self.row_totals();
        let col_totals = self.col_totals();
        let grand_total: usize = row_totals.iter().sum();

        self.counts
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, &count)| {
                        let denom = match how {
                            Normalize::Index => row_totals[r],
                            Normalize::Columns => col_totals[c],
                            Normalize::All => grand_total,
                        };
                        if denom == 0 {
                            0.0
                        } else {
                            count as f64 / denom as f64 * 100.0
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::cut;

    fn fixture() -> CrossTab {
        let branches: Vec<String> = ["EC", "CS", "EC", "CS", "CS"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let levels = cut(
            &[6.0, 9.0, 7.0, 6.2, 8.0],
            &[0.0, 6.5, 7.5, 10.0],
            &["low", "mid", "high"],
        )
        .unwrap();
        crosstab(&branches, &levels).unwrap()
    }

    #[test]
    fn test_crosstab_counts() {
        let table = fixture();
        assert_eq!(table.row_labels, vec!["CS", "EC"]);
        assert_eq!(table.col_labels, vec!["low", "mid", "high"]);
        assert_eq!(table.counts, vec![vec![1, 0, 2], vec![1, 1, 0]]);
        assert_eq!(table.count("EC", "mid"), Some(1));
        assert_eq!(table.count("ME", "mid"), None);
        assert_eq!(table.col_totals(), vec![2, 1, 2]);
    }

    #[test]
    fn test_normalize_index_rows_sum_to_100() {
        let table = fixture();
        for row in table.normalize(Normalize::Index) {
            assert!((row.iter().sum::<f64>() - 100.0).abs() < 1e-9);
        }
        let pct = table.normalize(Normalize::Columns);
        assert!((pct[0][0] - 50.0).abs() < 1e-9);
        let all = table.normalize(Normalize::All);
        assert!((all[0][2] - 40.0).abs() < 1e-9);
    }
}
