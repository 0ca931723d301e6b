use std::collections::HashSet;

use crate::error::{Error, Result};

/// Ordered categorical column
///
/// Stores one integer code per row pointing into an ordered list of
/// category labels, like pandas' `Categorical` with `ordered=True`.
#[derive(Debug, Clone)]
pub struct Categorical {
    /// Code per row, an index into `categories`
    codes: Vec<usize>,

    /// Category labels in their defined order
    categories: Vec<String>,
}

impl Categorical {
    /// Build a categorical directly from codes
    pub fn from_codes(codes: Vec<usize>, categories: Vec<String>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(categories.len());
        for cat in &categories {
            if !seen.insert(cat.as_str()) {
                return Err(Error::InvalidInput(format!(
                    "duplicate category '{}'",
                    cat
                )));
            }
        }

        if let Some(&bad) = codes.iter().find(|&&code| code >= categories.len()) {
            return Err(Error::InvalidInput(format!(
                "code {} is out of range for {} categories",
                bad,
                categories.len()
            )));
        }

        Ok(Categorical { codes, categories })
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether there are no rows
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Category labels in order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Per-row codes
    pub fn codes(&self) -> &[usize] {
        &self.codes
    }

    /// Label of the row at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.codes
            .get(index)
            .map(|&code| self.categories[code].as_str())
    }

    /// Count per category in category order, empty categories included
    pub fn value_counts(&self) -> Vec<(String, usize)> {
        let mut counts = vec![0usize; self.categories.len()];
        for &code in &self.codes {
            counts[code] += 1;
        }

        self.categories.iter().cloned().zip(counts).collect()
    }

    /// Non-empty categories ordered by descending count.
    ///
    /// Ties keep category order.
    pub fn value_counts_by_frequency(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = self
            .value_counts()
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

/// Bin values into ordered categories.
///
/// Intervals are closed on the left and open on the right, except the last
/// one which also includes its upper edge. `labels` must hold exactly one
/// label per interval.
pub fn cut(values: &[f64], edges: &[f64], labels: &[&str]) -> Result<Categorical> {
    if edges.len() < 2 {
        return Err(Error::InvalidInput(
            "at least two bin edges are required".to_string(),
        ));
    }
    if labels.len() != edges.len() - 1 {
        return Err(Error::LengthMismatch {
            expected: edges.len() - 1,
            actual: labels.len(),
        });
    }
    if edges.windows(2).any(|w| !(w[0] < w[1])) {
        return Err(Error::InvalidInput(
            "bin edges must be strictly increasing".to_string(),
        ));
    }

    let last = edges.len() - 2;
    let mut codes = Vec::with_capacity(values.len());
    for &value in values {
        let code = edges
            .windows(2)
            .enumerate()
            .find(|(i, w)| value >= w[0] && (value < w[1] || (*i == last && value == w[1])))
            .map(|(i, _)| i)
            .ok_or_else(|| {
                Error::InvalidValue(format!(
                    "{} is outside the bin range [{}, {}]",
                    value,
                    edges[0],
                    edges[edges.len() - 1]
                ))
            })?;
        codes.push(code);
    }

    let categories = labels.iter().map(|s| s.to_string()).collect();
    Categorical::from_codes(codes, categories)
}
