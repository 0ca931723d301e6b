mod categorical;

use num_traits::NumCast;
use std::cmp::{Ordering, PartialOrd};
use std::fmt::Debug;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Sub};

use crate::error::{Error, Result};
use crate::stats::{self, DescriptiveStats};

pub use self::categorical::{cut, Categorical};

/// One-dimensional named column of values
#[derive(Debug, Clone)]
pub struct Series<T>
where
    T: Debug + Clone,
{
    /// Column values
    values: Vec<T>,

    /// Optional column name
    name: Option<String>,
}

// Basic implementation
impl<T> Series<T>
where
    T: Debug + Clone,
{
    /// Create a new Series from a vector
    pub fn new(values: Vec<T>, name: Option<String>) -> Self {
        Series { values, name }
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the Series holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at position `pos`
    pub fn get(&self, pos: usize) -> Option<&T> {
        self.values.get(pos)
    }

    /// All values as a slice
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Column name
    pub fn name(&self) -> Option<&String> {
        self.name.as_ref()
    }

    /// Set the column name
    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }
}

// Numeric Series
impl<T> Series<T>
where
    T: Debug
        + Clone
        + Copy
        + Sum<T>
        + PartialOrd
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + NumCast
        + Default,
{
    /// Sum of all values
    pub fn sum(&self) -> T {
        if self.values.is_empty() {
            T::default()
        } else {
            self.values.iter().copied().sum()
        }
    }

    /// Arithmetic mean as f64
    pub fn mean(&self) -> Result<f64> {
        if self.values.is_empty() {
            return Err(Error::EmptyData(
                "cannot compute the mean of an empty series".to_string(),
            ));
        }

        let sum: f64 = num_traits::cast(self.sum())
            .ok_or_else(|| Error::ComputationError("sum does not fit in f64".to_string()))?;

        Ok(sum / self.len() as f64)
    }

    /// Smallest value
    pub fn min(&self) -> Result<T> {
        self.values
            .iter()
            .copied()
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
            .ok_or_else(|| {
                Error::EmptyData("cannot compute the minimum of an empty series".to_string())
            })
    }

    /// Largest value
    pub fn max(&self) -> Result<T> {
        self.values
            .iter()
            .copied()
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
            .ok_or_else(|| {
                Error::EmptyData("cannot compute the maximum of an empty series".to_string())
            })
    }
}

// Floating point Series
impl Series<f64> {
    /// Sample variance (ddof = 1)
    pub fn var(&self) -> Result<f64> {
        stats::variance(&self.values)
    }

    /// Sample standard deviation (ddof = 1)
    pub fn std(&self) -> Result<f64> {
        Ok(self.var()?.sqrt())
    }

    /// Median value
    pub fn median(&self) -> Result<f64> {
        stats::quantile(&self.values, 0.5)
    }

    /// Linear-interpolation quantile, `q` in `[0, 1]`
    pub fn quantile(&self, q: f64) -> Result<f64> {
        stats::quantile(&self.values, q)
    }

    /// Count, mean, std, min, quartiles and max
    pub fn describe(&self) -> Result<DescriptiveStats> {
        stats::describe(&self.values)
    }

    /// Positions that sort the values in descending order.
    ///
    /// The sort is stable: equal values keep their input order.
    pub fn argsort_desc(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.values.len()).collect();
        order.sort_by(|&a, &b| {
            self.values[b]
                .partial_cmp(&self.values[a])
                .unwrap_or(Ordering::Equal)
        });
        order
    }

    /// Positions that sort the values in ascending order (stable)
    pub fn argsort_asc(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.values.len()).collect();
        order.sort_by(|&a, &b| {
            self.values[a]
                .partial_cmp(&self.values[b])
                .unwrap_or(Ordering::Equal)
        });
        order
    }

    /// Number of values matching the predicate
    pub fn count_where<F>(&self, predicate: F) -> usize
    where
        F: Fn(f64) -> bool,
    {
        self.values.iter().filter(|&&v| predicate(v)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_aggregates() {
        let series = Series::new(vec![9.44, 8.00, 5.42], Some("CGPA".to_string()));
        assert_eq!(series.len(), 3);
        assert!((series.mean().unwrap() - 7.62).abs() < 1e-10);
        assert_eq!(series.max().unwrap(), 9.44);
        assert_eq!(series.min().unwrap(), 5.42);
        assert_eq!(series.name().unwrap(), "CGPA");
    }

    #[test]
    fn test_integer_mean() {
        let series = Series::new(vec![1u32, 2, 3, 4], None);
        assert_eq!(series.sum(), 10);
        assert!((series.mean().unwrap() - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_empty_series_errors() {
        let series: Series<f64> = Series::new(vec![], None);
        assert!(series.mean().is_err());
        assert!(series.min().is_err());
        assert!(series.max().is_err());
        assert!(series.median().is_err());
    }

    #[test]
    fn test_argsort_is_stable() {
        let series = Series::new(vec![7.0, 9.0, 7.0, 8.0, 9.0], None);
        assert_eq!(series.argsort_desc(), vec![1, 4, 3, 0, 2]);
        assert_eq!(series.argsort_asc(), vec![0, 2, 3, 1, 4]);
    }

    #[test]
    fn test_count_where() {
        let series = Series::new(vec![6.9, 7.0, 8.0, 8.5], None);
        assert_eq!(series.count_where(|v| v >= 8.0), 2);
        assert_eq!(series.count_where(|v| v < 7.0), 1);
    }
}
