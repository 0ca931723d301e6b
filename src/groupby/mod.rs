use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::series::Series;
use crate::stats;

/// Aggregates of one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats<K> {
    /// Group key
    pub key: K,
    /// Number of rows in the group
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation, NaN for single-row groups
    pub std: f64,
    /// Minimum
    pub min: f64,
    /// Maximum
    pub max: f64,
}

/// Rows of a numeric Series partitioned by key
///
/// Groups are always reported in ascending key order, the way pandas sorts
/// group keys by default.
#[derive(Debug)]
pub struct GroupBy<'a, K>
where
    K: Debug + Eq + Hash + Ord + Clone,
{
    /// Distinct keys, sorted
    keys: Vec<K>,

    /// Row positions per key
    groups: HashMap<K, Vec<usize>>,

    /// Grouped values
    source: &'a Series<f64>,
}

impl<'a, K> GroupBy<'a, K>
where
    K: Debug + Eq + Hash + Ord + Clone,
{
    /// Partition `source` by `keys`, one key per row
    pub fn new(keys: &[K], source: &'a Series<f64>) -> Result<Self> {
        if keys.len() != source.len() {
            return Err(Error::LengthMismatch {
                expected: source.len(),
                actual: keys.len(),
            });
        }

        let mut groups: HashMap<K, Vec<usize>> = HashMap::new();
        for (i, key) in keys.iter().enumerate() {
            groups.entry(key.clone()).or_default().push(i);
        }

        let mut sorted_keys: Vec<K> = groups.keys().cloned().collect();
        sorted_keys.sort();

        Ok(GroupBy {
            keys: sorted_keys,
            groups,
            source,
        })
    }

    /// Number of groups
    pub fn group_count(&self) -> usize {
        self.keys.len()
    }

    /// Group keys in sorted order
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Size of every group
    pub fn size(&self) -> Vec<(K, usize)> {
        self.keys
            .iter()
            .map(|k| (k.clone(), self.groups[k].len()))
            .collect()
    }

    /// Values of one group, in input order
    pub fn values(&self, key: &K) -> Option<Vec<f64>> {
        self.groups.get(key).map(|indices| {
            indices
                .iter()
                .filter_map(|&i| self.source.get(i).copied())
                .collect()
        })
    }

    /// All groups with their values, in key order
    pub fn groups(&self) -> Vec<(K, Vec<f64>)> {
        self.keys
            .iter()
            .map(|k| (k.clone(), self.values(k).unwrap_or_default()))
            .collect()
    }

    /// Mean of every group
    pub fn mean(&self) -> Vec<(K, f64)> {
        self.groups()
            .into_iter()
            .map(|(k, values)| {
                let mean = values.iter().sum::<f64>() / values.len() as f64;
                (k, mean)
            })
            .collect()
    }

    /// count, mean, std, min and max of every group
    pub fn agg(&self) -> Result<Vec<GroupStats<K>>> {
        self.groups()
            .into_iter()
            .map(|(key, values)| {
                let described = stats::describe(&values)?;
                Ok(GroupStats {
                    key,
                    count: described.count,
                    mean: described.mean,
                    std: described.std,
                    min: described.min,
                    max: described.max,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Vec<String>, Series<f64>) {
        let keys = vec!["EC", "CS", "EC", "ME", "CS"]
            .into_iter()
            .map(String::from)
            .collect();
        let values = Series::new(vec![8.0, 9.44, 6.0, 5.42, 7.0], Some("CGPA".to_string()));
        (keys, values)
    }

    #[test]
    fn test_groups_are_sorted() {
        let (keys, values) = fixture();
        let grouped = GroupBy::new(&keys, &values).unwrap();
        assert_eq!(grouped.group_count(), 3);
        assert_eq!(grouped.keys(), &["CS", "EC", "ME"]);
        assert_eq!(
            grouped.size(),
            vec![
                ("CS".to_string(), 2),
                ("EC".to_string(), 2),
                ("ME".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_group_mean_is_subset_mean() {
        let (keys, values) = fixture();
        let grouped = GroupBy::new(&keys, &values).unwrap();
        let means = grouped.mean();
        assert!((means[0].1 - (9.44 + 7.0) / 2.0).abs() < 1e-12);
        assert!((means[1].1 - 7.0).abs() < 1e-12);
        assert_eq!(grouped.values(&"EC".to_string()), Some(vec![8.0, 6.0]));
    }

    #[test]
    fn test_agg_single_row_group_has_nan_std() {
        let (keys, values) = fixture();
        let stats = GroupBy::new(&keys, &values).unwrap().agg().unwrap();
        let me = &stats[2];
        assert_eq!(me.key, "ME");
        assert_eq!(me.count, 1);
        assert!(me.std.is_nan());
        assert_eq!(me.min, 5.42);
        assert_eq!(me.max, 5.42);
        assert!((stats[1].std - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_length_mismatch() {
        let values = Series::new(vec![1.0, 2.0], None);
        assert!(GroupBy::new(&["a".to_string()], &values).is_err());
    }
}
