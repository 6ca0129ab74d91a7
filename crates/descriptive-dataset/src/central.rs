//! Central tendency: mean, median and mode

use crate::Dataset;
use descriptive_core::utils;
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

impl Dataset {
    /// Arithmetic mean, `None` when empty
    pub fn mean(&self) -> Option<f64> {
        utils::mean(&self.values)
    }

    /// Median of the observations, `None` when empty
    ///
    /// For an even count this is the average of the two middle values.
    /// A NaN observation makes the median NaN, like the other order statistics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descriptive_dataset::Dataset;
    ///
    /// assert_eq!(Dataset::from_values(vec![3.0, 1.0, 2.0]).median(), Some(2.0));
    /// assert_eq!(Dataset::from_values(vec![4.0, 1.0, 3.0, 2.0]).median(), Some(2.5));
    /// ```
    pub fn median(&self) -> Option<f64> {
        let sorted = self.sorted();
        let n = sorted.len();
        if n == 0 {
            return None;
        }
        // NaN sorts last
        if sorted[n - 1].is_nan() {
            return Some(f64::NAN);
        }
        let mid = n / 2;
        if n % 2 == 0 {
            Some((sorted[mid - 1] + sorted[mid]) / 2.0)
        } else {
            Some(sorted[mid])
        }
    }

    /// Every distinct value sharing the highest frequency, ascending
    ///
    /// There is no "no mode" case: when every value occurs exactly once,
    /// every value is returned. An empty dataset yields an empty vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descriptive_dataset::Dataset;
    ///
    /// let data = Dataset::from_values(vec![3.0, 1.0, 1.0, 2.0, 2.0]);
    /// assert_eq!(data.mode(), vec![1.0, 2.0]);
    ///
    /// let data = Dataset::from_values(vec![3.0, 2.0, 1.0]);
    /// assert_eq!(data.mode(), vec![1.0, 2.0, 3.0]);
    /// ```
    pub fn mode(&self) -> Vec<f64> {
        let mut frequencies: BTreeMap<OrderedFloat<f64>, usize> = BTreeMap::new();
        for &value in &self.values {
            *frequencies.entry(OrderedFloat(value)).or_insert(0) += 1;
        }

        let Some(&highest) = frequencies.values().max() else {
            return Vec::new();
        };

        frequencies
            .into_iter()
            .filter(|&(_, count)| count == highest)
            .map(|(value, _)| value.into_inner())
            .collect()
    }
}
