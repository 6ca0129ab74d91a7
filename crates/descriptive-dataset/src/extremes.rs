//! Extremes and min-max normalization

use crate::Dataset;
use descriptive_core::utils;

impl Dataset {
    /// Smallest observation, `None` when empty and NaN if any observation is NaN
    pub fn min(&self) -> Option<f64> {
        utils::min(&self.values)
    }

    /// Largest observation, `None` when empty and NaN if any observation is NaN
    pub fn max(&self) -> Option<f64> {
        utils::max(&self.values)
    }

    /// Rescale every observation to `[0, 1]` via `(v - min) / (max - min)`
    ///
    /// Constant data maps to all zeros instead of dividing by zero.
    /// An empty dataset yields an empty vector. A NaN observation makes the
    /// extremes NaN, so every output is NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descriptive_dataset::Dataset;
    ///
    /// let data = Dataset::from_values(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    /// assert_eq!(data.normalize(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    ///
    /// let constant = Dataset::from_values(vec![5.0, 5.0, 5.0]);
    /// assert_eq!(constant.normalize(), vec![0.0, 0.0, 0.0]);
    /// ```
    pub fn normalize(&self) -> Vec<f64> {
        let (Some(min), Some(max)) = (self.min(), self.max()) else {
            return Vec::new();
        };

        let span = max - min;
        if span == 0.0 {
            return vec![0.0; self.values.len()];
        }

        self.values.iter().map(|&v| (v - min) / span).collect()
    }
}
