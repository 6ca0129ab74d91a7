//! Dispersion: variance, standard deviation, range and coefficient of variation

use crate::Dataset;
use descriptive_core::utils;

impl Dataset {
    /// Population variance (divides by `n`), `None` when empty
    pub fn variance(&self) -> Option<f64> {
        utils::population_variance(&self.values)
    }

    /// Population standard deviation, `None` when empty
    pub fn std_dev(&self) -> Option<f64> {
        self.variance().map(f64::sqrt)
    }

    /// `max - min`
    ///
    /// Unlike most statistics here this returns `0.0`, not `None`, for an
    /// empty dataset.
    pub fn range(&self) -> f64 {
        match (self.min(), self.max()) {
            (Some(min), Some(max)) => max - min,
            _ => 0.0,
        }
    }

    /// `std_dev / mean * 100`
    ///
    /// An empty dataset yields `NaN`. This is the one statistic whose undefined
    /// result is `NaN` rather than `None`, and callers rely on the distinction.
    /// A zero mean follows IEEE division (`inf` or `NaN`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descriptive_dataset::Dataset;
    ///
    /// let data = Dataset::from_values(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    /// let cv = data.coefficient_of_variation();
    /// assert!((cv - 2f64.sqrt() / 3.0 * 100.0).abs() < 1e-10);
    ///
    /// assert!(Dataset::new().coefficient_of_variation().is_nan());
    /// ```
    pub fn coefficient_of_variation(&self) -> f64 {
        match (self.std_dev(), self.mean()) {
            (Some(std_dev), Some(mean)) => (std_dev / mean) * 100.0,
            _ => f64::NAN,
        }
    }
}
