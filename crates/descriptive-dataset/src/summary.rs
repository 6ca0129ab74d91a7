//! One-shot snapshot of the common statistics

use crate::Dataset;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Descriptive statistics summarizing a non-empty dataset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    /// Population variance
    pub variance: f64,
    pub std_dev: f64,
    pub range: f64,
    pub sum: f64,
}

impl Dataset {
    /// Compute a [`Summary`], `None` when the dataset is empty
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descriptive_dataset::Dataset;
    ///
    /// let summary = Dataset::from_values(vec![5.0, 2.0, 4.0, 1.0, 3.0]).summary().unwrap();
    /// assert_eq!(summary.count, 5);
    /// assert_eq!(summary.median, 3.0);
    /// assert_eq!(summary.variance, 2.0);
    ///
    /// assert!(Dataset::new().summary().is_none());
    /// ```
    pub fn summary(&self) -> Option<Summary> {
        Some(Summary {
            count: self.len(),
            min: self.min()?,
            max: self.max()?,
            mean: self.mean()?,
            median: self.median()?,
            variance: self.variance()?,
            std_dev: self.std_dev()?,
            range: self.range(),
            sum: self.sum(),
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} min={:.4} max={:.4} mean={:.4} median={:.4} sd={:.4}",
            self.count, self.min, self.max, self.mean, self.median, self.std_dev
        )
    }
}
