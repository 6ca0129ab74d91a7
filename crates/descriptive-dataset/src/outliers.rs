//! Z-score style outlier removal
//!
//! An observation `v` survives when `|v - mean| <= factor * std_dev`, with the
//! mean and population standard deviation taken over the current values.
//! Smaller factors discard more points.

use crate::Dataset;
use descriptive_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Spread factor used when none is given
pub const DEFAULT_OUTLIER_FACTOR: f64 = 1.5;

/// Parameters for [`Dataset::remove_outliers_with`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlierFilter {
    /// Number of standard deviations from the mean that are retained
    pub factor: f64,
}

impl Default for OutlierFilter {
    fn default() -> Self {
        Self {
            factor: DEFAULT_OUTLIER_FACTOR,
        }
    }
}

impl OutlierFilter {
    /// Create a filter, rejecting negative or non-finite factors
    pub fn new(factor: f64) -> Result<Self> {
        let filter = Self { factor };
        filter.validate()?;
        Ok(filter)
    }

    /// Replace the factor
    pub fn with_factor(mut self, factor: f64) -> Result<Self> {
        self.factor = factor;
        self.validate()?;
        Ok(self)
    }

    /// Check the parameters, e.g. after deserializing
    pub fn validate(&self) -> Result<()> {
        if !self.factor.is_finite() || self.factor < 0.0 {
            return Err(Error::invalid_factor(self.factor));
        }
        Ok(())
    }
}

impl Dataset {
    /// Drop observations further than `factor` standard deviations from the
    /// mean, in place, and return how many were removed
    ///
    /// A no-op on an empty dataset. The factor is used as given; see
    /// [`Dataset::remove_outliers_with`] for a validated variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use descriptive_dataset::{Dataset, DEFAULT_OUTLIER_FACTOR};
    ///
    /// let mut data = Dataset::from_values(vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0, -100.0]);
    /// let removed = data.remove_outliers(DEFAULT_OUTLIER_FACTOR);
    /// assert_eq!(removed, 2);
    /// assert_eq!(data.values(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
    /// ```
    #[instrument(skip(self))]
    pub fn remove_outliers(&mut self, factor: f64) -> usize {
        let (Some(mean), Some(std_dev)) = (self.mean(), self.std_dev()) else {
            debug!("Empty dataset, nothing to filter");
            return 0;
        };

        let threshold = factor * std_dev;
        let before = self.values.len();
        self.values.retain(|&v| (v - mean).abs() <= threshold);
        let removed = before - self.values.len();

        debug!(
            "Removed {} of {} observations (mean={:.4}, threshold={:.4})",
            removed, before, mean, threshold
        );
        removed
    }

    /// Validate `filter` and apply it, see [`Dataset::remove_outliers`]
    pub fn remove_outliers_with(&mut self, filter: &OutlierFilter) -> Result<usize> {
        filter.validate()?;
        Ok(self.remove_outliers(filter.factor))
    }
}
