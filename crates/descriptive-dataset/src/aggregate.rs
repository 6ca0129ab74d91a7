//! Nearest-rank percentile, sum and product

use crate::Dataset;
use descriptive_core::utils;

/// Nearest-rank selection from ascending data
///
/// The index is `round(p / 100 * (n - 1))` clamped into `[0, n - 1]`; the
/// result is always an element of `sorted_values`, never an interpolation.
/// Returns `None` for empty input and for `p` outside `[0, 100]` (NaN
/// included). NaN sorts last, so a trailing NaN means the data holds one and
/// the result is NaN, matching [`Dataset::min`] and [`Dataset::max`].
///
/// # Examples
///
/// ```rust
/// use descriptive_dataset::nearest_rank;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(nearest_rank(&values, 25.0), Some(2.0));
/// assert_eq!(nearest_rank(&values, 100.0), Some(5.0));
/// assert_eq!(nearest_rank(&values, 101.0), None);
/// ```
#[must_use]
pub fn nearest_rank(sorted_values: &[f64], p: f64) -> Option<f64> {
    if !(0.0..=100.0).contains(&p) {
        return None;
    }
    let last = sorted_values.len().checked_sub(1)?;
    if sorted_values[last].is_nan() {
        return Some(f64::NAN);
    }
    let rank = (p / 100.0 * last as f64).round();
    let idx = (rank.max(0.0) as usize).min(last);
    sorted_values.get(idx).copied()
}

impl Dataset {
    /// Nearest-rank percentile of the observations
    ///
    /// Returns `None` when `p` lies outside `[0, 100]` (or is NaN) and when
    /// the dataset is empty. `p = 0` yields the minimum, `p = 100` the maximum;
    /// NaN observations make the result NaN, as they do for the extremes.
    pub fn percentile(&self, p: f64) -> Option<f64> {
        nearest_rank(&self.sorted(), p)
    }

    /// Sum of the observations, `0.0` when empty
    pub fn sum(&self) -> f64 {
        utils::sum(&self.values)
    }

    /// Product of the observations, `1.0` when empty
    pub fn product(&self) -> f64 {
        utils::product(&self.values)
    }
}
