//! Pearson linear correlation

use crate::Dataset;
use descriptive_core::utils::mean;

/// Calculate the Pearson correlation coefficient
///
/// Returns `None` when the lengths differ, when either side is empty, and
/// when `sqrt(Sxx) * sqrt(Syy)` is exactly zero (a constant series). It never
/// returns `NaN` or an infinity for those cases.
///
/// The square roots are taken separately so `Sxx * Syy` cannot overflow for
/// large but finite observations.
///
/// # Examples
///
/// ```rust
/// use descriptive_dataset::pearson_correlation;
///
/// let x = [1.0, 2.0, 3.0];
/// let r = pearson_correlation(&x, &[3.0, 2.0, 1.0]).unwrap();
/// assert!((r + 1.0).abs() < 1e-12);
///
/// assert_eq!(pearson_correlation(&x, &[1.0, 2.0]), None);
/// assert_eq!(pearson_correlation(&x, &[7.0, 7.0, 7.0]), None);
/// ```
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() {
        return None;
    }

    let mean_x = mean(x)?;
    let mean_y = mean(y)?;

    let mut numerator = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;

    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;

        numerator += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    let denominator = sum_sq_x.sqrt() * sum_sq_y.sqrt();
    if denominator == 0.0 {
        return None;
    }

    Some(numerator / denominator)
}

impl Dataset {
    /// Pearson correlation between the observations and `other`, paired by position
    pub fn correlation(&self, other: &[f64]) -> Option<f64> {
        pearson_correlation(&self.values, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample() -> Dataset {
        Dataset::from_values(vec![1.0, 2.0, 3.0, 4.0, 5.0])
    }

    #[test]
    fn test_correlation_perfect_positive() {
        let r = sample().correlation(&[2.0, 4.0, 6.0, 8.0, 10.0]).unwrap();
        assert_abs_diff_eq!(r, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_correlation_perfect_negative() {
        let r = sample().correlation(&[10.0, 8.0, 6.0, 4.0, 2.0]).unwrap();
        assert_abs_diff_eq!(r, -1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_correlation_uncorrelated() {
        // symmetric around the mean of x
        let r = sample().correlation(&[1.0, 0.0, -1.0, 0.0, 1.0]).unwrap();
        assert_abs_diff_eq!(r, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_correlation_large_magnitudes() {
        // Sxx * Syy alone would be ~1e322 and overflow to infinity
        let data = Dataset::from_values(vec![1e80, -1e80, 3e80]);
        let doubled: Vec<f64> = data.iter().map(|v| v * 2.0).collect();
        let r = data.correlation(&doubled).unwrap();
        assert_abs_diff_eq!(r, 1.0, epsilon = 1e-10);

        let negated: Vec<f64> = data.iter().map(|v| -v).collect();
        let r = data.correlation(&negated).unwrap();
        assert_abs_diff_eq!(r, -1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_correlation_length_mismatch() {
        assert_eq!(sample().correlation(&[1.0, 2.0]), None);
    }

    #[test]
    fn test_correlation_empty() {
        assert_eq!(Dataset::new().correlation(&[]), None);
        assert_eq!(Dataset::new().correlation(&[1.0]), None);
    }

    #[test]
    fn test_correlation_zero_variance() {
        let constant = Dataset::from_values(vec![1.0; 5]);
        assert_eq!(constant.correlation(&[1.0; 5]), None);
        // one constant side is enough
        assert_eq!(sample().correlation(&[5.0; 5]), None);
    }

    #[test]
    fn test_correlation_bounds() {
        let data = Dataset::from_values(vec![2.0, 9.0, 4.0, 7.0, 1.0, 6.0]);
        let r = data.correlation(&[3.0, 1.0, 8.0, 2.0, 5.0, 4.0]).unwrap();
        assert!((-1.0..=1.0).contains(&r));
    }
}
