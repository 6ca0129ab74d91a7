//! Utility functions for working with data slices

use std::cmp::Ordering;

/// Total order used for sorting observations: numeric ascending, NaN last
#[inline]
pub fn nan_last_cmp(a: &f64, b: &f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater, // NaN goes after non-NaN
        (false, true) => Ordering::Less,    // non-NaN goes before NaN
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end. The sort is stable.
///
/// # Examples
///
/// ```rust
/// use descriptive_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(nan_last_cmp);
    sorted
}

/// Smallest value, `None` for an empty slice
///
/// A NaN anywhere in the slice makes the result NaN, so the extremes agree
/// with [`sorted`], which places NaN last.
///
/// # Examples
///
/// ```rust
/// use descriptive_core::utils::min;
///
/// assert_eq!(min(&[3.0, -1.0, 2.0]), Some(-1.0));
/// assert!(min(&[3.0, f64::NAN]).unwrap().is_nan());
/// ```
pub fn min(data: &[f64]) -> Option<f64> {
    data.iter().copied().reduce(|acc, v| nan_or(acc, v, f64::min))
}

/// Largest value, `None` for an empty slice; NaN propagates as in [`min`]
pub fn max(data: &[f64]) -> Option<f64> {
    data.iter().copied().reduce(|acc, v| nan_or(acc, v, f64::max))
}

#[inline]
fn nan_or(a: f64, b: f64, pick: fn(f64, f64) -> f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        pick(a, b)
    }
}

/// Arithmetic sum; `0.0` for an empty slice
pub fn sum(data: &[f64]) -> f64 {
    data.iter().sum()
}

/// Arithmetic product; `1.0` for an empty slice
pub fn product(data: &[f64]) -> f64 {
    data.iter().product()
}

/// Calculate the mean of a slice
///
/// Returns `None` for empty slices.
///
/// # Examples
///
/// ```rust
/// use descriptive_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
/// assert_eq!(mean(&[]), None);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(sum(data) / data.len() as f64)
}

/// Calculate the population variance (divides by `n`, not `n - 1`)
///
/// Returns `None` for empty slices.
///
/// # Examples
///
/// ```rust
/// use descriptive_core::utils::population_variance;
///
/// assert_eq!(population_variance(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(2.0));
/// ```
pub fn population_variance(data: &[f64]) -> Option<f64> {
    let m = mean(data)?;
    let squared: f64 = data
        .iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum();
    Some(squared / data.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sorted_basic() {
        let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_sorted_empty() {
        let data: Vec<f64> = vec![];
        assert_eq!(sorted(&data), Vec::<f64>::new());
    }

    #[test]
    fn test_sorted_duplicates_and_negatives() {
        let data = vec![3.0, -1.0, 3.0, 0.0, -1.0];
        assert_eq!(sorted(&data), vec![-1.0, -1.0, 0.0, 3.0, 3.0]);
    }

    #[test]
    fn test_sorted_with_nan() {
        let data = vec![3.0, f64::NAN, 1.0, 2.0];
        let sorted_data = sorted(&data);

        assert_eq!(&sorted_data[..3], &[1.0, 2.0, 3.0]);
        assert!(sorted_data[3].is_nan());
    }

    #[test]
    fn test_sorted_with_infinity() {
        let data = vec![3.0, f64::INFINITY, 1.0, f64::NEG_INFINITY, 2.0];
        assert_eq!(
            sorted(&data),
            vec![f64::NEG_INFINITY, 1.0, 2.0, 3.0, f64::INFINITY]
        );
    }

    #[test]
    fn test_sorted_preserves_original() {
        let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        let original = data.clone();
        let _ = sorted(&data);
        assert_eq!(data, original);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min(&[3.0, -2.0, 9.0]), Some(-2.0));
        assert_eq!(max(&[3.0, -2.0, 9.0]), Some(9.0));
        assert_eq!(min(&[]), None);
        assert_eq!(max(&[]), None);
    }

    #[test]
    fn test_min_max_propagate_nan() {
        for data in [[f64::NAN, 1.0, 2.0], [1.0, f64::NAN, 2.0], [1.0, 2.0, f64::NAN]] {
            assert!(min(&data).unwrap().is_nan());
            assert!(max(&data).unwrap().is_nan());
        }
    }

    #[test]
    fn test_sum_and_product_identities() {
        assert_eq!(sum(&[]), 0.0);
        assert_eq!(product(&[]), 1.0);
        assert_eq!(sum(&[1.0, 2.0, 3.0, 4.0, 5.0]), 15.0);
        assert_eq!(product(&[1.0, 2.0, 3.0, 4.0, 5.0]), 120.0);
    }

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(3.0));
        assert_eq!(mean(&[-10.0, 10.0]), Some(0.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_mean_precision() {
        let m = mean(&[1.1, 2.2, 3.3, 4.4, 5.5]).unwrap();
        assert_relative_eq!(m, 3.3, epsilon = 1e-10);
    }

    #[test]
    fn test_population_variance() {
        assert_eq!(population_variance(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(2.0));
        assert_eq!(population_variance(&[42.0]), Some(0.0));
        assert_eq!(population_variance(&[5.0, 5.0, 5.0]), Some(0.0));
        assert_eq!(population_variance(&[]), None);
    }

    #[test]
    fn test_population_variance_numerical_stability() {
        let data = [1e10, 1e10 + 1.0, 1e10 + 2.0];
        let var = population_variance(&data).unwrap();
        assert_relative_eq!(var, 2.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_nan_propagates() {
        let data = [1.0, 2.0, f64::NAN, 4.0];
        assert!(mean(&data).unwrap().is_nan());
        assert!(population_variance(&data).unwrap().is_nan());
    }
}
