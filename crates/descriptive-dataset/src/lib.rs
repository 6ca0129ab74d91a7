//! Descriptive statistics over a mutable, in-memory dataset
//!
//! The [`Dataset`] owns an ordered sequence of `f64` observations and answers
//! statistical queries about it:
//!
//! - **Central tendency**: mean, median, mode
//! - **Dispersion**: population variance, standard deviation, range,
//!   coefficient of variation
//! - **Order statistics**: nearest-rank percentile, min, max
//! - **Transforms**: min-max normalization, z-score outlier removal
//! - **Association**: Pearson correlation with another series
//!
//! # Undefined results
//!
//! | Query on empty data | Result |
//! |---------------------|--------|
//! | `mean`, `median`, `variance`, `std_dev`, `min`, `max`, `percentile` | `None` |
//! | `mode`, `normalize` | empty `Vec` |
//! | `sum`, `range` | `0.0` |
//! | `product` | `1.0` |
//! | `coefficient_of_variation` | `NaN` |
//!
//! `correlation` is also `None` for mismatched lengths and constant series.
//! Errors ([`descriptive_core::Error`]) are only raised for malformed dynamic
//! input and invalid configuration.
//!
//! # Example
//!
//! ```rust
//! use descriptive_dataset::Dataset;
//!
//! let mut data = Dataset::from_values(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
//! assert_eq!(data.mean(), Some(3.0));
//! assert_eq!(data.percentile(25.0), Some(2.0));
//!
//! data.append([100.0, -100.0]);
//! data.remove_outliers(1.5);
//! assert_eq!(data.values(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
//!
//! data.clear();
//! assert_eq!(data.mean(), None);
//! assert!(data.coefficient_of_variation().is_nan());
//! ```

mod aggregate;
mod central;
mod correlation;
mod dataset;
mod dispersion;
mod extremes;
mod outliers;
mod summary;

pub use aggregate::nearest_rank;
pub use correlation::pearson_correlation;
pub use dataset::Dataset;
pub use outliers::{OutlierFilter, DEFAULT_OUTLIER_FACTOR};
pub use summary::Summary;

// Re-export the shared error type
pub use descriptive_core::{Error, Result};
