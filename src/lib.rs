//! Descriptive statistics toolkit
//!
//! Facade over the workspace crates:
//!
//! - [`descriptive_core`]: shared [`Error`] type and slice utilities
//! - [`descriptive_dataset`]: the mutable [`Dataset`] and its statistics
//!
//! # Example
//!
//! ```rust
//! use descriptive_stats::{Dataset, OutlierFilter};
//!
//! let mut data = Dataset::from_values(vec![12.0, 12.0, 13.0, 12.0, 11.0, 13.0, 10.0, 10.0, 100.0]);
//! data.remove_outliers_with(&OutlierFilter::new(1.0)?)?;
//! assert_eq!(data.max(), Some(13.0));
//! assert_eq!(data.mode(), vec![12.0]);
//! # Ok::<(), descriptive_stats::Error>(())
//! ```

pub use descriptive_core::{error, utils, Error, Result};
pub use descriptive_dataset::{
    nearest_rank, pearson_correlation, Dataset, OutlierFilter, Summary, DEFAULT_OUTLIER_FACTOR,
};
