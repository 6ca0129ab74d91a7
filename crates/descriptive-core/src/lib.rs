//! Core types for descriptive statistical analysis
//!
//! This crate holds the pieces shared across the workspace:
//!
//! - [`error`]: the unified [`Error`] type and [`Result`] alias
//! - [`utils`]: slice helpers (sorting, sums, moments) that the dataset
//!   statistics are built from
//!
//! # Example
//!
//! ```rust
//! use descriptive_core::utils::{mean, population_variance, sorted};
//!
//! let data = [5.0, 1.0, 3.0, 2.0, 4.0];
//! assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
//! assert_eq!(mean(&data), Some(3.0));
//! assert_eq!(population_variance(&data), Some(2.0));
//! ```

pub mod error;
pub mod utils;

// Re-export core types
pub use error::{Error, Result};
