//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;
use descriptive_dataset::Dataset;

pub const EPSILON: f64 = 1e-10;

/// The five-point fixture most scenarios start from
pub fn sample() -> Dataset {
    Dataset::from_values(vec![1.0, 2.0, 3.0, 4.0, 5.0])
}

/// Dataset sizes that exercise odd/even and single-element paths
pub fn edge_case_lengths() -> Vec<usize> {
    vec![
        0,   // Empty
        1,   // Single element
        2,   // Smallest even
        3,   // Smallest odd with a true middle
        4,
        5,
        16,  // Power of 2
        17,  // Power of 2 + 1
        100, // Round number
        127, // Prime
    ]
}

/// Assert two vectors are equal within tolerance
pub fn assert_vectors_equal(actual: &[f64], expected: &[f64], context: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch for {}",
        context
    );

    for (&a, &e) in actual.iter().zip(expected.iter()) {
        assert_relative_eq!(a, e, epsilon = EPSILON);
    }
}

/// Generate test data with a deterministic, unsorted pattern
pub fn generate_test_data(len: usize) -> Vec<f64> {
    (0..len).map(|i| ((i * 7 + 3) % 11) as f64 + 0.1).collect()
}
