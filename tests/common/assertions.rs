//! Assertion utilities for testing.
//!
//! This module provides helper functions for comparing result grids, where
//! NaN marks missing cells and must compare equal to NaN.

#![allow(dead_code)]

use ndarray::Array2;

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two values are approximately equal, treating NaN as equal to NaN.
///
/// # Panics
///
/// Panics if exactly one value is NaN or the absolute difference exceeds `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    if actual.is_nan() || expected.is_nan() {
        assert!(
            actual.is_nan() && expected.is_nan(),
            "Missing value mismatch: actual = {}, expected = {}",
            actual,
            expected
        );
        return;
    }

    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that two grids have the same shape and approximately equal cells.
///
/// # Panics
///
/// Panics on a shape mismatch or on the first differing cell.
pub fn assert_grid_approx_eq(actual: &Array2<f64>, expected: &Array2<f64>, epsilon: Option<f64>) {
    assert_eq!(
        actual.dim(),
        expected.dim(),
        "Grids have different shapes: actual = {:?}, expected = {:?}",
        actual.dim(),
        expected.dim()
    );

    for ((y, x), &a) in actual.indexed_iter() {
        let e = expected[[y, x]];
        let both_missing = a.is_nan() && e.is_nan();
        let eps = epsilon.unwrap_or(DEFAULT_EPSILON);

        assert!(
            both_missing || (a - e).abs() <= eps,
            "Grids differ at (y={}, x={}): actual = {}, expected = {}",
            y,
            x,
            a,
            e
        );
    }
}

/// Assert that every cell of a grid is bitwise identical to the expected grid.
pub fn assert_grid_identical(actual: &Array2<f64>, expected: &Array2<f64>) {
    assert_eq!(actual.dim(), expected.dim());
    for ((y, x), &a) in actual.indexed_iter() {
        let e = expected[[y, x]];
        assert_eq!(
            a.to_bits(),
            e.to_bits(),
            "Grids differ at (y={}, x={}): actual = {}, expected = {}",
            y,
            x,
            a,
            e
        );
    }
}
