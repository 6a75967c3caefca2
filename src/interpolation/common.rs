//! Common utilities for interpolation algorithms.
//!
//! This module provides shared functionality used by the vertical interpolators.

use crate::error::{HaloclineError, Result};

/// Pair up depths and values, drop samples without a depth and sort by depth.
///
/// The sort is stable, so samples sharing a depth keep their input order.
pub fn sorted_samples(depths: &[f64], values: &[f64]) -> Result<Vec<(f64, f64)>> {
    if depths.len() != values.len() {
        return Err(HaloclineError::Interpolation {
            message: format!(
                "Sample mismatch: {} depths but {} values",
                depths.len(),
                values.len()
            ),
        });
    }

    let mut samples: Vec<(f64, f64)> = depths
        .iter()
        .zip(values)
        .filter(|(depth, _)| !depth.is_nan())
        .map(|(&depth, &value)| (depth, value))
        .collect();
    samples.sort_by(|a, b| a.0.total_cmp(&b.0));

    Ok(samples)
}

/// Get the weight for linear interpolation
pub fn linear_weight(fraction: f64) -> (f64, f64) {
    (1.0 - fraction, fraction)
}

/// Position of the first element of `candidates` closest to `target`
pub fn nearest_position(candidates: &[f64], target: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (i, &candidate) in candidates.iter().enumerate() {
        let diff = (candidate - target).abs();
        if diff.is_nan() {
            continue;
        }
        match best {
            Some((_, min_diff)) if diff >= min_diff => {}
            _ => best = Some((i, diff)),
        }
    }

    best.map(|(i, _)| i)
}
