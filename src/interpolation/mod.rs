//! Vertical interpolation algorithms.
//!
//! An interpolator receives the depths and values sampled in one water column
//! (in any order) and estimates the value at one or more target depths.

pub mod common;
pub mod linear;
pub mod nearest;

use serde::{Deserialize, Serialize};

use crate::error::{HaloclineError, Result};

/// What to return for a target outside the sampled depth range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extrapolation {
    /// Use the value of the closest end sample
    #[default]
    Clamp,
    /// Return the missing sentinel (NaN)
    Missing,
}

/// Trait for vertical interpolation methods
pub trait VerticalInterpolator: Send + Sync {
    /// Interpolate the value at `target` from unsorted (depth, value) samples
    fn interpolate(&self, depths: &[f64], values: &[f64], target: f64) -> Result<f64>;

    /// Interpolate at several targets from the same samples
    fn interpolate_many(&self, depths: &[f64], values: &[f64], targets: &[f64]) -> Result<Vec<f64>> {
        targets
            .iter()
            .map(|&target| self.interpolate(depths, values, target))
            .collect()
    }

    /// Get the name of this interpolation method
    fn name(&self) -> &str;
}

/// Get an interpolator by name
pub fn get_interpolator(
    name: &str,
    extrapolation: Extrapolation,
) -> Result<Box<dyn VerticalInterpolator>> {
    match name.to_lowercase().as_str() {
        "linear" => Ok(Box::new(linear::LinearInterpolator::new(extrapolation))),
        "nearest" => Ok(Box::new(nearest::NearestInterpolator)),
        _ => Err(HaloclineError::InvalidParameter {
            param: "interpolation".to_string(),
            message: format!("Unknown interpolation method: {}", name),
        }),
    }
}
