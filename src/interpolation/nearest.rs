//! Nearest-sample selection along the vertical.
//!
//! This method picks the value of the sample whose depth is closest to the
//! target. Ties go to the first sample in input order.

use super::common::{nearest_position, sorted_samples};
use super::VerticalInterpolator;
use crate::error::Result;

/// Nearest-depth vertical interpolator
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestInterpolator;

impl VerticalInterpolator for NearestInterpolator {
    fn interpolate(&self, depths: &[f64], values: &[f64], target: f64) -> Result<f64> {
        // validates lengths
        sorted_samples(depths, values)?;

        Ok(nearest_position(depths, target)
            .map(|i| values[i])
            .unwrap_or(f64::NAN))
    }

    fn name(&self) -> &str {
        "nearest"
    }
}
