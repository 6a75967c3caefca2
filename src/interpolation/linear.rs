//! Linear interpolation along the vertical.
//!
//! Samples are sorted by depth and the target is interpolated between the two
//! samples surrounding it. The result is exact at sample depths.

use super::common::{linear_weight, sorted_samples};
use super::{Extrapolation, VerticalInterpolator};
use crate::error::Result;

/// Piecewise-linear vertical interpolator
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearInterpolator {
    extrapolation: Extrapolation,
}

impl LinearInterpolator {
    pub fn new(extrapolation: Extrapolation) -> Self {
        Self { extrapolation }
    }
}

impl VerticalInterpolator for LinearInterpolator {
    fn interpolate(&self, depths: &[f64], values: &[f64], target: f64) -> Result<f64> {
        let samples = sorted_samples(depths, values)?;

        if target.is_nan() {
            return Ok(f64::NAN);
        }
        let (first, last) = match (samples.first(), samples.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return Ok(f64::NAN),
        };

        if target < first.0 || target > last.0 {
            return Ok(match self.extrapolation {
                Extrapolation::Clamp if target < first.0 => first.1,
                Extrapolation::Clamp => last.1,
                Extrapolation::Missing => f64::NAN,
            });
        }

        for window in samples.windows(2) {
            let (d0, v0) = window[0];
            let (d1, v1) = window[1];

            if target == d0 {
                return Ok(v0);
            }
            if target < d1 {
                let (w0, w1) = linear_weight((target - d0) / (d1 - d0));
                return Ok(w0 * v0 + w1 * v1);
            }
        }

        // target equals the deepest sample
        Ok(last.1)
    }

    fn name(&self) -> &str {
        "linear"
    }
}
