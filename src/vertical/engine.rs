//! Vertical resolution of raw layer slices into a horizontal grid.
//!
//! Given the per-cell brackets, a buffer holding one raw slice per candidate
//! layer and the depth table, every cell either copies its single matching
//! layer or interpolates across its bracket at the target depth.

use ndarray::{Array3, Array4};

use super::bracket::nearest_layer_position;
use super::{DepthLookup, LevelIndex, VerticalAxis};
use crate::error::{HaloclineError, Result};
use crate::grid::HorizontalGrid;
use crate::interpolation::VerticalInterpolator;

/// Result of resolving one vertical slice
#[derive(Debug, Clone)]
pub struct ResolvedSlice {
    /// Values shaped `(components, y_size, x_size)`, NaN where undefined
    pub values: Array3<f64>,
    /// Cells copied straight from a single layer
    pub direct_cells: usize,
    /// Cells interpolated across a bracket
    pub interpolated_cells: usize,
}

/// Resolve every cell of `layers` at `target_depth`.
///
/// `layers` is shaped `(indexes_z.len(), components, y_size, x_size)` and is
/// indexed by position in [`LevelIndex::indexes_z`].
pub fn resolve_vertical_slice(
    level_index: &LevelIndex,
    layers: &Array4<f64>,
    axis: &VerticalAxis,
    lookup: DepthLookup,
    target_depth: f64,
    interpolator: &dyn VerticalInterpolator,
) -> Result<ResolvedSlice> {
    let (n_candidates, components, ny, nx) = layers.dim();
    let indexes_z = level_index.indexes_z();

    if n_candidates != indexes_z.len() || level_index.shape() != (ny, nx) {
        return Err(HaloclineError::DataNotFound {
            message: format!(
                "Layer buffer {:?} does not match {} candidate layers over a {:?} grid",
                layers.shape(),
                indexes_z.len(),
                level_index.shape()
            ),
        });
    }
    axis.check_lookup(lookup)?;
    axis.validate(&HorizontalGrid::new(nx, ny))?;
    let per_cell = axis.resolves_per_cell(lookup);
    let n_layers = axis.n_layers();

    let mut values = Array3::from_elem((components, ny, nx), f64::NAN);
    let mut direct_cells = 0;
    let mut interpolated_cells = 0;

    let mut positions = Vec::new();
    let mut depths = Vec::new();
    let mut samples = Vec::new();

    for ((y, x), bracket) in level_index.brackets().indexed_iter() {
        positions.clear();
        for &layer in bracket {
            if layer >= n_layers {
                return Err(HaloclineError::InvalidBracket {
                    y,
                    x,
                    message: format!(
                        "layer {} is outside the depth table ({} layers)",
                        layer, n_layers
                    ),
                });
            }
            let position = nearest_layer_position(indexes_z, layer).ok_or_else(|| {
                HaloclineError::InvalidBracket {
                    y,
                    x,
                    message: "no candidate layer to resolve against".to_string(),
                }
            })?;
            positions.push(position);
        }

        match positions.as_slice() {
            [] => {
                return Err(HaloclineError::InvalidBracket {
                    y,
                    x,
                    message: "bracket has no candidate layer".to_string(),
                })
            }
            [position] => {
                for c in 0..components {
                    values[[c, y, x]] = layers[[*position, c, y, x]];
                }
                direct_cells += 1;
            }
            _ => {
                depths.clear();
                depths.extend(
                    positions
                        .iter()
                        .map(|&p| axis.layer_depth(indexes_z[p], y, x, per_cell)),
                );
                for c in 0..components {
                    samples.clear();
                    samples.extend(positions.iter().map(|&p| layers[[p, c, y, x]]));
                    values[[c, y, x]] = interpolator.interpolate(&depths, &samples, target_depth)?;
                }
                interpolated_cells += 1;
            }
        }
    }

    Ok(ResolvedSlice {
        values,
        direct_cells,
        interpolated_cells,
    })
}
