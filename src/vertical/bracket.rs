//! Per-cell vertical brackets.
//!
//! A bracket lists the layers around the requested depth at one cell. The
//! [`LevelIndex`] gathers every cell's bracket together with the sorted set of
//! layers any bracket refers to; raw layer buffers are indexed by position in
//! that set.

use ndarray::Array2;

use crate::error::{HaloclineError, Result};
use crate::grid::HorizontalGrid;
use crate::interpolation::common::nearest_position;

/// Per-cell brackets plus the candidate layer list they draw from
#[derive(Debug, Clone, PartialEq)]
pub struct LevelIndex {
    brackets: Array2<Vec<usize>>,
    indexes_z: Vec<usize>,
}

impl LevelIndex {
    /// Build from per-cell brackets, indexed `[y, x]`.
    ///
    /// Fails with [`HaloclineError::InvalidBracket`] when any cell has no candidate.
    pub fn new(brackets: Array2<Vec<usize>>) -> Result<Self> {
        let mut indexes_z = Vec::new();

        for ((y, x), bracket) in brackets.indexed_iter() {
            if bracket.is_empty() {
                return Err(HaloclineError::InvalidBracket {
                    y,
                    x,
                    message: "bracket has no candidate layer".to_string(),
                });
            }
            indexes_z.extend_from_slice(bracket);
        }

        indexes_z.sort_unstable();
        indexes_z.dedup();

        Ok(Self {
            brackets,
            indexes_z,
        })
    }

    /// Same bracket for every cell of the grid
    pub fn uniform(grid: &HorizontalGrid, bracket: Vec<usize>) -> Result<Self> {
        Self::new(Array2::from_elem(grid.shape(), bracket))
    }

    /// Sorted, deduplicated layers referenced by any bracket
    pub fn indexes_z(&self) -> &[usize] {
        &self.indexes_z
    }

    pub fn brackets(&self) -> &Array2<Vec<usize>> {
        &self.brackets
    }

    pub fn bracket(&self, y: usize, x: usize) -> &[usize] {
        &self.brackets[[y, x]]
    }

    /// Shape `(y_size, x_size)` covered by the brackets
    pub fn shape(&self) -> (usize, usize) {
        self.brackets.dim()
    }
}

/// Position in `indexes_z` of the layer closest to `layer`.
///
/// Differences are absolute; on a tie the lowest position wins.
pub fn nearest_layer_position(indexes_z: &[usize], layer: usize) -> Option<usize> {
    indexes_z
        .iter()
        .enumerate()
        .min_by_key(|(_, &candidate)| candidate.abs_diff(layer))
        .map(|(position, _)| position)
}

/// Bracket of a target depth within one column of layer depths
pub(crate) fn bracket_column(column: &[f64], target: f64, tolerance: f64) -> Vec<usize> {
    if let Some(layer) = column
        .iter()
        .position(|&depth| (depth - target).abs() <= tolerance)
    {
        return vec![layer];
    }

    for (layer, pair) in column.windows(2).enumerate() {
        let (upper, lower) = (pair[0].min(pair[1]), pair[0].max(pair[1]));
        if upper < target && target < lower {
            return vec![layer, layer + 1];
        }
    }

    // Outside the column: nearest layer, or the surface layer of a dry column
    vec![nearest_position(column, target).unwrap_or(0)]
}
