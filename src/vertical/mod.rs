//! Vertical dimension of a coverage.
//!
//! The vertical axis knows the depth of every layer, either once per layer
//! (fixed z-levels) or once per layer and horizontal cell (terrain-following
//! sigma levels). It turns a requested depth into per-cell brackets of
//! candidate layers, and the engine turns those brackets and the raw layer
//! slices into a horizontal result grid.

pub mod bracket;
pub mod engine;

use ndarray::{Array1, Array3};

use crate::error::{HaloclineError, Result};
use crate::grid::HorizontalGrid;

pub use bracket::{nearest_layer_position, LevelIndex};

/// A requested depth: a vertical layer index or a physical depth.
///
/// Unsigned integers convert to [`DepthSelector::Index`], floating-point
/// inputs to [`DepthSelector::Depth`], so `3usize` is the fourth layer and
/// `3.0` is a depth of three metres. An unsuffixed integer literal is an
/// `i32` and does not convert; write `3usize` or `DepthSelector::Index(3)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DepthSelector {
    Index(usize),
    Depth(f64),
}

impl DepthSelector {
    /// Target handed to vertical interpolation
    pub fn target_depth(&self) -> f64 {
        match *self {
            DepthSelector::Index(index) => index as f64,
            DepthSelector::Depth(depth) => depth,
        }
    }
}

impl From<usize> for DepthSelector {
    fn from(index: usize) -> Self {
        DepthSelector::Index(index)
    }
}

impl From<u32> for DepthSelector {
    fn from(index: u32) -> Self {
        DepthSelector::Index(index as usize)
    }
}

impl From<f64> for DepthSelector {
    fn from(depth: f64) -> Self {
        DepthSelector::Depth(depth)
    }
}

impl From<f32> for DepthSelector {
    fn from(depth: f32) -> Self {
        DepthSelector::Depth(depth as f64)
    }
}

/// Depth table of the vertical layers
#[derive(Debug, Clone, PartialEq)]
pub enum LevelField {
    /// One depth per layer, shape `(n_layers,)`
    Uniform(Array1<f64>),
    /// One depth per layer and cell, shape `(n_layers, y_size, x_size)`
    Varying(Array3<f64>),
}

impl LevelField {
    pub fn n_layers(&self) -> usize {
        match self {
            LevelField::Uniform(levels) => levels.len(),
            LevelField::Varying(levels) => levels.dim().0,
        }
    }
}

/// How candidate depths are looked up during interpolation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthLookup {
    /// Always read the depth of the layer at the cell itself
    PerCell,
    /// Per cell under sigma coordinates, one depth per layer otherwise
    CoordinateSystem,
}

/// Vertical axis: layer depths plus the coordinate system classification
#[derive(Debug, Clone)]
pub struct VerticalAxis {
    levels: LevelField,
    sigma: bool,
    depth_tolerance: f64,
}

impl VerticalAxis {
    /// Fixed z-levels shared by every cell
    pub fn z_levels(levels: Array1<f64>) -> Self {
        Self::new(LevelField::Uniform(levels), false)
    }

    /// Terrain-following levels with one depth per layer and cell
    pub fn sigma(levels: Array3<f64>) -> Self {
        Self::new(LevelField::Varying(levels), true)
    }

    pub fn new(levels: LevelField, sigma: bool) -> Self {
        Self {
            levels,
            sigma,
            depth_tolerance: 1e-6,
        }
    }

    /// Distance under which a requested depth counts as hitting a layer
    pub fn with_depth_tolerance(mut self, tolerance: f64) -> Self {
        self.depth_tolerance = tolerance;
        self
    }

    pub fn is_sigma_coordinate(&self) -> bool {
        self.sigma
    }

    pub fn levels(&self) -> &LevelField {
        &self.levels
    }

    pub fn n_layers(&self) -> usize {
        self.levels.n_layers()
    }

    /// Check that a per-cell depth table covers the horizontal grid
    pub fn validate(&self, grid: &HorizontalGrid) -> Result<()> {
        if let LevelField::Varying(levels) = &self.levels {
            let (_, ny, nx) = levels.dim();
            if (ny, nx) != grid.shape() {
                return Err(HaloclineError::DepthTable {
                    message: format!(
                        "Depth table covers {}x{} cells but the grid is {}x{}",
                        ny,
                        nx,
                        grid.get_y_size(),
                        grid.get_x_size()
                    ),
                });
            }
        }
        Ok(())
    }

    /// Check that the table can serve `lookup` for this coordinate system
    pub fn check_lookup(&self, lookup: DepthLookup) -> Result<()> {
        if self.resolves_per_cell(lookup) {
            return Ok(());
        }
        match self.levels {
            LevelField::Uniform(_) => Ok(()),
            LevelField::Varying(_) => Err(HaloclineError::DepthTable {
                message: "A per-cell depth table has no single depth per layer outside sigma coordinates"
                    .to_string(),
            }),
        }
    }

    pub(crate) fn resolves_per_cell(&self, lookup: DepthLookup) -> bool {
        match lookup {
            DepthLookup::PerCell => true,
            DepthLookup::CoordinateSystem => self.sigma,
        }
    }

    /// Depth of `layer` at cell (y, x)
    ///
    /// A uniform table gives every cell the layer's single depth. With
    /// `per_cell` false a varying table has no answer; [`Self::check_lookup`]
    /// rejects that combination before a query starts.
    pub(crate) fn layer_depth(&self, layer: usize, y: usize, x: usize, per_cell: bool) -> f64 {
        match &self.levels {
            LevelField::Uniform(levels) => levels[layer],
            LevelField::Varying(levels) if per_cell => levels[[layer, y, x]],
            LevelField::Varying(_) => f64::NAN,
        }
    }

    /// Resolve a depth selector into per-cell brackets and the candidate layer list
    pub fn find_level_index(
        &self,
        depth: DepthSelector,
        grid: &HorizontalGrid,
    ) -> Result<LevelIndex> {
        self.validate(grid)?;

        let n_layers = self.n_layers();
        if n_layers == 0 {
            return Err(HaloclineError::LevelLookup {
                message: "Vertical axis has no layers".to_string(),
            });
        }

        match depth {
            DepthSelector::Index(index) if index < n_layers => {
                LevelIndex::uniform(grid, vec![index])
            }
            DepthSelector::Index(index) => Err(HaloclineError::LevelLookup {
                message: format!(
                    "Layer index {} is outside the axis (0 to {})",
                    index,
                    n_layers - 1
                ),
            }),
            DepthSelector::Depth(target) if !target.is_finite() => {
                Err(HaloclineError::LevelLookup {
                    message: format!("Requested depth {} is not a finite number", target),
                })
            }
            DepthSelector::Depth(target) => match &self.levels {
                LevelField::Uniform(levels) => {
                    let column = levels.to_vec();
                    let bracket = bracket::bracket_column(&column, target, self.depth_tolerance);
                    LevelIndex::uniform(grid, bracket)
                }
                LevelField::Varying(levels) => {
                    let brackets = ndarray::Array2::from_shape_fn(grid.shape(), |(y, x)| {
                        let column = levels.slice(ndarray::s![.., y, x]).to_vec();
                        bracket::bracket_column(&column, target, self.depth_tolerance)
                    });
                    LevelIndex::new(brackets)
                }
            },
        }
    }
}
