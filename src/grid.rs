//! Horizontal grid dimensions.

use serde::{Deserialize, Serialize};

/// Size of the structured horizontal grid shared by every result array.
///
/// Results are laid out `[y, x]`, so the array shape is `(y_size, x_size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HorizontalGrid {
    x_size: usize,
    y_size: usize,
}

impl HorizontalGrid {
    pub fn new(x_size: usize, y_size: usize) -> Self {
        Self { x_size, y_size }
    }

    pub fn get_x_size(&self) -> usize {
        self.x_size
    }

    pub fn get_y_size(&self) -> usize {
        self.y_size
    }

    /// ndarray shape of a single horizontal slice
    pub fn shape(&self) -> (usize, usize) {
        (self.y_size, self.x_size)
    }

    pub fn cell_count(&self) -> usize {
        self.x_size * self.y_size
    }
}
