//! The in-memory bitmap
//!
//! Cells are stored row-major and addressed with 0-based `(column, row)`
//! indices. Translation from the 1-based command language happens in the
//! executor.

use crate::color::Color;
use thiserror::Error;

/// Smallest accepted coordinate or dimension
pub const MIN_PIXEL: usize = 1;
/// Largest accepted coordinate or dimension
pub const MAX_PIXEL: usize = 250;

/// Error type for grid construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid size {width}x{height} outside {min}..={max}", min = MIN_PIXEL, max = MAX_PIXEL)]
    InvalidDimensions { width: usize, height: usize },
}

/// A `width x height` array of color tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Color>,
}

impl Grid {
    /// Create a grid with every cell set to the default color.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let in_range = |v: usize| (MIN_PIXEL..=MAX_PIXEL).contains(&v);
        if !in_range(width) || !in_range(height) {
            return Err(GridError::InvalidDimensions { width, height });
        }

        Ok(Self { width, height, cells: vec![Color::default(); width * height] })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the color at `(col, row)`, or `None` outside the grid.
    pub fn get(&self, col: usize, row: usize) -> Option<&Color> {
        self.index(col, row).map(|i| &self.cells[i])
    }

    /// Set the color at `(col, row)`. Returns false if the cell is outside the grid.
    pub fn set(&mut self, col: usize, row: usize, color: Color) -> bool {
        match self.index(col, row) {
            Some(i) => {
                self.cells[i] = color;
                true
            }
            None => false,
        }
    }

    /// Reset every cell to the default color, keeping dimensions.
    pub fn clear(&mut self) {
        let blank = Color::default();
        for cell in &mut self.cells {
            cell.clone_from(&blank);
        }
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.cells.chunks(self.width)
    }

    fn index(&self, col: usize, row: usize) -> Option<usize> {
        if col < self.width && row < self.height {
            Some(row * self.width + col)
        } else {
            None
        }
    }
}
