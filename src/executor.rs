//! Command execution against the bitmap
//!
//! The executor owns the grid. It starts with no grid and gets one from the
//! first successful `I`. Before that, every command except `S` is a silent
//! no-op and `S` reports [`Effect::NoBitmap`].
//!
//! Out-of-range geometry follows two rules:
//! - `L` drops a pixel outside the grid entirely.
//! - `V` and `H` clip each step of the stroke to the grid edge, as long as the
//!   fixed coordinate is inside the grid and at least one endpoint is too.
//!
//! Coordinates are 1-based. A zero coordinate never reaches here through the
//! validator, but a direct caller gets [`Effect::Skipped`] for one.

use crate::color::Color;
use crate::command::Command;
use crate::grid::Grid;
use crate::renderer::render;

/// Message shown by `S` before any `I`
pub const NO_BITMAP_MESSAGE: &str = "No bitmap created yet";

/// Observable result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The grid was created or modified
    Applied,
    /// The command was valid but changed nothing
    Skipped,
    /// `S` with a grid: the rendered text
    Rendered(String),
    /// `S` without a grid
    NoBitmap,
}

/// Applies validated commands in order.
#[derive(Debug, Default)]
pub struct Executor {
    grid: Option<Grid>,
}

impl Executor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current grid, if `I` has run.
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.grid.is_some()
    }

    pub fn execute(&mut self, command: &Command) -> Effect {
        if let Command::Init { height, width } = *command {
            return match Grid::new(width, height) {
                Ok(grid) => {
                    self.grid = Some(grid);
                    Effect::Applied
                }
                Err(_) => Effect::Skipped,
            };
        }

        let Some(grid) = self.grid.as_mut() else {
            return match command {
                Command::Show => Effect::NoBitmap,
                _ => Effect::Skipped,
            };
        };

        match command {
            Command::Init { .. } => Effect::Skipped,
            Command::Clear => {
                grid.clear();
                Effect::Applied
            }
            Command::Show => Effect::Rendered(render(grid)),
            Command::ColorPixel { x, y, color } => color_pixel(grid, *x, *y, color),
            Command::DrawVertical { x, y1, y2, color } => {
                draw_vertical(grid, *x, *y1, *y2, color)
            }
            Command::DrawHorizontal { y, x1, x2, color } => {
                draw_horizontal(grid, *y, *x1, *x2, color)
            }
        }
    }
}

fn applied(changed: bool) -> Effect {
    if changed {
        Effect::Applied
    } else {
        Effect::Skipped
    }
}

/// Convert a 1-based coordinate to a 0-based index, or `None` outside `1..=boundary`.
fn index(coordinate: usize, boundary: usize) -> Option<usize> {
    (1..=boundary).contains(&coordinate).then(|| coordinate - 1)
}

/// Clamp a 1-based coordinate to the boundary and convert to a 0-based index.
fn clip(coordinate: usize, boundary: usize) -> usize {
    coordinate.clamp(1, boundary) - 1
}

fn color_pixel(grid: &mut Grid, x: usize, y: usize, color: &Color) -> Effect {
    let (Some(col), Some(row)) = (index(x, grid.width()), index(y, grid.height())) else {
        return Effect::Skipped;
    };
    applied(grid.set(col, row, color.clone()))
}

fn draw_vertical(grid: &mut Grid, x: usize, y1: usize, y2: usize, color: &Color) -> Effect {
    let height = grid.height();
    let Some(col) = index(x, grid.width()) else {
        return Effect::Skipped;
    };
    if y1 == 0 || y2 == 0 || (y1 > height && y2 > height) {
        return Effect::Skipped;
    }

    for y in y1.min(y2)..=y1.max(y2) {
        grid.set(col, clip(y, height), color.clone());
    }
    Effect::Applied
}

fn draw_horizontal(grid: &mut Grid, y: usize, x1: usize, x2: usize, color: &Color) -> Effect {
    let width = grid.width();
    let Some(row) = index(y, grid.height()) else {
        return Effect::Skipped;
    };
    if x1 == 0 || x2 == 0 || (x1 > width && x2 > width) {
        return Effect::Skipped;
    }

    for x in x1.min(x2)..=x1.max(x2) {
        grid.set(clip(x, width), row, color.clone());
    }
    Effect::Applied
}
