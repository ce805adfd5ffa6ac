//! Text rendering of a grid

use crate::grid::Grid;

/// Render a grid as one line per row, top row first.
///
/// Each line concatenates the row's color tokens in column order, so a
/// multi-character token widens its line. Lines are joined with `\n` and
/// there is no trailing newline.
///
/// # Examples
///
/// ```
/// use bitmap_editor::grid::Grid;
/// use bitmap_editor::renderer::render;
///
/// let grid = Grid::new(3, 2).unwrap();
/// assert_eq!(render(&grid), "OOO\nOOO");
/// ```
pub fn render(grid: &Grid) -> String {
    grid.rows()
        .map(|row| row.iter().map(|c| c.as_str()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
