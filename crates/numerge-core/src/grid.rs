//! The 4×4 tile grid.
//!
//! [`Grid`] is a plain `Copy` value: assigning or returning it by value is a
//! deep snapshot, which is what move history relies on.
//!
//! # Rendering
//!
//! Each row renders as `Row <i>: [<c0>, <c1>, <c2>, <c3>]`, with every cell
//! centered in [`CELL_WIDTH`] columns. The [`Display`](std::fmt::Display)
//! impl prints one such line per row, each terminated by `;` and a newline.
//!
//! ```
//! use numerge_core::Grid;
//!
//! let mut grid = Grid::new();
//! grid[(0, 0)] = Some(2);
//! grid[(0, 3)] = Some(1024);
//! assert_eq!(grid.row_line(0), "Row 0: [ 2  ,  .  ,  .  , 1024]");
//! ```

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use crate::{
    Position,
    format::{CELL_WIDTH, format_cell},
};

/// Number of rows and columns of the board.
pub const GRID_SIZE: usize = 4;

/// Contents of a single grid slot: a tile value, or `None` when empty.
pub type Cell = Option<u32>;

/// A `GRID_SIZE`×`GRID_SIZE` array of cells, indexed by `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Side length of the grid.
    pub const SIZE: usize = GRID_SIZE;

    /// Creates a grid with every cell empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Creates a grid from row arrays.
    #[must_use]
    pub const fn from_rows(cells: [[Cell; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// Returns the cell at `pos`, or `None` if `pos` is outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        let (row, col) = pos.to_indices(GRID_SIZE)?;
        Some(self.cells[row][col])
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    pub fn contains(pos: Position) -> bool {
        pos.to_indices(GRID_SIZE).is_some()
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).map(move |col| Position::from_indices(row, col)))
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; GRID_SIZE]> {
        self.cells.iter()
    }

    /// Returns the grid as row arrays.
    #[must_use]
    pub const fn to_rows(&self) -> [[Cell; GRID_SIZE]; GRID_SIZE] {
        self.cells
    }

    /// Renders row `row` as `Row <row>: [..]`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not less than [`GRID_SIZE`].
    #[must_use]
    pub fn row_line(&self, row: usize) -> String {
        let mut line = format!("Row {row}: [");
        for (i, cell) in self.cells[row].iter().enumerate() {
            if i > 0 {
                line.push_str(", ");
            }
            line.push_str(&format_cell(*cell, CELL_WIDTH));
        }
        line.push(']');
        line
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.cells[row][col]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.cells[row][col]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            f.write_str(&self.row_line(row))?;
            f.write_str(";\n")?;
        }
        Ok(())
    }
}
