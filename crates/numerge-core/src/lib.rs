//! Core data structures for the numerge 2048 game.
//!
//! This crate provides the plain value types shared by the board engine, the
//! move advisor, and the terminal front end.
//!
//! # Overview
//!
//! - [`position`]: signed `(row, col)` coordinates with row-major ordering
//! - [`position_set`]: an ordered set of positions, used to track empty cells
//! - [`grid`]: the fixed 4×4 tile grid and its textual rendering
//! - [`format`]: fixed-width, centered cell formatting
//!
//! # Examples
//!
//! ```
//! use numerge_core::{Grid, Position, PositionSet};
//!
//! let mut grid = Grid::new();
//! grid[(1, 2)] = Some(8);
//!
//! let empty: PositionSet = grid
//!     .positions()
//!     .filter(|&pos| grid.get(pos) == Some(None))
//!     .collect();
//! assert_eq!(empty.len(), 15);
//! assert!(!empty.contains(Position::new(1, 2)));
//! ```

pub mod format;
pub mod grid;
pub mod position;
pub mod position_set;

// Re-export commonly used types
pub use self::{
    grid::{Cell, GRID_SIZE, Grid},
    position::Position,
    position_set::PositionSet,
};
