//! The numerge board engine.
//!
//! [`Board`] implements the 2048 rules: tiles slide toward one edge, equal
//! neighbors merge once per move, the score grows by every merged value, and
//! each move is followed by a batch of freshly spawned 2s and 4s. The board
//! also keeps an in-memory [`MoveHistory`] and can hand a textual prompt of
//! its state to any [`MoveAdvisor`].
//!
//! # Examples
//!
//! ```
//! use numerge_game::{Board, Direction, MoveTag};
//!
//! let mut board = Board::with_seed(2048);
//! board.collect_move_history(MoveTag::Start);
//!
//! board.merge(Direction::Left);
//! board.collect_move_history(Direction::Left);
//!
//! assert_eq!(board.move_history().len(), 2);
//! assert!(!board.is_game_over());
//! ```

pub use self::{advisor::*, board::*, direction::*, error::*, history::*};

mod advisor;
mod board;
mod direction;
mod error;
mod history;
