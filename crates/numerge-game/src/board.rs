use log::{debug, info};
use numerge_core::{Cell, GRID_SIZE, Grid, Position, PositionSet};
use rand::prelude::*;
use rand_pcg::Pcg64;

use crate::{BoardError, Direction, MoveAdvisor, MoveHistory, MoveRecord, MoveTag};

/// Probability that a spawned tile is a 2 rather than a 4.
const TWO_PROBABILITY: f64 = 0.9;

/// A 2048 game board.
///
/// Owns the tile grid, the score, the set of empty positions, the move history,
/// and the random source used for spawning tiles. All mutation goes through the
/// methods below, which keep the empty-position set in sync with the grid.
///
/// # Example
///
/// ```
/// use numerge_core::{Grid, Position};
/// use numerge_game::{Board, Direction};
///
/// let mut grid = Grid::new();
/// grid[(1, 0)] = Some(2);
/// grid[(2, 0)] = Some(2);
/// let mut board = Board::from_grid(grid, 7);
///
/// // Sliding alone merges without spawning new tiles.
/// assert_eq!(board.shift(Direction::Up), 4);
/// assert_eq!(board.cell(Position::new(0, 0)), Ok(Some(4)));
/// assert_eq!(board.score(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    score: u64,
    available: PositionSet,
    history: MoveHistory,
    rng: Pcg64,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board seeded from system entropy and spawns the opening tiles.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Creates a board with a fixed seed and spawns the opening tiles.
    ///
    /// Boards created with the same seed play out identically.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let mut this = Self::from_grid(Grid::new(), seed);
        this.insert_random_number();
        this
    }

    /// Creates a board holding `grid` as-is, with a score of zero and no history.
    ///
    /// No tiles are spawned.
    #[must_use]
    pub fn from_grid(grid: Grid, seed: u64) -> Self {
        let available = grid
            .positions()
            .filter(|&pos| grid.get(pos) == Some(None))
            .collect();
        Self {
            grid,
            score: 0,
            available,
            history: MoveHistory::new(),
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Returns the current grid.
    #[must_use]
    pub fn board(&self) -> &Grid {
        &self.grid
    }

    /// Returns the current score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Returns the set of currently empty positions.
    #[must_use]
    pub fn available_positions(&self) -> &PositionSet {
        &self.available
    }

    /// Returns the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidPosition`] if `pos` is outside the grid.
    pub fn cell(&self, pos: Position) -> Result<Cell, BoardError> {
        self.grid
            .get(pos)
            .ok_or(BoardError::invalid_position(pos))
    }

    /// Writes `value` to the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidPosition`] if `pos` is outside the grid.
    pub fn set_cell(&mut self, pos: Position, value: Cell) -> Result<(), BoardError> {
        let (row, col) = pos
            .to_indices(GRID_SIZE)
            .ok_or(BoardError::invalid_position(pos))?;
        self.write(row, col, value);
        Ok(())
    }

    fn write(&mut self, row: usize, col: usize, value: Cell) {
        let old = std::mem::replace(&mut self.grid[(row, col)], value);
        match (old, value) {
            (None, Some(_)) => {
                self.available.remove(Position::from_indices(row, col));
            }
            (Some(_), None) => {
                self.available.insert(Position::from_indices(row, col));
            }
            _ => {}
        }
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.available.is_empty()
    }

    /// Empties the grid and spawns fresh tiles.
    ///
    /// The score and the move history are kept; use [`Board::new_game`] to
    /// clear them as well.
    pub fn reset(&mut self) {
        self.grid = Grid::new();
        self.available.clear();
        self.available.extend(self.grid.positions());
        self.insert_random_number();
    }

    /// Starts over: clears the score and the move history, then [`reset`](Self::reset)s.
    pub fn new_game(&mut self) {
        self.score = 0;
        self.history.clear();
        self.reset();
    }

    fn random_available_position(&mut self) -> Option<Position> {
        if self.available.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..self.available.len());
        self.available.nth(index)
    }

    /// Spawns a batch of tiles.
    ///
    /// Performs [`insert_random_number_once`](Self::insert_random_number_once)
    /// `floor(r * empty / 2) + 2` times, where `r` is a uniform draw in `[0, 1)`
    /// and `empty` is the number of empty cells before spawning. Insertions
    /// beyond the available space are no-ops. Always returns `true`.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn insert_random_number(&mut self) -> bool {
        let empty = self.available.len() as f64;
        let repetitions = (self.rng.random::<f64>() * empty / 2.0).floor() as usize + 2;
        for _ in 0..repetitions {
            self.insert_random_number_once();
        }
        true
    }

    /// Spawns a single tile: a 2 with probability 0.9, otherwise a 4.
    ///
    /// Returns `false` if the board is full.
    pub fn insert_random_number_once(&mut self) -> bool {
        let value = if self.rng.random::<f64>() < TWO_PROBABILITY {
            2
        } else {
            4
        };
        self.insert_number_at_random_position(value)
    }

    /// Writes `value` to a uniformly chosen empty cell.
    ///
    /// Returns `false` if the board is full.
    pub fn insert_number_at_random_position(&mut self, value: u32) -> bool {
        if self.is_full() {
            return false;
        }
        let Some(pos) = self.random_available_position() else {
            return false;
        };
        let Some((row, col)) = pos.to_indices(GRID_SIZE) else {
            return false;
        };
        self.write(row, col, Some(value));
        true
    }

    /// Slides and merges every line toward `direction` and returns the points gained.
    ///
    /// Tiles nearest the destination edge are processed first. A tile slides
    /// across empty cells and merges into an equal neighbor unless that
    /// neighbor was itself produced by a merge during this call, so each tile
    /// takes part in at most one merge. A pair whose sum does not fit in a
    /// [`Cell`] does not merge.
    ///
    /// Unlike [`merge`](Self::merge), this does not spawn tiles or display the board.
    pub fn shift(&mut self, direction: Direction) -> u64 {
        let mut gained = 0;
        for index in 0..GRID_SIZE {
            let line = line_cells(direction, index);
            let mut last_merge = None;
            for source in 1..GRID_SIZE {
                let (row, col) = line[source];
                let Some(value) = self.grid[(row, col)] else {
                    continue;
                };

                let mut target = source;
                while target > 0 && self.grid[line[target - 1]].is_none() {
                    target -= 1;
                }

                let merged = value
                    .checked_mul(2)
                    .filter(|_| target > 0 && self.grid[line[target - 1]] == Some(value))
                    .filter(|_| last_merge != Some(target - 1));
                if let Some(merged) = merged {
                    let (merge_row, merge_col) = line[target - 1];
                    self.write(merge_row, merge_col, Some(merged));
                    self.write(row, col, None);
                    gained += u64::from(merged);
                    last_merge = Some(target - 1);
                } else if target != source {
                    let (target_row, target_col) = line[target];
                    self.write(target_row, target_col, Some(value));
                    self.write(row, col, None);
                }
            }
        }
        self.score += gained;
        gained
    }

    /// Plays a move: [`shift`](Self::shift)s, spawns new tiles, then displays the board.
    ///
    /// Returns the points gained by the shift.
    pub fn merge(&mut self, direction: Direction) -> u64 {
        let gained = self.shift(direction);
        self.insert_random_number();
        self.display();
        gained
    }

    /// Plays an upward move.
    pub fn merge_up(&mut self) {
        self.merge(Direction::Up);
    }

    /// Plays a downward move.
    pub fn merge_down(&mut self) {
        self.merge(Direction::Down);
    }

    /// Plays a leftward move.
    pub fn merge_left(&mut self) {
        self.merge(Direction::Left);
    }

    /// Plays a rightward move.
    pub fn merge_right(&mut self) {
        self.merge(Direction::Right);
    }

    /// Returns `true` if the board is full and no two adjacent tiles are equal.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        if !self.is_full() {
            return false;
        }
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let value = self.grid[(row, col)];
                if col + 1 < GRID_SIZE && value == self.grid[(row, col + 1)] {
                    return false;
                }
                if row + 1 < GRID_SIZE && value == self.grid[(row + 1, col)] {
                    return false;
                }
            }
        }
        true
    }

    /// Logs the score and the grid at info level.
    pub fn display(&self) {
        info!("Current Score: {}", self.score);
        info!("Current Board:");
        for row in 0..GRID_SIZE {
            info!("{}", self.grid.row_line(row));
        }
    }

    /// Records the current score and a copy of the grid under `direction`.
    ///
    /// Returns the full history.
    pub fn collect_move_history(&mut self, direction: impl Into<MoveTag>) -> &[MoveRecord] {
        let direction = direction.into();
        self.history.push(MoveRecord {
            direction,
            score: self.score,
            board: self.grid,
        });
        debug!("Moving {direction}...\n{}", self.history);
        self.history.records()
    }

    /// Returns the recorded moves, oldest first.
    #[must_use]
    pub fn move_history(&self) -> &[MoveRecord] {
        self.history.records()
    }

    /// Renders the move history, one record per line group.
    #[must_use]
    pub fn move_history_string(&self) -> String {
        self.history.to_string()
    }

    /// Builds the text sent to a [`MoveAdvisor`]: the current grid followed by the history.
    #[must_use]
    pub fn suggestion_prompt(&self) -> String {
        format!(
            "Based on the current board state and move history, please suggest the best next move.\n\n\
             Current board state:\n{}\n\nMove history:\n{}",
            self.grid, self.history
        )
    }

    /// Asks `advisor` for a move suggestion.
    ///
    /// # Errors
    ///
    /// Returns whatever error the advisor reports.
    pub async fn suggest_ai_move<A>(&self, advisor: &A) -> Result<(), A::Error>
    where
        A: MoveAdvisor + ?Sized,
    {
        advisor.suggest_move(self.suggestion_prompt()).await
    }
}

/// Cells of line `index`, ordered from the `direction` edge outward.
fn line_cells(direction: Direction, index: usize) -> [(usize, usize); GRID_SIZE] {
    std::array::from_fn(|step| match direction {
        Direction::Up => (step, index),
        Direction::Down => (GRID_SIZE - 1 - step, index),
        Direction::Left => (index, step),
        Direction::Right => (index, GRID_SIZE - 1 - step),
    })
}
