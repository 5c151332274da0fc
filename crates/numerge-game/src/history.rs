use std::fmt;

use numerge_core::Grid;

use crate::MoveTag;

/// A snapshot of the game taken when a move was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// The move that led to this state.
    pub direction: MoveTag,
    /// Score at the time of recording.
    pub score: u64,
    /// Copy of the grid at the time of recording.
    pub board: Grid,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Direction: {}, Score: {}, Board: {}",
            self.direction, self.score, self.board
        )
    }
}

/// Append-only list of [`MoveRecord`]s.
///
/// The [`Display`](fmt::Display) impl renders each record on its own line
/// group, separated by newlines.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends a record.
    pub fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    /// Returns all records, oldest first.
    #[must_use]
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }
}

impl fmt::Display for MoveHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{record}")?;
        }
        Ok(())
    }
}
