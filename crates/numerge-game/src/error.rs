use numerge_core::Position;

/// Errors returned by [`Board`](crate::Board) cell accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The requested coordinates lie outside the grid.
    #[display("invalid position: ({row}, {col})")]
    InvalidPosition {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },
}

impl BoardError {
    pub(crate) fn invalid_position(pos: Position) -> Self {
        Self::InvalidPosition {
            row: pos.row(),
            col: pos.col(),
        }
    }
}
