//! Board coordinates.

/// A `(row, col)` coordinate pair.
///
/// Coordinates are signed so that out-of-range requests (including negative
/// ones) can be represented and reported as-is. Ordering is row-major: rows
/// compare first, then columns.
///
/// # Examples
///
/// ```
/// use numerge_core::Position;
///
/// let a = Position::new(0, 3);
/// let b = Position::new(1, 0);
/// assert!(a < b);
/// assert_eq!(a.to_string(), "(0, 3)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Position {
    row: i64,
    col: i64,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    #[inline]
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Returns the row coordinate.
    #[must_use]
    #[inline]
    pub const fn row(self) -> i64 {
        self.row
    }

    /// Returns the column coordinate.
    #[must_use]
    #[inline]
    pub const fn col(self) -> i64 {
        self.col
    }

    /// Converts to array indices if the position lies inside a `size`×`size` square.
    #[must_use]
    pub fn to_indices(self, size: usize) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        (row < size && col < size).then_some((row, col))
    }

    /// Builds a position from array indices.
    ///
    /// # Panics
    ///
    /// Panics if an index does not fit in `i64`.
    #[must_use]
    pub fn from_indices(row: usize, col: usize) -> Self {
        Self::new(
            i64::try_from(row).expect("row index fits in i64"),
            i64::try_from(col).expect("column index fits in i64"),
        )
    }
}

impl From<(i64, i64)> for Position {
    fn from((row, col): (i64, i64)) -> Self {
        Self::new(row, col)
    }
}
