//! An ordered set of board positions.
//!
//! [`PositionSet`] is used by the board engine to track which cells are
//! empty. Members are stored as structured `(row, col)` keys, so distinct
//! pairs such as `(12, 3)` and `(1, 23)` can never be confused, and
//! enumeration is always sorted by row and then by column.
//!
//! # Examples
//!
//! ```
//! use numerge_core::{Position, PositionSet};
//!
//! let mut set = PositionSet::new();
//! set.insert(Position::new(2, 1));
//! set.insert(Position::new(0, 3));
//! set.insert(Position::new(2, 1));
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(
//!     set.values(),
//!     vec![Position::new(0, 3), Position::new(2, 1)]
//! );
//! ```

use std::collections::{BTreeSet, btree_set};

use crate::Position;

/// A set of [`Position`]s with sorted enumeration.
///
/// All operations are total: inserting a present member or removing an absent
/// one is a no-op.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PositionSet {
    members: BTreeSet<Position>,
}

impl PositionSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            members: BTreeSet::new(),
        }
    }

    /// Returns `true` if `pos` is a member.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.members.contains(&pos)
    }

    /// Adds `pos` to the set.
    ///
    /// Returns `true` if the position was not already a member.
    pub fn insert(&mut self, pos: Position) -> bool {
        self.members.insert(pos)
    }

    /// Removes `pos` from the set.
    ///
    /// Returns `true` if the position was a member.
    pub fn remove(&mut self, pos: Position) -> bool {
        self.members.remove(&pos)
    }

    /// Removes every member.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the `index`-th member in sorted order.
    #[must_use]
    pub fn nth(&self, index: usize) -> Option<Position> {
        self.members.iter().nth(index).copied()
    }

    /// Returns an owned, sorted snapshot of the members.
    ///
    /// The returned vector is independent of the set.
    #[must_use]
    pub fn values(&self) -> Vec<Position> {
        self.members.iter().copied().collect()
    }

    /// Iterates over members in sorted order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.members.iter(),
        }
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl Extend<Position> for PositionSet {
    fn extend<T: IntoIterator<Item = Position>>(&mut self, iter: T) {
        self.members.extend(iter);
    }
}

impl<'a> IntoIterator for &'a PositionSet {
    type Item = Position;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Sorted iterator over the members of a [`PositionSet`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: btree_set::Iter<'a, Position>,
}

impl Iterator for Iter<'_> {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for Iter<'_> {}
