use std::str::FromStr;

/// A direction in which tiles slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum Direction {
    /// Toward row 0.
    #[display("up")]
    Up,
    /// Toward the last row.
    #[display("down")]
    Down,
    /// Toward column 0.
    #[display("left")]
    Left,
    /// Toward the last column.
    #[display("right")]
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];
}

/// Error returned when parsing an unknown direction name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown direction: {name:?}")]
pub struct ParseDirectionError {
    name: String,
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(ParseDirectionError { name: s.to_owned() }),
        }
    }
}

/// Tag attached to a move history record.
///
/// [`MoveTag::Start`] marks the initial state recorded before any player move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum MoveTag {
    /// The initial state of a game.
    #[display("start")]
    Start,
    /// A player move.
    #[display("{_0}")]
    Move(Direction),
}

impl From<Direction> for MoveTag {
    fn from(direction: Direction) -> Self {
        Self::Move(direction)
    }
}
