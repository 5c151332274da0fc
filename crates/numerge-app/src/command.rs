//! Parsing of interactive commands.

use std::str::FromStr;

use numerge_game::Direction;

/// A command typed at the game prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Command {
    /// Slide the tiles in a direction.
    Move(Direction),
    /// Ask the advisor for a move suggestion.
    Suggest,
    /// Clear the grid and spawn fresh tiles, keeping score and history.
    Reset,
    /// Start over with a zero score and an empty history.
    NewGame,
    /// Print the move history.
    History,
    /// Print the board.
    Display,
    /// List the available commands.
    Help,
    /// Leave the game.
    Quit,
}

/// The input did not name any known command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Unknown command: {input:?}. Type \"help\" for available commands.")]
pub struct UnknownCommandError {
    /// The normalized input line.
    pub input: String,
}

impl FromStr for Command {
    type Err = UnknownCommandError;

    /// Parses a trimmed, case-insensitive command or one of its aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        let command = match input.as_str() {
            "up" | "w" => Self::Move(Direction::Up),
            "down" | "s" => Self::Move(Direction::Down),
            "left" | "a" => Self::Move(Direction::Left),
            "right" | "d" => Self::Move(Direction::Right),
            "ai" | "ai-move" => Self::Suggest,
            "reset" | "r" => Self::Reset,
            "new" | "n" => Self::NewGame,
            "history" => Self::History,
            "display" | "show" => Self::Display,
            "help" | "h" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => return Err(UnknownCommandError { input }),
        };
        Ok(command)
    }
}
