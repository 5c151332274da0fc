//! Text shown between commands.

/// Returns the lines printed before reading each command.
///
/// Move, suggestion and help hints are left out once the game is over.
#[must_use]
pub fn main_prompt(game_over: bool) -> Vec<&'static str> {
    let mut lines = Vec::new();
    if !game_over {
        lines.extend([
            "Move with up/w, down/s, left/a or right/d.",
            r#"Type "ai" to ask for a move suggestion or "help" to list all commands."#,
        ]);
    }
    lines.push(r#"Type "reset" or "new" to start over, "quit" to exit."#);
    lines
}

/// Returns the command listing printed by `help`.
#[must_use]
pub fn help_lines() -> &'static [&'static str] {
    &[
        "  up/w         - Move up",
        "  down/s       - Move down",
        "  left/a       - Move left",
        "  right/d      - Move right",
        "  ai-move/ai   - Ask AI for a move",
        "  reset/r      - Reset the board, keeping the score",
        "  new/n        - Start a new game",
        "  history      - Show the move history",
        "  display/show - Show board",
        "  help/h       - Show this help",
        "  quit/q       - Exit game",
    ]
}
