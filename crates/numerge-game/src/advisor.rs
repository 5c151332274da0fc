use std::future::Future;

/// A service that can be asked for a move suggestion.
///
/// Implementations forward the prompt to some advice source and report the
/// answer themselves (the board does not consume a return value). Failures are
/// returned to the caller unchanged.
pub trait MoveAdvisor {
    /// Error produced when the suggestion request fails.
    type Error;

    /// Sends `prompt` to the advice source.
    fn suggest_move(&self, prompt: String) -> impl Future<Output = Result<(), Self::Error>>;
}
