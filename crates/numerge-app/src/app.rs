//! Wires configuration, board, advisor and the command loop together.

use std::{future::Future, io};

use log::info;
use numerge_advisor::{AdvisorError, SuggestionClient};
use numerge_game::Board;
use tokio::{io::BufReader, runtime};

use crate::{config::Config, session::Session};

/// Errors that end the application.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    /// The suggestion client could not be created.
    #[display("failed to set up the move advisor: {_0}")]
    Advisor(#[from] AdvisorError),
    /// Reading commands or writing the prompt failed.
    #[display("terminal I/O failed: {_0}")]
    Io(#[from] io::Error),
}

/// Runs `future` to completion on a single-threaded runtime.
///
/// The runtime is shut down without waiting for blocking tasks, so a stdin
/// read still pending after the loop ends does not keep the process alive.
///
/// # Errors
///
/// Returns an error if the runtime cannot be built.
pub fn block_on_detached<F>(future: F) -> io::Result<F::Output>
where
    F: Future,
{
    let runtime = runtime::Builder::new_current_thread().enable_all().build()?;
    let output = runtime.block_on(future);
    runtime.shutdown_background();
    Ok(output)
}

/// Plays one interactive game on stdin/stdout.
///
/// # Errors
///
/// Returns an error if the advisor cannot be configured or the terminal
/// cannot be read.
pub async fn run(config: &Config) -> Result<(), AppError> {
    info!("Starting Game 2048...");
    let advisor = SuggestionClient::new(config.advisor_config())?;
    info!(
        "Move suggestions from {} using model {}",
        advisor.config().endpoint(),
        advisor.config().model
    );

    let board = config.seed.map_or_else(Board::new, Board::with_seed);
    let mut session = Session::new(board, advisor, tokio::io::stdout());
    session.start();
    session.run(BufReader::new(tokio::io::stdin())).await?;
    session.advisor().cancel();
    Ok(())
}
