//! The interactive command loop.

use std::{fmt::Display, future::Future, io, ops::ControlFlow, pin::pin};

use log::{error, info};
use numerge_game::{Board, MoveAdvisor, MoveTag};
use tokio::io::{AsyncBufRead, AsyncBufReadExt as _, AsyncWrite, AsyncWriteExt as _};

use crate::{
    command::Command,
    prompt::{help_lines, main_prompt},
    success,
};

/// One game played through text commands.
///
/// The session owns the board and the advisor used for `ai` commands. The
/// `> ` input marker is written to `output`; everything else goes through the
/// logger.
#[derive(Debug)]
pub struct Session<A, W> {
    board: Board,
    advisor: A,
    output: W,
}

impl<A, W> Session<A, W>
where
    A: MoveAdvisor,
    A::Error: Display,
    W: AsyncWrite + Unpin,
{
    /// Creates a session around an already set-up board.
    pub fn new(board: Board, advisor: A, output: W) -> Self {
        Self {
            board,
            advisor,
            output,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the advisor.
    pub fn advisor(&self) -> &A {
        &self.advisor
    }

    /// Announces the game, records the starting position and shows the board.
    pub fn start(&mut self) {
        info!("Game 2048 Loaded!");
        self.board.collect_move_history(MoveTag::Start);
        self.board.display();
    }

    /// Reads and executes commands until `quit`, end of input, or Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns an error if reading `input` or writing the prompt fails.
    pub async fn run<R>(&mut self, input: R) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        self.run_until(input, async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for Ctrl-C: {err}");
                std::future::pending::<()>().await;
            }
        })
        .await
    }

    /// Like [`run`](Self::run), but stops when `shutdown` completes instead of
    /// on Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns an error if reading `input` or writing the prompt fails.
    pub async fn run_until<R, F>(&mut self, mut input: R, shutdown: F) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        F: Future<Output = ()>,
    {
        let mut shutdown = pin!(shutdown);
        let mut line = String::new();
        loop {
            for hint in main_prompt(self.board.is_game_over()) {
                info!("{hint}");
            }
            self.output.write_all(b"> ").await?;
            self.output.flush().await?;

            line.clear();
            let read = tokio::select! {
                biased;
                () = &mut shutdown => {
                    info!("Interrupted.");
                    break;
                }
                read = input.read_line(&mut line) => read?,
            };
            if read == 0 {
                info!("End of input.");
                break;
            }

            if self.handle_line(&line).await.is_break() {
                break;
            }
        }
        Ok(())
    }

    /// Parses and executes one input line.
    ///
    /// Returns [`ControlFlow::Break`] when the player quits.
    pub async fn handle_line(&mut self, line: &str) -> ControlFlow<()> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                info!("{err}");
                self.board.display();
                self.report_game_over();
                return ControlFlow::Continue(());
            }
        };
        let flow = self.handle(command).await;
        if flow.is_continue() {
            self.report_game_over();
        }
        flow
    }

    /// Executes a parsed command.
    ///
    /// Returns [`ControlFlow::Break`] for [`Command::Quit`].
    pub async fn handle(&mut self, command: Command) -> ControlFlow<()> {
        match command {
            Command::Move(direction) => {
                self.board.merge(direction);
                self.board.collect_move_history(direction);
            }
            Command::Suggest => {
                info!("Asking AI for move suggestion...");
                match self.board.suggest_ai_move(&self.advisor).await {
                    Ok(()) => {
                        success!("AI suggestion completed.");
                        self.board.display();
                    }
                    Err(err) => error!("Error in AI suggestion: {err}"),
                }
            }
            Command::Reset => {
                info!("Resetting game...");
                self.board.reset();
                self.board.display();
            }
            Command::NewGame => {
                info!("Starting a new game...");
                self.board.new_game();
                self.board.collect_move_history(MoveTag::Start);
                self.board.display();
            }
            Command::History => {
                info!("Move History:\n{}", self.board.move_history_string());
            }
            Command::Display => self.board.display(),
            Command::Help => {
                info!("Available commands:");
                for line in help_lines() {
                    info!("{line}");
                }
            }
            Command::Quit => {
                info!("Thanks for playing! Goodbye!");
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    fn report_game_over(&self) {
        if self.board.is_game_over() {
            info!("Game Over! No more moves available.");
            info!("Your final score: {}", self.board.score());
            info!(r#"Please reset the game to play again or type "quit" to exit."#);
        }
    }
}
