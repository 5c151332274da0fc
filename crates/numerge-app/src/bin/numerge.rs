//! Numerge terminal game.
//!
//! This is the main entry point for the command-line application.

use std::process::ExitCode;

use log::error;
use numerge_app::{app, config::Config, logging};

fn main() -> ExitCode {
    better_panic::install();

    let config = Config::load();
    if let Err(err) = logging::init(config.log_level, config.log_file()) {
        eprintln!("numerge: {err}");
        return ExitCode::FAILURE;
    }

    match app::block_on_detached(app::run(&config)) {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(err)) => {
            error!("Game2048 error: {err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("failed to start the async runtime: {err}");
            ExitCode::FAILURE
        }
    }
}
