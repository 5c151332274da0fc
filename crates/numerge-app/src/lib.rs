//! Terminal front end for numerge.
//!
//! The binary reads its [`Config`](config::Config) from flags and
//! environment variables, installs the [`logging`] backend and hands over to
//! [`app::run`], which drives a [`Session`](session::Session): a line-based
//! loop that turns typed [`Command`](command::Command)s into board
//! operations.

pub mod app;
pub mod command;
pub mod config;
pub mod logging;
pub mod prompt;
pub mod session;
pub mod version;
