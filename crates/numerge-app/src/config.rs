//! Command-line and environment configuration.
//!
//! Every option can be given as a flag or through its environment variable;
//! flags take precedence.

use std::{path::PathBuf, time::Duration};

use clap::{CommandFactory as _, FromArgMatches as _, Parser, ValueEnum};
use log::LevelFilter;
use numerge_advisor::{AdvisorConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

use crate::version;

/// Minimum severity of messages that are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Logging disabled.
    Off,
    /// Errors only.
    Error,
    /// Errors and warnings.
    Warn,
    /// Regular game output.
    Info,
    /// Regular game output and success messages.
    Success,
    /// Diagnostic output, including move history traces.
    Debug,
    /// Everything, including dependency internals.
    Trace,
}

impl LogLevel {
    /// Converts to the [`log`] crate's filter.
    ///
    /// `success` sits between `info` and `debug` but has no [`log::Level`] of
    /// its own, so it maps to [`LevelFilter::Info`]; see
    /// [`shows_success`](Self::shows_success) for the difference.
    #[must_use]
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::Off,
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info | Self::Success => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }

    /// Returns `true` if messages logged with [`success!`](crate::success) are printed.
    #[must_use]
    pub fn shows_success(self) -> bool {
        matches!(self, Self::Success | Self::Debug | Self::Trace)
    }
}

/// Play 2048 in the terminal, optionally asking a language model for advice.
#[derive(Debug, Clone, Parser)]
#[command(name = "numerge", author, about)]
pub struct Config {
    /// Base URL of the move-suggestion service.
    #[arg(long, env = "AI_URL", value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub ai_url: String,

    /// Model identifier sent with suggestion requests.
    #[arg(long, env = "AI_MODEL", value_name = "MODEL", default_value = DEFAULT_MODEL)]
    pub ai_model: String,

    /// Suggestion request timeout in seconds.
    #[arg(long, env = "AI_TIMEOUT_SECS", value_name = "SECS", default_value_t = 300)]
    pub ai_timeout_secs: u64,

    /// Minimum level of log messages to print.
    #[arg(
        long,
        env = "LOG_LEVEL",
        value_name = "LEVEL",
        default_value = "info",
        ignore_case = true
    )]
    pub log_level: LogLevel,

    /// Also append log messages to the log file.
    #[arg(long, env = "LOG_TO_FILE")]
    pub log_to_file: bool,

    /// Log file used with `--log-to-file`.
    #[arg(long, env = "LOG_FILE_PATH", value_name = "FILE", default_value = "logs/app.log")]
    pub log_file: PathBuf,

    /// Seed for tile spawning; a random seed is used when omitted.
    #[arg(long, env = "NUMERGE_SEED", value_name = "SEED")]
    pub seed: Option<u64>,
}

impl Config {
    /// Parses the process arguments and environment, exiting on error or `--help`.
    #[must_use]
    pub fn load() -> Self {
        let matches = Self::command()
            .version(version::build_version())
            .get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|err| err.exit())
    }

    /// Returns the log file path if file logging is enabled.
    #[must_use]
    pub fn log_file(&self) -> Option<&std::path::Path> {
        self.log_to_file.then_some(self.log_file.as_path())
    }

    /// Builds the advisor connection settings.
    #[must_use]
    pub fn advisor_config(&self) -> AdvisorConfig {
        AdvisorConfig {
            base_url: self.ai_url.clone(),
            model: self.ai_model.clone(),
            timeout: Duration::from_secs(self.ai_timeout_secs),
        }
    }
}
