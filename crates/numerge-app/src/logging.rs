//! Console and file logging on top of `env_logger`.
//!
//! Every line has the shape `[timestamp] LEVEL: message`. Messages logged
//! through [`success!`](crate::success) are info-level records under
//! [`SUCCESS_TARGET`] and are labelled `SUCCESS`. They rank between `info`
//! and `debug`: the `info` level hides them and the `success` level shows
//! them without debug output.

use std::{
    fs::{self, File, OpenOptions},
    io::{self, Write as _},
    path::{Path, PathBuf},
};

use env_logger::{
    Builder, Logger, Target, WriteStyle,
    fmt::{
        Formatter,
        style::{AnsiColor, Style},
    },
};
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::LogLevel;

/// Log target marking a record as a success message.
pub const SUCCESS_TARGET: &str = "numerge::success";

/// Logs an info-level message that is rendered with the `SUCCESS` label.
#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        ::log::info!(target: $crate::logging::SUCCESS_TARGET, $($arg)+)
    };
}

/// Errors raised while installing the logger.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum LogInitError {
    /// The log file or its directory could not be created.
    #[display("failed to open log file {}: {source}", path.display())]
    OpenFile {
        /// Path of the log file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// A global logger was already installed.
    #[display("failed to install logger: {_0}")]
    SetLogger(#[from] SetLoggerError),
}

/// Installs the global logger.
///
/// Records shown at `level` go to stdout. When `log_file` is given they
/// are also appended, without colors, to that file.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a logger is already
/// installed.
pub fn init(level: LogLevel, log_file: Option<&Path>) -> Result<(), LogInitError> {
    let console = builder(level).target(Target::Stdout).build();
    let logger: Box<dyn Log> = match log_file {
        Some(path) => {
            let file = open_log_file(path)?;
            Box::new(Tee {
                console,
                file: file_logger(level, file),
            })
        }
        None => Box::new(console),
    };

    log::set_boxed_logger(logger)?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}

/// Opens `path` for appending, creating missing parent directories.
///
/// # Errors
///
/// Returns [`LogInitError::OpenFile`] if the directory or file cannot be
/// created.
pub fn open_log_file(path: &Path) -> Result<File, LogInitError> {
    let open = || {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        OpenOptions::new().create(true).append(true).open(path)
    };
    open().map_err(|source| LogInitError::OpenFile {
        path: path.to_owned(),
        source,
    })
}

fn builder(level: LogLevel) -> Builder {
    let success = if level.shows_success() {
        LevelFilter::Info
    } else {
        LevelFilter::Off
    };
    let mut builder = Builder::new();
    builder
        .filter_level(level.to_level_filter())
        .filter_module(SUCCESS_TARGET, success)
        .format(format_record);
    builder
}

fn file_logger<W>(level: LogLevel, writer: W) -> Logger
where
    W: io::Write + Send + 'static,
{
    builder(level)
        .target(Target::Pipe(Box::new(writer)))
        .write_style(WriteStyle::Never)
        .build()
}

/// Returns `true` if the record was logged through [`success!`](crate::success).
#[must_use]
pub fn is_success(record: &Record<'_>) -> bool {
    record.target() == SUCCESS_TARGET
}

/// Returns the label printed for a record.
#[must_use]
pub fn level_label(record: &Record<'_>) -> &'static str {
    if is_success(record) {
        "SUCCESS"
    } else {
        record.level().as_str()
    }
}

fn format_record(buf: &mut Formatter, record: &Record<'_>) -> io::Result<()> {
    let style: Style = if is_success(record) {
        AnsiColor::Green.on_default().bold()
    } else {
        buf.default_level_style(record.level())
    };
    writeln!(
        buf,
        "[{}] {style}{}{style:#}: {}",
        buf.timestamp(),
        level_label(record),
        record.args()
    )
}

/// Forwards every record to both the console and the file logger.
struct Tee {
    console: Logger,
    file: Logger,
}

impl Log for Tee {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.console.enabled(metadata) || self.file.enabled(metadata)
    }

    fn log(&self, record: &Record<'_>) {
        self.console.log(record);
        self.file.log(record);
    }

    fn flush(&self) {
        self.console.flush();
        self.file.flush();
    }
}

#[cfg(test)]
mod tests {
    use log::Level;

    use super::*;

    fn log_to(logger: &dyn Log, level: Level, target: &str, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target(target)
                .args(format_args!("{message}"))
                .build(),
        );
        logger.flush();
    }

    #[test]
    fn test_level_label() {
        let success = Record::builder()
            .level(Level::Info)
            .target(SUCCESS_TARGET)
            .build();
        assert!(is_success(&success));
        assert_eq!(level_label(&success), "SUCCESS");

        let warn = Record::builder().level(Level::Warn).target("numerge").build();
        assert!(!is_success(&warn));
        assert_eq!(level_label(&warn), "WARN");
    }

    #[test]
    fn test_open_log_file_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("nested").join("app.log");

        open_log_file(&path).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_open_log_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("app.log");

        let err = open_log_file(&path).unwrap_err();
        assert!(matches!(&err, LogInitError::OpenFile { path: p, .. } if *p == path));
        assert!(err.to_string().contains("app.log"));
    }

    #[test]
    fn test_file_logger_writes_plain_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let logger = file_logger(LogLevel::Success, open_log_file(&path).unwrap());

        log_to(&logger, Level::Info, "numerge", "Current Score: 8");
        log_to(&logger, Level::Info, SUCCESS_TARGET, "Game 2048 Loaded!");
        log_to(&logger, Level::Debug, "numerge", "hidden");

        let content = fs::read_to_string(&path).unwrap();
        let lines = content.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2, "{content}");
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("] INFO: Current Score: 8"));
        assert!(lines[1].ends_with("] SUCCESS: Game 2048 Loaded!"));
        assert!(!content.contains('\x1b'));
    }

    #[test]
    fn test_success_messages_rank_between_info_and_debug() {
        let dir = tempfile::tempdir().unwrap();
        for (level, expected) in [
            (LogLevel::Info, ["INFO: move"].as_slice()),
            (LogLevel::Success, ["INFO: move", "SUCCESS: done"].as_slice()),
            (LogLevel::Debug, ["INFO: move", "SUCCESS: done", "DEBUG: trace"].as_slice()),
        ] {
            let path = dir.path().join(format!("{level:?}.log"));
            let logger = file_logger(level, open_log_file(&path).unwrap());
            log_to(&logger, Level::Info, "numerge", "move");
            log_to(&logger, Level::Info, SUCCESS_TARGET, "done");
            log_to(&logger, Level::Debug, "numerge", "trace");

            let content = fs::read_to_string(&path).unwrap();
            let labels = content
                .lines()
                .filter_map(|line| line.split_once("] "))
                .map(|(_, rest)| rest)
                .collect::<Vec<_>>();
            assert_eq!(labels, expected, "{level:?}");
        }
    }

    #[test]
    fn test_file_logger_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        fs::write(&path, "earlier line\n").unwrap();

        let logger = file_logger(LogLevel::Info, open_log_file(&path).unwrap());
        log_to(&logger, Level::Error, "numerge", "boom");

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("earlier line\n"));
        assert!(content.trim_end().ends_with("ERROR: boom"));
    }

    #[test]
    fn test_tee_respects_both_filters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let tee = Tee {
            console: builder(LogLevel::Off).build(),
            file: file_logger(LogLevel::Warn, open_log_file(&path).unwrap()),
        };

        let info = Metadata::builder().level(Level::Info).build();
        let warn = Metadata::builder().level(Level::Warn).build();
        assert!(!tee.enabled(&info));
        assert!(tee.enabled(&warn));

        log_to(&tee, Level::Warn, "numerge", "careful");
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("WARN: careful"));
    }
}
