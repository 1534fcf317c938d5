//! The log side-channel.
//!
//! An [`EventLog`] owns its own [`tracing::Dispatch`] instead of installing a
//! global subscriber, so every engine writes to exactly the sink it was built
//! with. Lines look like `2024-05-01 13:37:00,123 - INFO - message`.

pub mod format;
pub mod sink;

use anyhow::{Context, Result};
use std::fmt::Display;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{Dispatch, Level};

use crate::consts::{DEFAULT_LOG_DIR, DEFAULT_LOG_FILE};
use format::LineFormat;
pub use sink::MemorySink;

/// Where and how much to log.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory holding the log file. Created if absent.
    pub dir: PathBuf,
    pub file_name: String,
    /// Most verbose level written.
    pub level: Level,
}

impl LogConfig {
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_LOG_DIR),
            file_name: DEFAULT_LOG_FILE.to_string(),
            level: Level::INFO,
        }
    }
}

/// An injectable log sink.
#[derive(Clone)]
pub struct EventLog {
    dispatch: Dispatch,
}

impl EventLog {
    /// Append to the file described by `config`, creating its directory.
    pub fn open(config: &LogConfig) -> Result<Self> {
        fs::create_dir_all(&config.dir)
            .with_context(|| format!("failed to create log directory {}", config.dir.display()))?;
        let path = config.path();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(config.level)
            .with_ansi(false)
            .event_format(LineFormat)
            .with_writer(Mutex::new(file))
            .finish();
        Ok(Self {
            dispatch: Dispatch::new(subscriber),
        })
    }

    /// Log into a shared buffer. Use for tests.
    pub fn in_memory() -> (Self, MemorySink) {
        Self::in_memory_with_level(Level::INFO)
    }

    pub fn in_memory_with_level(level: Level) -> (Self, MemorySink) {
        let sink = MemorySink::new();
        let writer = sink.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .event_format(LineFormat)
            .with_writer(move || writer.clone())
            .finish();
        (
            Self {
                dispatch: Dispatch::new(subscriber),
            },
            sink,
        )
    }

    /// Discard everything.
    pub fn disabled() -> Self {
        Self {
            dispatch: Dispatch::none(),
        }
    }

    pub fn info(&self, message: impl Display) {
        tracing::dispatcher::with_default(&self.dispatch, || tracing::info!("{message}"));
    }

    pub fn error(&self, message: impl Display) {
        tracing::dispatcher::with_default(&self.dispatch, || tracing::error!("{message}"));
    }
}

impl std::fmt::Debug for EventLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventLog").finish_non_exhaustive()
    }
}
