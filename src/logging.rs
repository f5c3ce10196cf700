//! Logging sinks for callers of the client.
//!
//! The client never installs a global subscriber. [`init_logging`] builds a
//! console and/or file subscriber and returns it as a [`tracing::Dispatch`]
//! that is handed to the client builder. Keep the returned [`LoggingHandle`]
//! alive for the life of the process and call [`LoggingHandle::shutdown`]
//! (or drop it) at exit to flush the file sink.

use std::path::PathBuf;

use tracing::Dispatch;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directive (e.g. `info`, `finam_trade_api=debug`). `RUST_LOG` wins when set.
    pub level: String,
    /// Write human-readable lines to stdout.
    pub console: bool,
    /// Also append to a log file.
    pub file: Option<LogFile>,
}

/// Log file location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    pub directory: PathBuf,
    pub file_name: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console: true,
            file: None,
        }
    }
}

impl LogConfig {
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }

    pub fn with_file(
        mut self,
        directory: impl Into<PathBuf>,
        file_name: impl Into<String>,
    ) -> Self {
        self.file = Some(LogFile {
            directory: directory.into(),
            file_name: file_name.into(),
        });
        self
    }
}

/// Owns the subscriber and the file writer's flush guard.
pub struct LoggingHandle {
    dispatch: Dispatch,
    guard: Option<WorkerGuard>,
}

impl LoggingHandle {
    /// Dispatch to inject into the client builder's `logger`.
    pub fn dispatch(&self) -> Dispatch {
        self.dispatch.clone()
    }

    /// Also make this subscriber the process-wide default.
    pub fn install_global(&self) -> Result<(), LoggingError> {
        tracing::dispatcher::set_global_default(self.dispatch.clone())
            .map_err(|_| LoggingError::AlreadyInitialized)
    }

    /// Flush and close the file sink. Events emitted afterwards are dropped
    /// by the file layer but still reach the console.
    pub fn shutdown(mut self) {
        self.guard.take();
    }
}

/// Build the subscriber described by `config`.
pub fn init_logging(config: &LogConfig) -> Result<LoggingHandle, LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            LoggingError::InvalidConfig(format!("level '{}': {}", config.level, e))
        })?,
    };

    let console = config.console.then(|| fmt::layer().with_target(true));

    let (file, guard) = match &config.file {
        Some(target) => {
            std::fs::create_dir_all(&target.directory)?;
            let appender = tracing_appender::rolling::never(&target.directory, &target.file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file);

    Ok(LoggingHandle {
        dispatch: Dispatch::new(subscriber),
        guard,
    })
}

/// Errors that can occur during logging initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to create log directory: {0}")]
    DirectoryCreation(#[from] std::io::Error),

    #[error("Invalid logging configuration: {0}")]
    InvalidConfig(String),

    #[error("A global subscriber is already installed")]
    AlreadyInitialized,
}
