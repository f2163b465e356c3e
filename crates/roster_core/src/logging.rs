//! Roster logging: bootstrap and event lines.
//!
//! # Responsibility
//! - Start one rolling file logger per process from a validated config.
//! - Define the `event=... module=... status=...` line every roster log uses.
//!
//! # Invariants
//! - `LogEvent` carries only static tokens and counts, so student ids and
//!   names cannot reach the log files.
//! - Init is idempotent for an equal config and never panics.
//! - A second init with a different config is rejected.

use flexi_logger::{
    Cleanup, Criterion, FileSpec, FlexiLoggerError, LogSpecification, Logger, LoggerHandle,
    Naming, WriteMode,
};
use log::{info, LevelFilter};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "roster";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 2 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    config: LoggingConfig,
    _logger: LoggerHandle,
}

/// Validated logger settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    level: LevelFilter,
    log_dir: PathBuf,
}

impl LoggingConfig {
    /// Builds a config from a level filter and an absolute directory.
    pub fn new(level: LevelFilter, log_dir: impl Into<PathBuf>) -> Result<Self, LoggingError> {
        let log_dir = log_dir.into();
        if log_dir.as_os_str().is_empty() {
            return Err(LoggingError::InvalidLogDir {
                path: log_dir,
                reason: "empty",
            });
        }
        if !log_dir.is_absolute() {
            return Err(LoggingError::InvalidLogDir {
                path: log_dir,
                reason: "not absolute",
            });
        }
        Ok(Self { level, log_dir })
    }

    /// Parses a level name (`trace|debug|info|warn|error`, case-insensitive).
    pub fn parse(level: &str, log_dir: impl Into<PathBuf>) -> Result<Self, LoggingError> {
        Self::new(parse_level(level)?, log_dir)
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

#[derive(Debug)]
pub enum LoggingError {
    UnsupportedLevel(String),
    InvalidLogDir { path: PathBuf, reason: &'static str },
    CreateDir { path: PathBuf, source: std::io::Error },
    AlreadyInitialized { active: LoggingConfig },
    Backend(FlexiLoggerError),
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::InvalidLogDir { path, reason } => {
                write!(f, "invalid log directory `{}`: {reason}", path.display())
            }
            Self::CreateDir { path, source } => write!(
                f,
                "failed to create log directory `{}`: {source}",
                path.display()
            ),
            Self::AlreadyInitialized { active } => write!(
                f,
                "logging already active with level `{}` at `{}`",
                active.level,
                active.log_dir.display()
            ),
            Self::Backend(err) => write!(f, "failed to start logger: {err}"),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CreateDir { source, .. } => Some(source),
            Self::Backend(err) => Some(err),
            _ => None,
        }
    }
}

/// Outcome token of a roster event line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStatus {
    Ok,
    Rejected,
    Error,
}

impl LogStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Rejected => "rejected",
            Self::Error => "error",
        }
    }
}

/// One structured roster log line.
///
/// Renders as `event=<event> module=<module> status=<status>` followed by
/// the optional `reason=` and extra fields in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    module: &'static str,
    event: &'static str,
    status: LogStatus,
    reason: Option<&'static str>,
    fields: Vec<(&'static str, String)>,
}

impl LogEvent {
    pub fn new(module: &'static str, event: &'static str, status: LogStatus) -> Self {
        Self {
            module,
            event,
            status,
            reason: None,
            fields: Vec::new(),
        }
    }

    pub fn reason(mut self, reason: &'static str) -> Self {
        self.reason = Some(reason);
        self
    }

    pub fn tag(mut self, key: &'static str, value: &'static str) -> Self {
        self.fields.push((key, value.to_string()));
        self
    }

    pub fn count(mut self, key: &'static str, value: usize) -> Self {
        self.fields.push((key, value.to_string()));
        self
    }
}

impl Display for LogEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "event={} module={} status={}",
            self.event,
            self.module,
            self.status.as_str()
        )?;
        if let Some(reason) = self.reason {
            write!(f, " reason={reason}")?;
        }
        for (key, value) in &self.fields {
            write!(f, " {key}={value}")?;
        }
        Ok(())
    }
}

/// Starts the roster file logger.
///
/// # Errors
/// - The directory cannot be created.
/// - Logging is already active with a different config.
/// - The logger backend fails to start.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let state = LOGGING_STATE.get_or_try_init(|| start_logger(config.clone()))?;
    if state.config != *config {
        return Err(LoggingError::AlreadyInitialized {
            active: state.config.clone(),
        });
    }
    Ok(())
}

/// Returns the active config, if logging was started.
pub fn logging_status() -> Option<LoggingConfig> {
    LOGGING_STATE.get().map(|state| state.config.clone())
}

/// `Debug` for debug builds, `Info` for release builds.
pub fn default_log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(LevelFilter::Trace),
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        _ => Err(LoggingError::UnsupportedLevel(level.to_string())),
    }
}

fn start_logger(config: LoggingConfig) -> Result<LoggingState, LoggingError> {
    std::fs::create_dir_all(&config.log_dir).map_err(|source| LoggingError::CreateDir {
        path: config.log_dir.clone(),
        source,
    })?;

    let logger = Logger::with(LogSpecification::builder().default(config.level).build())
        .log_to_file(
            FileSpec::default()
                .directory(config.log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::Direct)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(LoggingError::Backend)?;

    info!(
        "{} version={}",
        LogEvent::new("core", "logging_init", LogStatus::Ok),
        env!("CARGO_PKG_VERSION")
    );

    Ok(LoggingState {
        config,
        _logger: logger,
    })
}
