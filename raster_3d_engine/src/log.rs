//! Logging system for the Raster3D engine
//!
//! - Customizable logger via the `Logger` trait
//! - Severity levels (Trace, Debug, Info, Warn, Error) with a global threshold
//! - Colored console output by default
//! - File and line information for ERROR logs

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use chrono::{DateTime, Local};
use colored::*;

/// Logger trait for custom logging implementations
///
/// # Example
///
/// ```no_run
/// use raster_3d_engine::raster3d::log::{self, Logger, LogEntry};
///
/// struct CountingLogger;
///
/// impl Logger for CountingLogger {
///     fn log(&self, entry: &LogEntry) {
///         eprintln!("{}: {}", entry.source, entry.message);
///     }
/// }
///
/// log::set_logger(CountingLogger);
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "raster3d::Device", "raster3d::Texture")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-draw details
    Trace,

    /// Development/debugging information
    Debug,

    /// Important informational messages
    Info,

    /// Warning messages (recovered conditions)
    Warn,

    /// Error messages, always reported with file:line
    Error,
}

/// Default logger: colored console output
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            eprintln!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, severity_str, source, entry.message, file, line
            );
        } else {
            eprintln!("[{}] [{}] [{}] {}", timestamp, severity_str, source, entry.message);
        }
    }
}

// ===== GLOBAL LOGGER =====

struct LoggerState {
    logger: Box<dyn Logger>,
    min_severity: LogSeverity,
}

static LOGGER: OnceLock<RwLock<LoggerState>> = OnceLock::new();

fn logger_state() -> &'static RwLock<LoggerState> {
    LOGGER.get_or_init(|| {
        RwLock::new(LoggerState {
            logger: Box::new(DefaultLogger),
            min_severity: LogSeverity::Info,
        })
    })
}

/// Replace the global logger
pub fn set_logger<L: Logger + 'static>(logger: L) {
    if let Ok(mut state) = logger_state().write() {
        state.logger = Box::new(logger);
    }
}

/// Restore `DefaultLogger` and the default `Info` threshold
pub fn reset_logger() {
    if let Ok(mut state) = logger_state().write() {
        state.logger = Box::new(DefaultLogger);
        state.min_severity = LogSeverity::Info;
    }
}

/// Drop every entry below `severity` before it reaches the logger
pub fn set_min_severity(severity: LogSeverity) {
    if let Ok(mut state) = logger_state().write() {
        state.min_severity = severity;
    }
}

/// Current severity threshold
pub fn min_severity() -> LogSeverity {
    logger_state()
        .read()
        .map(|state| state.min_severity)
        .unwrap_or(LogSeverity::Info)
}

/// Log without file:line (used by `raster_trace!` .. `raster_warn!`)
pub fn log(severity: LogSeverity, source: &str, message: String) {
    dispatch(severity, source, message, None, None);
}

/// Log with file:line (used by `raster_error!` and `raster_err!`)
pub fn log_detailed(
    severity: LogSeverity,
    source: &str,
    message: String,
    file: &'static str,
    line: u32,
) {
    dispatch(severity, source, message, Some(file), Some(line));
}

fn dispatch(
    severity: LogSeverity,
    source: &str,
    message: String,
    file: Option<&'static str>,
    line: Option<u32>,
) {
    if let Ok(state) = logger_state().read() {
        if severity < state.min_severity {
            return;
        }
        state.logger.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file,
            line,
        });
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
#[macro_export]
macro_rules! raster_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log($crate::log::LogSeverity::Trace, $source, format!($($arg)*))
    };
}

/// Log a DEBUG message
#[macro_export]
macro_rules! raster_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log($crate::log::LogSeverity::Debug, $source, format!($($arg)*))
    };
}

/// Log an INFO message
#[macro_export]
macro_rules! raster_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log($crate::log::LogSeverity::Info, $source, format!($($arg)*))
    };
}

/// Log a WARN message
#[macro_export]
macro_rules! raster_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log($crate::log::LogSeverity::Warn, $source, format!($($arg)*))
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! raster_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

/// Log an ERROR and build the matching `Error::InvalidResource`
///
/// ```ignore
/// let index = indices.get(i).ok_or_else(|| raster_err!("raster3d::VertexBuffer", "no index {}", i))?;
/// ```
#[macro_export]
macro_rules! raster_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::log::log_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::raster3d::Error::InvalidResource(message)
    }};
}

/// Log an ERROR and return `Err(Error::InvalidResource)` from the current function
#[macro_export]
macro_rules! raster_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::raster_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
