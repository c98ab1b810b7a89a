//! Logging for texture round-trip tests
//!
//! Every entry goes through one process-wide `Logger`, a colored console
//! logger unless a harness installs its own with `set_logger` to capture
//! entries. Errors carry the file and line they were raised at.

use colored::*;
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Process-wide logger, created on first use
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Destination for log entries
///
/// Implement this trait to route round-trip diagnostics somewhere other than
/// stdout, e.g. into the test report of the surrounding harness.
///
/// # Example
///
/// ```no_run
/// use texture_roundtrip::log::{Logger, LogEntry};
///
/// struct ReportLogger;
///
/// impl Logger for ReportLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Forward to the harness report...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// One log record
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Creation time
    pub timestamp: SystemTime,

    /// Source module (e.g., "roundtrip::Generator", "roundtrip::Validation")
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
    /// Per-subresource detail
    Trace,

    /// Per-texture progress
    Debug,

    /// Validation summaries
    Info,

    /// Channel mismatches
    Warn,

    /// Rejected textures and readbacks (with file:line details)
    Error,
}

/// Console logger used until `set_logger` replaces it
///
/// Lines look like `[timestamp] [SEVERITY] [source] message`, with
/// ` (file:line)` appended when the entry carries a location. WARN and ERROR
/// go to stderr so mismatch reports survive captured test stdout.
pub struct DefaultLogger {
    /// Entries below this severity are dropped
    pub min_severity: LogSeverity,
}

impl Default for DefaultLogger {
    fn default() -> Self {
        Self { min_severity: LogSeverity::Info }
    }
}

impl DefaultLogger {
    /// Logger printing every entry at or above `min_severity`
    pub fn with_min_severity(min_severity: LogSeverity) -> Self {
        Self { min_severity }
    }

    pub(crate) fn format_entry(entry: &LogEntry) -> String {
        let local: DateTime<Local> = entry.timestamp.into();
        let tag = match entry.severity {
            LogSeverity::Trace => "TRACE".dimmed(),
            LogSeverity::Debug => "DEBUG".blue(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow().bold(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let mut line = format!(
            "[{}] [{}] [{}] {}",
            local.format("%H:%M:%S%.3f"),
            tag,
            entry.source.as_str().magenta(),
            entry.message
        );
        if let (Some(file), Some(line_number)) = (entry.file, entry.line) {
            line.push_str(&format!(" ({}:{})", file, line_number));
        }
        line
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        if entry.severity < self.min_severity {
            return;
        }

        let line = Self::format_entry(entry);
        if entry.severity >= LogSeverity::Warn {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

// ===== GLOBAL LOGGER API =====

fn global_logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::default())))
}

/// Replace the global logger
///
/// # Example
///
/// ```no_run
/// use texture_roundtrip::log::{self, Logger, LogEntry};
///
/// struct Silent;
/// impl Logger for Silent {
///     fn log(&self, _entry: &LogEntry) {}
/// }
///
/// log::set_logger(Silent);
/// ```
pub fn set_logger<L: Logger + 'static>(logger: L) {
    if let Ok(mut lock) = global_logger().write() {
        *lock = Box::new(logger);
    }
}

/// Reinstall the default console logger
pub fn reset_logger() {
    if let Ok(mut lock) = global_logger().write() {
        *lock = Box::new(DefaultLogger::default());
    }
}

/// Log a message without file:line information
///
/// Used by the roundtrip_trace!, roundtrip_debug!, roundtrip_info! and
/// roundtrip_warn! macros.
pub fn log(severity: LogSeverity, source: &str, message: String) {
    if let Ok(lock) = global_logger().read() {
        lock.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        });
    }
}

/// Log a message with file:line information
///
/// Used by roundtrip_error! and the error-building macros.
pub fn log_detailed(
    severity: LogSeverity,
    source: &str,
    message: String,
    file: &'static str,
    line: u32,
) {
    if let Ok(lock) = global_logger().read() {
        lock.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: Some(file),
            line: Some(line),
        });
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
#[macro_export]
macro_rules! roundtrip_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log(
            $crate::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
///
/// # Example
///
/// ```no_run
/// # use texture_roundtrip::roundtrip_debug;
/// roundtrip_debug!("roundtrip::Generator", "Filled {} subresources", 8);
/// ```
#[macro_export]
macro_rules! roundtrip_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log(
            $crate::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
#[macro_export]
macro_rules! roundtrip_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log(
            $crate::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
#[macro_export]
macro_rules! roundtrip_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log(
            $crate::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message tagged with the calling file and line
///
/// # Example
///
/// ```no_run
/// # use texture_roundtrip::roundtrip_error;
/// roundtrip_error!("roundtrip::Validation", "Readback too small: {} bytes", 12);
/// ```
#[macro_export]
macro_rules! roundtrip_error {
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
