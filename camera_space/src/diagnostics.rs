/// Diagnostics - process-wide logger slot
///
/// The transform functions hold no state; the logger is the only global in
/// the crate. It is stored behind a RwLock so any thread can log while a
/// caller swaps the sink.
///
/// The default sink prints WARN and ERROR only. TRACE and DEBUG entries are
/// reported for valid inputs (points behind the camera, `w == 0`) and stay
/// silent until a caller installs a logger that wants them.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, SeverityFilter};

/// Global logger (initialized with the filtered DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn logger_slot() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(default_logger())))
}

/// Logger installed at startup and by `Diagnostics::reset_logger`
pub(crate) fn default_logger() -> SeverityFilter<DefaultLogger> {
    SeverityFilter::new(DefaultLogger, Diagnostics::DEFAULT_MIN_SEVERITY)
}

/// Entry point for configuring and feeding the crate logger
pub struct Diagnostics;

impl Diagnostics {
    /// Lowest severity the default logger prints
    pub const DEFAULT_MIN_SEVERITY: LogSeverity = LogSeverity::Warn;

    /// Set a custom logger
    ///
    /// # Example
    ///
    /// ```no_run
    /// use camera_space::camspace::{Diagnostics, log::{Logger, LogEntry}};
    ///
    /// struct FileLogger;
    /// impl Logger for FileLogger {
    ///     fn log(&self, entry: &LogEntry) {
    ///         // Write to file...
    ///     }
    /// }
    ///
    /// Diagnostics::set_logger(FileLogger);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_slot().write() {
            *lock = Box::new(logger);
        }
        crate::space_info!("camspace::Diagnostics", "Logger installed");
    }

    /// Reset logger to default (DefaultLogger filtered at WARN)
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_slot().write() {
            *lock = Box::new(default_logger());
        }
    }

    /// Logging method for simple logs without file:line
    ///
    /// Used by the space_trace!, space_debug!, space_info! and space_warn! macros.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = logger_slot().read() {
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

    /// Logging method with file:line information
    ///
    /// Used by the space_error! macro to include source location.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = logger_slot().read() {
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
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
