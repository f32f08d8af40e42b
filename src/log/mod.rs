mod errors;
mod formatter;
mod macros;

pub use errors::LogError;

use formatter::LogFormatter;
use std::{
    io::{self, Write},
    sync::atomic::{AtomicBool, Ordering},
};

// Global flags for enabling different diagnostic levels
static VERBOSE_MODE: AtomicBool = AtomicBool::new(false);
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Stderr diagnostics writer. Debug lines carry timestamps, everything else
/// is a bare `[LEVEL] message` so interactive output stays readable.
#[derive(Clone)]
pub struct Logger {
    formatter: LogFormatter,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            formatter: LogFormatter::new(DEBUG_MODE.load(Ordering::SeqCst), true),
        }
    }

    pub fn enable_verbose(&self) {
        VERBOSE_MODE.store(true, Ordering::SeqCst);
    }

    pub fn enable_debug(&self) {
        DEBUG_MODE.store(true, Ordering::SeqCst);
    }

    pub fn is_verbose_enabled(&self) -> bool {
        VERBOSE_MODE.load(Ordering::SeqCst) || self.is_debug_enabled()
    }

    pub fn is_debug_enabled(&self) -> bool {
        DEBUG_MODE.load(Ordering::SeqCst)
    }

    pub fn log_debug(&self, message: &str) -> Result<(), LogError> {
        if self.is_debug_enabled() {
            self.write(LogLevel::Debug, message)?;
        }
        Ok(())
    }

    pub fn log_info(&self, message: &str) -> Result<(), LogError> {
        if self.is_verbose_enabled() {
            self.write(LogLevel::Info, message)?;
        }
        Ok(())
    }

    pub fn log_warn(&self, message: &str) -> Result<(), LogError> {
        self.write(LogLevel::Warning, message)
    }

    pub fn log_error(&self, message: &str) -> Result<(), LogError> {
        self.write(LogLevel::Error, message)
    }

    fn write(&self, level: LogLevel, message: &str) -> Result<(), LogError> {
        let line = self.formatter.format(level, message);
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "{}", line)?;
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
