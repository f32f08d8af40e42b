//! Logging macros for convenient logging throughout the codebase
//!
//! These macros provide a simple interface to the logging system:
//! - `log_debug!(...)` - Log debug messages
//! - `log_info!(...)` - Log informational messages
//! - `log_warn!(...)` - Log warning messages
//! - `log_error!(...)` - Log error messages

/// Log a debug message (only when debug mode is enabled)
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        let logger = $crate::log::Logger::new();
        let _ = logger.log_debug(&format!($($arg)*));
    };
}

/// Log an informational message (only when verbose or debug mode is enabled)
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        let logger = $crate::log::Logger::new();
        let _ = logger.log_info(&format!($($arg)*));
    };
}

/// Log a warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        let logger = $crate::log::Logger::new();
        let _ = logger.log_warn(&format!($($arg)*));
    };
}

/// Log an error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        let logger = $crate::log::Logger::new();
        let _ = logger.log_error(&format!($($arg)*));
    };
}
