//! Logging-related error types

use std::{error::Error, fmt, io};

/// Errors that can occur while writing diagnostics
#[derive(Debug)]
pub enum LogError {
    /// I/O error when writing to the error stream
    IoError(io::Error),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl Error for LogError {}

impl From<io::Error> for LogError {
    fn from(err: io::Error) -> Self {
        LogError::IoError(err)
    }
}
