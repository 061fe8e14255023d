//! Global error handling for textdump
//!
//! This module provides a centralized error type shared by the scanner,
//! the writer and the aggregator.

use std::io;
use thiserror::Error;

/// Global error type for textdump operations
#[derive(Error, Debug)]
pub enum TextDumpError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Target path missing or not a directory
    #[error("The directory '{0}' does not exist. Please provide a valid directory path.")]
    InvalidTarget(String),

    /// Scanner errors
    #[error("Scanner error: {0}")]
    Scanner(String),
}

impl TextDumpError {
    /// Whether this error only reports a bad target rather than a failed run
    pub fn is_invalid_target(&self) -> bool {
        matches!(self, TextDumpError::InvalidTarget(_))
    }
}

/// Specialized Result type for textdump operations
pub type Result<T> = std::result::Result<T, TextDumpError>;

/// Creates a TextDumpError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::TextDumpError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

/// Extension trait for adding context to errors
pub trait ResultExt<T, E> {
    /// Add additional context to an error
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T> ResultExt<T, io::Error> for std::result::Result<T, io::Error> {
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|e| {
            let context = f();
            TextDumpError::Io(io::Error::new(e.kind(), format!("{}: {}", context, e)))
        })
    }
}
