//! Resolver error types

use std::fmt;
use std::io;

/// Resolver error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveErrorCode {
    /// Operator channel I/O failure (stdin/stdout)
    IoError,
}

impl ResolveErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::IoError => "FW_RESOLVE_IO_ERROR",
        }
    }
}

/// Resolver error
#[derive(Debug)]
pub struct ResolveError {
    code: ResolveErrorCode,
    message: String,
}

impl ResolveError {
    /// Create a new resolver error
    pub fn new(code: ResolveErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(ResolveErrorCode::IoError, msg)
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for ResolveError {}

impl From<io::Error> for ResolveError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

/// Resolver result type
pub type ResolveResult<T> = Result<T, ResolveError>;
