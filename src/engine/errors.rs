//! Engine error types
//!
//! All recognized inference failures (conflicts, invalid operator input,
//! iteration exhaustion) are handled inside the loop and surfaced as
//! reports; the only error that propagates out of a session is a broken
//! operator channel.

use std::fmt;

use crate::resolve::ResolveError;

/// Engine error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineErrorCode {
    /// The fact resolver failed (operator channel broken)
    ResolveFailed,
}

impl EngineErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ResolveFailed => "FW_ENGINE_RESOLVE_FAILED",
        }
    }
}

/// Engine error
#[derive(Debug)]
pub struct EngineError {
    code: EngineErrorCode,
    message: String,
}

impl EngineError {
    /// Create a new engine error
    pub fn new(code: EngineErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
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

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for EngineError {}

impl From<ResolveError> for EngineError {
    fn from(e: ResolveError) -> Self {
        Self::new(EngineErrorCode::ResolveFailed, e.to_string())
    }
}

/// Engine result type
pub type EngineResult<T> = Result<T, EngineError>;
