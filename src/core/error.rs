//! Custom error types for Codeclass
//!
//! Provides a unified error handling system across all modules.

use thiserror::Error;

/// Main error type for Codeclass operations
#[derive(Error, Debug)]
pub enum CodeclassError {
    /// Input stream closed before a line was delivered
    #[error("end of input: the input stream closed before a name was read")]
    EndOfInput,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Handout id not present in the registry
    #[error("Unknown handout '{0}'. Run with --list to see available handouts")]
    UnknownHandout(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for Codeclass operations
pub type Result<T> = std::result::Result<T, CodeclassError>;

impl CodeclassError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an unknown-handout error
    pub fn unknown_handout(id: impl Into<String>) -> Self {
        Self::UnknownHandout(id.into())
    }
}
