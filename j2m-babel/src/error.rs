//! Error types for format operations
//!
//! The rewrite pipelines themselves never fail: malformed markup passes through
//! as literal text. Errors only come from format lookup, unsupported
//! directions, the HTML renderer and file output.

use std::fmt;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// The rendering service failed to produce HTML
    RenderError(String),
    /// Error while producing or writing the output
    SerializationError(String),
    /// Format does not support the requested direction or option
    NotSupported(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::RenderError(msg) => write!(f, "Render error: {msg}"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            FormatError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}
