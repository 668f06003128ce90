//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! Markdown is the hub representation: a format parses its source text into Markdown and
//! serializes Markdown into its own syntax, so any parsing format can be converted into any
//! serializing one.

use crate::error::FormatError;
use std::collections::HashMap;

/// Trait for document formats
///
/// Formats can support parsing (source → Markdown), serialization (Markdown → output), or both.
///
/// # Examples
///
/// ```ignore
/// struct Shouty;
///
/// impl Format for Shouty {
///     fn name(&self) -> &str {
///         "shouty"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, markdown: &str) -> Result<String, FormatError> {
///         Ok(markdown.to_uppercase())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "wiki", "markdown", "html")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["jira"], ["md", "markdown"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → Markdown)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (Markdown → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Convert source text into Markdown
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Convert Markdown into this format
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _markdown: &str) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize Markdown, optionally using extra parameters.
    ///
    /// Formats without parameters can rely on the default implementation, which delegates to
    /// [`Format::serialize`] and rejects any option.
    fn serialize_with_options(
        &self,
        markdown: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(markdown)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
