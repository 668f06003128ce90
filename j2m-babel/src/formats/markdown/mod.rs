//! Markdown format implementation
//!
//! Markdown is the hub representation every other format converts through, so both directions
//! are the identity. Registering it as a format lets the registry convert to and from Markdown
//! with the same `convert(source, from, to)` call used for every other pair.

use crate::error::FormatError;
use crate::format::Format;

/// Format implementation for Markdown
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "CommonMark Markdown format"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<String, FormatError> {
        Ok(source.to_string())
    }

    fn serialize(&self, markdown: &str) -> Result<String, FormatError> {
        Ok(markdown.to_string())
    }
}
