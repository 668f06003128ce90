//! Document publishing pipeline.
//!
//! Provides a high-level API for converting a document between formats in one call. This module
//! bridges the gap between the format registry and file I/O, handling both in-memory and
//! file-based output.
//!
//! For more control over the conversion process, use [`FormatRegistry`] directly.

use crate::error::FormatError;
use crate::registry::FormatRegistry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Specifies how to publish a document.
///
/// ```ignore
/// let spec = PublishSpec::new(&source, "wiki", "html")
///     .with_output_path("ticket.html")
///     .with_option("smart", "false");
/// ```
///
/// If no output path is provided, the converted text is returned in memory.
#[derive(Debug)]
pub struct PublishSpec<'a> {
    /// Source text in the `from` format.
    pub source: &'a str,
    /// Source format name (e.g., "wiki", "markdown").
    pub from: &'a str,
    /// Target format name (e.g., "markdown", "wiki", "html").
    pub to: &'a str,
    /// Optional file path for writing output.
    pub output: Option<PathBuf>,
    /// Serializer options (e.g., `hardbreaks` for HTML).
    pub options: HashMap<String, String>,
}

impl<'a> PublishSpec<'a> {
    pub fn new(source: &'a str, from: &'a str, to: &'a str) -> Self {
        Self {
            source,
            from,
            to,
            output: None,
            options: HashMap::new(),
        }
    }

    /// Sets the output file path. If provided, content is written to disk.
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// The output from a successful publish operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    /// Content held in memory (no output path was given).
    InMemory(String),
    /// Path to the written file.
    File(PathBuf),
}

/// Result of a publish operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    pub artifact: PublishArtifact,
}

/// Publishes a document with the default format registry.
///
/// # Errors
///
/// Returns [`FormatError`] if either format is unknown or lacks the needed direction, if the
/// serializer rejects an option, or if writing the output file fails.
pub fn publish(spec: PublishSpec<'_>) -> Result<PublishResult, FormatError> {
    publish_with_registry(&FormatRegistry::with_defaults(), spec)
}

/// Publishes a document using the given registry.
pub fn publish_with_registry(
    registry: &FormatRegistry,
    spec: PublishSpec<'_>,
) -> Result<PublishResult, FormatError> {
    let text = registry.convert_with_options(spec.source, spec.from, spec.to, &spec.options)?;
    let artifact = match spec.output {
        Some(path) => PublishArtifact::File(write_to_path(path, text)?),
        None => PublishArtifact::InMemory(text),
    };
    Ok(PublishResult { artifact })
}

fn write_to_path(path: PathBuf, text: String) -> Result<PathBuf, FormatError> {
    fs::write(&path, text)
        .map(|_| path.clone())
        .map_err(|err| FormatError::SerializationError(format!("{}: {err}", path.display())))
}
