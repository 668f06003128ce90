//! HTML format implementation
//!
//! HTML is an output-only format: Markdown is rendered by the [`ComrakRenderer`], so converting
//! wiki markup to HTML is wiki → Markdown → comrak.
//!
//! # Options
//!
//! `serialize_with_options` accepts boolean overrides for the renderer:
//!
//! | Option        | Render option            | Default |
//! |---------------|--------------------------|---------|
//! | `hardbreaks`  | `preserve_line_breaks`   | true    |
//! | `smart`       | `smart_punctuation`      | true    |
//! | `unsafe`      | `allow_raw_html`         | true    |
//!
//! Raw HTML has to stay enabled for `<ins>`, `<sup>` and `<sub>` produced from wiki
//! decorations to survive rendering.

use crate::error::FormatError;
use crate::format::Format;
use crate::presentation::{ComrakRenderer, RenderOptions, Renderer};
use std::collections::HashMap;

/// Format implementation for HTML
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlFormat {
    options: RenderOptions,
}

impl HtmlFormat {
    /// Create a new HTML format with the given render options
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML rendered from Markdown"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, markdown: &str) -> Result<String, FormatError> {
        ComrakRenderer::new(self.options).render(markdown)
    }

    fn serialize_with_options(
        &self,
        markdown: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut render = self.options;
        for (key, value) in options {
            let slot = match key.as_str() {
                "hardbreaks" => &mut render.preserve_line_breaks,
                "smart" => &mut render.smart_punctuation,
                "unsafe" => &mut render.allow_raw_html,
                _ => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'html' does not support the '{key}' parameter"
                    )))
                }
            };
            *slot = parse_flag(key, value)?;
        }
        ComrakRenderer::new(render).render(markdown)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, FormatError> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => Err(FormatError::SerializationError(format!(
            "Invalid boolean value '{other}' for '{key}'"
        ))),
    }
}
