//! Presentation bridge: wiki or Markdown text to HTML.
//!
//! Rendering Markdown is delegated to `comrak` behind the [`Renderer`] trait. The renderer's
//! options are an explicit value given at construction time, so two bridges with different
//! settings can coexist in one process. Renderer errors are returned unchanged; nothing here
//! retries.

use crate::error::FormatError;
use crate::formats::wiki::parser::to_markdown;
use comrak::{format_html, parse_document, Arena, ComrakOptions};
use serde::{Deserialize, Serialize};

/// Knobs passed to the rendering service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Render single newlines inside a paragraph as `<br />`
    pub preserve_line_breaks: bool,
    /// Curly quotes, en/em dashes and ellipses
    pub smart_punctuation: bool,
    /// Keep inline HTML such as `<ins>` and `<sup>` instead of omitting it
    pub allow_raw_html: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            preserve_line_breaks: true,
            smart_punctuation: true,
            allow_raw_html: true,
        }
    }
}

/// Something that turns Markdown into presentation markup.
pub trait Renderer {
    fn render(&self, markdown: &str) -> Result<String, FormatError>;
}

/// [`Renderer`] backed by comrak, with GitHub-flavoured tables, strikethrough and autolinks.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComrakRenderer {
    options: RenderOptions,
}

impl ComrakRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    fn comrak_options(&self) -> ComrakOptions<'static> {
        let mut options = ComrakOptions::default();
        options.extension.table = true;
        options.extension.strikethrough = true;
        options.extension.autolink = true;
        options.render.hardbreaks = self.options.preserve_line_breaks;
        options.parse.smart = self.options.smart_punctuation;
        options.render.unsafe_ = self.options.allow_raw_html;
        options
    }
}

impl Renderer for ComrakRenderer {
    fn render(&self, markdown: &str) -> Result<String, FormatError> {
        let arena = Arena::new();
        let options = self.comrak_options();
        let root = parse_document(&arena, markdown, &options);

        let mut output = Vec::new();
        format_html(root, &options, &mut output)
            .map_err(|e| FormatError::RenderError(format!("Comrak rendering failed: {e}")))?;

        String::from_utf8(output)
            .map_err(|e| FormatError::RenderError(format!("UTF-8 conversion failed: {e}")))
    }
}

/// Composes the wiki transducer with a [`Renderer`].
#[derive(Debug, Clone, Default)]
pub struct PresentationBridge<R = ComrakRenderer> {
    renderer: R,
}

impl<R: Renderer> PresentationBridge<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Convert wiki markup to Markdown, then render it.
    pub fn wiki_to_presentation(&self, wiki: &str) -> Result<String, FormatError> {
        self.renderer.render(&to_markdown(wiki))
    }

    /// Render Markdown directly.
    pub fn markup_to_presentation(&self, markdown: &str) -> Result<String, FormatError> {
        self.renderer.render(markdown)
    }
}
