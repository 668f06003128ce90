//! Conversion between Jira wiki markup and Markdown
//!
//!     This crate converts text written in the Jira/Confluence wiki dialect to Markdown and back,
//!     and can hand the Markdown to a renderer to produce HTML.
//!
//!     TLDR: For rule authors:
//!         - Neither direction parses into a tree. A conversion is an ordered list of rewrite rules (./pipeline.rs) run over the whole text.
//!         - Rule order is semantics. A rule may only rely on the output of rules before it, and must not re-match what later rules produce.
//!         - Anything the regex engine cannot express (back-references, per-block state) is a scan rule backed by a function in ./common.
//!         - Every rule is total: text it does not recognize is copied through unchanged.
//!         - Each rule gets a unit test next to its pipeline, and each direction gets fixture tests under tests/wiki.
//!
//! Architecture
//!
//!     Markdown is the hub. Every format converts its text into Markdown (parse) and Markdown into
//!     its text (serialize), so the registry can convert any parsing format into any serializing one.
//!
//!     This is a pure lib, that is, it powers j2m-cli but is shell agnostic: no code here supposes a
//!     shell environment, be it std print, env vars etc. Logging goes through `tracing` and is
//!     silent unless the host installs a subscriber.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery, selection and conversion
//!     ├── pipeline.rs             # Rule and Pipeline
//!     ├── presentation.rs         # Renderer trait and the comrak bridge
//!     ├── publish.rs              # One-call conversion with optional file output
//!     ├── formats
//!     │   ├── wiki
//!     │   │   ├── parser.rs       # wiki → Markdown rules
//!     │   │   ├── serializer.rs   # Markdown → wiki rules
//!     │   │   └── mod.rs
//!     │   ├── markdown            # identity, the hub
//!     │   └── html                # output only, via comrak
//!     ├── lib.rs
//!     ├── common                  # Shared algorithms behind scan rules
//!
//! Testing
//!     tests
//!     ├── <format>
//!     │   └── <testname>.rs
//!     └── fixtures
//!         ├── <docname>.<ext>
//!         ├── kitchensink.jira
//!         └── kitchensink.md
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Core Algorithms
//!
//!     Most rules are a single pattern. The exceptions live in ./common:
//!     - emphasis.rs: pairs `*`/`_` runs with the same run closing them
//!     - list_nesting.rs: rebuilds nested wiki list markers from Markdown indentation
//!     - tables.rs: header and separator rows
//!
//!     The list reconstruction is the only stateful step, and it resets at every blank line.
//!
//! Round Trips
//!
//!     Headings, emphasis, monospace, decorations, links, images and simple lists survive
//!     wiki → Markdown → wiki unchanged. Code block attributes other than the language, image alt
//!     text and colours are dropped on the way in; see ./formats/wiki/mod.rs for the full table.
pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod pipeline;
pub mod presentation;
pub mod publish;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use formats::wiki::parser::WIKI_TO_MARKDOWN;
pub use formats::wiki::serializer::MARKDOWN_TO_WIKI;
pub use pipeline::{Pipeline, Rule, RuleStep};
pub use presentation::{ComrakRenderer, PresentationBridge, RenderOptions, Renderer};
pub use registry::FormatRegistry;

/// Converts Jira wiki markup to Markdown.
pub fn to_markdown(wiki: &str) -> String {
    formats::wiki::parser::to_markdown(wiki)
}

/// Converts Markdown to Jira wiki markup.
pub fn to_wiki(markdown: &str) -> String {
    formats::wiki::serializer::to_wiki(markdown)
}

/// Renders wiki markup as HTML with the default render options.
pub fn wiki_to_html(wiki: &str) -> Result<String, FormatError> {
    PresentationBridge::<ComrakRenderer>::default().wiki_to_presentation(wiki)
}

/// Renders Markdown as HTML with the default render options.
pub fn markdown_to_html(markdown: &str) -> Result<String, FormatError> {
    PresentationBridge::<ComrakRenderer>::default().markup_to_presentation(markdown)
}
