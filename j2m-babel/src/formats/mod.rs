//! Format implementations
//!
//! This module contains all format implementations. Each one converts between
//! its own text representation and Markdown.

pub mod html;
pub mod markdown;
pub mod wiki;

pub use html::HtmlFormat;
pub use markdown::MarkdownFormat;
pub use wiki::WikiFormat;
