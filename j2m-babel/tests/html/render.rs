//! Rendering tests (wiki / Markdown → HTML through comrak)

use crate::common::fixture;
use j2m_babel::{
    markdown_to_html, wiki_to_html, ComrakRenderer, FormatError, FormatRegistry,
    PresentationBridge, RenderOptions, Renderer,
};
use std::collections::HashMap;

#[test]
fn test_kitchensink_html() {
    let html = wiki_to_html(&fixture("kitchensink.jira")).expect("comrak renders");

    for fragment in [
        "<h1>Release notes</h1>",
        "<h2>Highlights</h2>",
        "<strong>Faster</strong>",
        "<em>Clearer</em>",
        "<code>cache</code>",
        "<blockquote>",
        "<ins>inserted</ins>",
        "<sup>2</sup>",
        "<sub>2</sub>",
        "<del>struck</del>",
        "<a href=\"https://example.com/docs\">the docs</a>",
        "<img src=\"diagram.png\" alt=\"\" />",
        "<code class=\"language-rust\">",
        "<th>Name</th>",
        "<td>b</td>",
    ] {
        assert!(html.contains(fragment), "missing {fragment} in:\n{html}");
    }
    assert!(!html.contains("{color"));
}

#[test]
fn test_panel_renders_as_table() {
    let html = wiki_to_html("{panel:title=Note}\nBody text\n{panel}").unwrap();
    assert!(html.contains("<th>Note</th>"));
    assert!(html.contains("<td>Body text</td>"));
}

#[test]
fn test_line_breaks_are_preserved_by_default() {
    assert_eq!(
        wiki_to_html("line one\nline two").unwrap(),
        "<p>line one<br />\nline two</p>\n"
    );
}

#[test]
fn test_smart_punctuation_follows_options() {
    let smart = markdown_to_html("\"quoted\"").unwrap();
    assert!(smart.contains('\u{201c}'));

    let plain = PresentationBridge::new(ComrakRenderer::new(RenderOptions {
        smart_punctuation: false,
        ..RenderOptions::default()
    }))
    .markup_to_presentation("\"quoted\"")
    .unwrap();
    assert!(!plain.contains('\u{201c}'));
}

#[test]
fn test_bridges_with_different_options_coexist() {
    let keep = PresentationBridge::new(ComrakRenderer::default());
    let join = PresentationBridge::new(ComrakRenderer::new(RenderOptions {
        preserve_line_breaks: false,
        ..RenderOptions::default()
    }));

    assert!(keep.wiki_to_presentation("a\nb").unwrap().contains("<br />"));
    assert!(!join.wiki_to_presentation("a\nb").unwrap().contains("<br />"));
    assert!(keep.wiki_to_presentation("a\nb").unwrap().contains("<br />"));
}

#[test]
fn test_renderer_failure_reaches_the_caller() {
    struct Unavailable;
    impl Renderer for Unavailable {
        fn render(&self, _markdown: &str) -> Result<String, FormatError> {
            Err(FormatError::RenderError("service unavailable".into()))
        }
    }

    let err = PresentationBridge::new(Unavailable)
        .wiki_to_presentation("h1. Title")
        .unwrap_err();
    assert_eq!(err.to_string(), "Render error: service unavailable");
}

#[test]
fn test_registry_html_options() {
    let registry = FormatRegistry::with_defaults();
    let mut options = HashMap::new();
    options.insert("hardbreaks".to_string(), "false".to_string());

    let html = registry
        .convert_with_options("a\nb", "wiki", "html", &options)
        .unwrap();
    assert_eq!(html, "<p>a\nb</p>\n");
}
