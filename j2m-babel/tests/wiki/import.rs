//! Import tests for the wiki format (wiki → Markdown)
//!
//! These tests check the Markdown text produced from wiki markup, and that comrak reads it back
//! as the intended structure.

use crate::common::fixture;
use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};
use insta::assert_snapshot;
use j2m_babel::format::Format;
use j2m_babel::formats::wiki::WikiFormat;
use j2m_babel::to_markdown;
use std::collections::HashSet;

/// Helper to convert wiki markup and parse the Markdown with comrak
fn wiki_to_comrak_ast<'a>(wiki: &str, arena: &'a Arena<AstNode<'a>>) -> &'a AstNode<'a> {
    let md = WikiFormat.parse(wiki).expect("wiki import is total");
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    parse_document(arena, &md, &options)
}

/// Helper to recursively collect node types from a comrak AST
fn collect_node_types<'a>(node: &'a AstNode<'a>, types: &mut HashSet<&'static str>) {
    let type_name = match &node.data.borrow().value {
        NodeValue::Heading(_) => "Heading",
        NodeValue::List(_) => "List",
        NodeValue::CodeBlock(_) => "CodeBlock",
        NodeValue::BlockQuote => "BlockQuote",
        NodeValue::Table(_) => "Table",
        NodeValue::Strong => "Strong",
        NodeValue::Emph => "Emph",
        NodeValue::Code(_) => "Code",
        NodeValue::Strikethrough => "Strikethrough",
        NodeValue::Link(_) => "Link",
        NodeValue::Image(_) => "Image",
        _ => "Other",
    };
    types.insert(type_name);

    for child in node.children() {
        collect_node_types(child, types);
    }
}

#[test]
fn test_kitchensink_import() {
    let md = to_markdown(&fixture("kitchensink.jira"));
    assert_eq!(md, fixture("kitchensink.md"));
}

#[test]
fn test_kitchensink_structure() {
    let arena = Arena::new();
    let root = wiki_to_comrak_ast(&fixture("kitchensink.jira"), &arena);

    let mut types = HashSet::new();
    collect_node_types(root, &mut types);

    for expected in [
        "Heading",
        "List",
        "CodeBlock",
        "BlockQuote",
        "Table",
        "Strong",
        "Emph",
        "Code",
        "Strikethrough",
        "Link",
        "Image",
    ] {
        assert!(types.contains(expected), "missing {expected} in {types:?}");
    }
}

#[test]
fn test_heading_levels_survive_comrak() {
    let arena = Arena::new();
    let root = wiki_to_comrak_ast("h1. One\n\nh3. Three\n\nh6. Six", &arena);

    let levels: Vec<u8> = root
        .children()
        .filter_map(|child| match &child.data.borrow().value {
            NodeValue::Heading(heading) => Some(heading.level),
            _ => None,
        })
        .collect();
    assert_eq!(levels, vec![1, 3, 6]);
}

#[test]
fn test_code_block_keeps_only_the_language() {
    let md = to_markdown("{code:python|title=Example|borderStyle=solid}\nprint(1)\n{code}");
    assert_snapshot!(md, @r"
    ```python
    print(1)
    ```
    ");
}

#[test]
fn test_code_block_without_language() {
    assert_eq!(to_markdown("{code}\nx = 1\n{code}"), "```\nx = 1\n```");
}

#[test]
fn test_noformat_becomes_a_fence() {
    assert_eq!(
        to_markdown("{noformat}\n*not bold*\n{noformat}"),
        "```\n**not bold**\n```"
    );
}

#[test]
fn test_links() {
    assert_snapshot!(to_markdown("[https://example.com]"), @"<https://example.com>");
    assert_snapshot!(
        to_markdown("[Example|https://example.com]"),
        @"[Example](https://example.com)"
    );
    assert_snapshot!(to_markdown("!logo.png!"), @"![](logo.png)");
}

#[test]
fn test_blockquote_needs_whitespace() {
    assert_eq!(to_markdown("bq. quoted"), "> quoted");
    assert_eq!(to_markdown("bq.nospace"), "bq.nospace");
}

#[test]
fn test_color_is_stripped() {
    assert_eq!(to_markdown("{color:red}text{color}"), "text");
    assert_eq!(
        to_markdown("a {color:#ff0000}multi\nline{color} b"),
        "a multi\nline b"
    );
}

#[test]
fn test_panel_becomes_single_cell_table() {
    assert_eq!(
        to_markdown("{panel:title=Note}\nBody text\n{panel}"),
        "\n| Note |\n| --- |\n| Body text |"
    );
}

#[test]
fn test_strikethrough_needs_surrounding_whitespace() {
    assert_eq!(to_markdown("a -gone- b"), "a ~~gone~~ b");
    // No whitespace before the opening dash at the start of the text.
    assert_eq!(to_markdown("-gone- b"), "-gone- b");
    // Single character spans are not struck.
    assert_eq!(to_markdown("a -b- c"), "a -b- c");
}

#[test]
fn test_plain_prose_is_untouched() {
    let prose = "Nothing to convert here, just a paragraph of words.\n\nAnd another one.";
    assert_eq!(to_markdown(prose), prose);
}

#[test]
fn test_crlf_table_header() {
    assert_eq!(
        to_markdown("||Name||Value||\r\n|a|1|\r\n"),
        "\n|Name|Value|\n| --- | --- |\r\n|a|1|\r\n"
    );
}

#[test]
fn test_crlf_lists_and_headings() {
    assert_eq!(
        to_markdown("h2. Steps\r\n* a\r\n** b\r\n# one\r\n## two\r\n"),
        "## Steps\r\n* a\r\n  * b\r\n1. one\r\n   1. two\r\n"
    );
}

#[test]
fn test_crlf_blockquote() {
    assert_eq!(to_markdown("bq. quoted\r\nplain\r\n"), "> quoted\r\nplain\r\n");
}
