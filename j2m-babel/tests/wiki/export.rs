//! Export tests for the wiki format (Markdown → wiki)

use crate::common::fixture;
use insta::assert_snapshot;
use j2m_babel::format::Format;
use j2m_babel::formats::wiki::WikiFormat;
use j2m_babel::to_wiki;

#[test]
fn test_acceptance_criteria_document() {
    let wiki = WikiFormat
        .serialize(&fixture("acceptance-criteria.md"))
        .expect("wiki export is total");
    assert_eq!(wiki, fixture("acceptance-criteria.jira"));
}

#[test]
fn test_mixed_list_keeps_parent_marker() {
    assert_snapshot!(to_wiki("1. one\n   * sub\n2. two"), @r"
    # one
    #* sub
    # two
    ");
}

#[test]
fn test_headings() {
    assert_eq!(to_wiki("## Section"), "h2. Section");
    assert_eq!(to_wiki("Title\n====="), "h1. Title");
    assert_eq!(to_wiki("Subtitle\n--------"), "h2. Subtitle");
}

#[test]
fn test_emphasis_by_run_length() {
    assert_eq!(to_wiki("*italic* and _also_"), "_italic_ and _also_");
    assert_eq!(to_wiki("**bold** and __bold__"), "*bold* and *bold*");
    assert_eq!(to_wiki("***both***"), "_*both*_");
    // Longer runs are left alone.
    assert_eq!(to_wiki("****four****"), "****four****");
}

#[test]
fn test_unterminated_emphasis_is_literal() {
    assert_eq!(to_wiki("**never closed"), "**never closed");
}

#[test]
fn test_inline_tags() {
    assert_eq!(
        to_wiki("<ins>new</ins> <del>old</del> x<sup>2</sup> H<sub>2</sub>O"),
        "+new+ -old- x^2^ H~2~O"
    );
}

#[test]
fn test_strikethrough_needs_surrounding_whitespace() {
    assert_eq!(to_wiki("keep ~~this~~ out"), "keep -this- out");
    assert_eq!(to_wiki("~~start~~ of line"), "~~start~~ of line");
}

#[test]
fn test_code() {
    assert_eq!(to_wiki("use `cargo`"), "use {{cargo}}");
    assert_eq!(
        to_wiki("```sh\ncargo test\n```"),
        "{code:sh}\ncargo test\n{code}"
    );
}

#[test]
fn test_links_and_images() {
    assert_eq!(to_wiki("![Alt text](pic.png)"), "!pic.png!");
    assert_eq!(to_wiki("[Docs](https://docs.rs)"), "[Docs|https://docs.rs]");
    assert_eq!(to_wiki("<https://docs.rs>"), "[https://docs.rs]");
}

#[test]
fn test_blockquote() {
    assert_eq!(to_wiki("> quoted"), "bq. quoted");
}
