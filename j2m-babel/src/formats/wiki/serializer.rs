//! Wiki export (Markdown → wiki markup)
//!
//! Tables are rewritten first, while their separator rows still look like
//! Markdown. Emphasis must be converted before the list rules, since both use
//! `*`, and headings must be converted before ordered lists produce their own
//! `#` markers. Nested list depth is only fixed up once every list item has a
//! marker run.

use crate::common::emphasis::{self, EmphasisSpan};
use crate::common::list_nesting::reindent_nested_lists;
use crate::common::tables::delimited_cells;
use crate::pipeline::{Pipeline, Rule};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// HTML tags with a single-character wiki delimiter, in match priority order.
pub const INLINE_TAGS: &[(&str, &str)] = &[("del", "-"), ("ins", "+"), ("sup", "^"), ("sub", "~")];

/// The Markdown → wiki rule pipeline.
pub static MARKDOWN_TO_WIKI: Lazy<Pipeline> = Lazy::new(|| {
    Pipeline::new(
        "markdown-to-wiki",
        vec![
            Rule::computed(
                "table",
                r"(?m)^\n((?:\|.*?)+\|)[ \t]*\n((?:\|\s*?-{3,}\s*?)+\|)[ \t]*\n((?:(?:\|.*?)+\|[ \t]*\n)*)$",
                table,
            ),
            Rule::scan("emphasis", emphasis_to_wiki),
            Rule::computed("heading", r"(?m)^(#+)(.*?)$", heading),
            Rule::computed("setext-heading", r"(?m)^(.*?)\n([=-]+)$", setext_heading),
            Rule::computed("ordered-list", r"(?m)^([ \t]*)\d+\.\s+", ordered_item),
            Rule::computed("unordered-list", r"(?m)^([ \t]*)[*\-+]\s+", unordered_item),
            Rule::scan("nested-lists", reindent_nested_lists),
            Rule::scan("inline-tags", inline_tags),
            Rule::template("strikethrough", r"(\s+)~~(.*?)~~(\s+)", "${1}-${2}-${3}"),
            Rule::computed("code-block", r"```(.+\n)?((?s:.)*?)```", code_block),
            Rule::template("inline-code", r"`([^`]+)`", "{{${1}}}"),
            Rule::template("image", r"!\[[^\]]*\]\(([^)]+)\)", "!${1}!"),
            Rule::template("named-link", r"\[([^\]]+)\]\(([^)]+)\)", "[${1}|${2}]"),
            Rule::template("autolink", r"<([^>]+)>", "[${1}]"),
            Rule::template("blockquote", r"(?m)^>", "bq."),
        ],
    )
});

/// `<tag>content</tag>` for every tag in [`INLINE_TAGS`], one group per tag.
static INLINE_TAG: Lazy<Regex> = Lazy::new(|| {
    let alternatives: Vec<String> = INLINE_TAGS
        .iter()
        .map(|(tag, _)| format!("<{tag}>(.*?)</{tag}>"))
        .collect();
    Regex::new(&alternatives.join("|"))
        .unwrap_or_else(|err| panic!("invalid inline tag pattern: {err}"))
});

/// The single row of a one-cell table, without its outer bars.
static PANEL_ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\|(.*)[ \t]*\|").unwrap_or_else(|err| panic!("invalid panel row pattern: {err}"))
});

/// Convert Markdown to wiki markup.
pub fn to_wiki(source: &str) -> String {
    MARKDOWN_TO_WIKI.run(source)
}

fn table(caps: &Captures) -> String {
    let headers = delimited_cells(&caps[1]);
    let separators = delimited_cells(&caps[2]);
    if headers.len() != separators.len() {
        return caps[0].to_string();
    }

    let rows = &caps[3];
    if headers.len() == 1 && rows.split('\n').count() == 2 {
        let body = PANEL_ROW.replacen(rows, 1, "${1}");
        return format!(
            "{{panel:title={}}}\n{}\n{{panel}}\n",
            headers[0].trim(),
            body.trim()
        );
    }

    format!("||{}||\n{rows}", headers.join("||"))
}

fn emphasis_to_wiki(text: &str) -> String {
    emphasis::replace_spans(text, |span: &EmphasisSpan<'_>| {
        let content = span.content;
        match span.wrapper.len() {
            1 => format!("_{content}_"),
            2 => format!("*{content}*"),
            3 => format!("_*{content}*_"),
            _ => format!("{0}{content}{0}", span.wrapper),
        }
    })
}

fn heading(caps: &Captures) -> String {
    format!("h{}.{}", caps[1].len(), &caps[2])
}

fn setext_heading(caps: &Captures) -> String {
    let level = if caps[2].starts_with('=') { 1 } else { 2 };
    format!("h{level}. {}", &caps[1])
}

fn ordered_item(caps: &Captures) -> String {
    format!("{} ", "#".repeat(caps[1].len() / 3 + 1))
}

fn unordered_item(caps: &Captures) -> String {
    // Odd indentation rounds down to the enclosing level.
    let indent = caps[1].len() & !1;
    format!("{} ", "*".repeat(indent / 2 + 1))
}

fn inline_tags(text: &str) -> String {
    INLINE_TAG
        .replace_all(text, |caps: &Captures| {
            INLINE_TAGS
                .iter()
                .enumerate()
                .find_map(|(index, (_, delimiter))| {
                    caps.get(index + 1)
                        .map(|content| format!("{delimiter}{}{delimiter}", content.as_str()))
                })
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn code_block(caps: &Captures) -> String {
    let open = match caps.get(1) {
        Some(language) => format!("{{code:{}}}\n", language.as_str().replace('\n', "")),
        None => "{code}".to_string(),
    };
    format!("{open}{}{{code}}", &caps[2])
}
