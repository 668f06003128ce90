//! Wiki import (wiki markup → Markdown)
//!
//! Lists go first so that their `*` and `#` markers are gone before the bold
//! and heading rules look at line starts. Emphasis runs before links so link
//! brackets are never read as emphasis, and the table rules run last because
//! the panel rule produces table rows that the header rule must leave alone.

use crate::common::tables::markdown_header;
use crate::pipeline::{Pipeline, Rule};
use once_cell::sync::Lazy;
use regex::Captures;

/// The wiki → Markdown rule pipeline.
pub static WIKI_TO_MARKDOWN: Lazy<Pipeline> = Lazy::new(|| {
    Pipeline::new(
        "wiki-to-markdown",
        vec![
            Rule::computed("unordered-list", r"(?mR)^[ \t]*(\*+)\s+", unordered_item),
            Rule::computed("ordered-list", r"(?mR)^[ \t]*(#+)\s+", ordered_item),
            Rule::computed("heading", r"(?mR)^h([0-6])\.(.*)$", heading),
            Rule::template("bold", r"\*(\S.*)\*", "**${1}**"),
            Rule::template("italic", r"_(\S.*)_", "*${1}*"),
            Rule::template("monospace", r"\{\{([^}]+)\}\}", "`${1}`"),
            Rule::template("insert", r"\+([^+]*)\+", "<ins>${1}</ins>"),
            Rule::template("superscript", r"\^([^\^]*)\^", "<sup>${1}</sup>"),
            Rule::template("subscript", r"~([^~]*)~", "<sub>${1}</sub>"),
            Rule::template(
                "strikethrough",
                r"(\s+)-(\S+.*?\S)-(\s+)",
                "${1}~~${2}~~${3}",
            ),
            Rule::template(
                "code-block",
                r"\{code(:([a-z]+))?([:|]?(title|borderStyle|borderColor|borderWidth|bgColor|titleBGColor)=.+?)*\}((?s:.)*?)\n?\{code\}",
                "```${2}${5}\n```",
            ),
            Rule::template("noformat", r"\{noformat\}", "```"),
            Rule::template("unnamed-link", r"\[([^|]+?)\]", "<${1}>"),
            Rule::template("image", r"!(.+)!", "![](${1})"),
            Rule::template("named-link", r"\[(.+?)\|(.+?)\]", "[${1}](${2})"),
            Rule::template("blockquote", r"(?mR)^bq\.\s+", "> "),
            Rule::template("color", r"\{color:[^}]+\}((?s:.)*?)\{color\}", "${1}"),
            Rule::template(
                "panel",
                r"\{panel:title=([^}]*)\}\n?((?s:.)*?)\n?\{panel\}",
                "\n| ${1} |\n| --- |\n| ${2} |",
            ),
            Rule::computed(
                "table-header",
                r"(?mR)^[ \t]*((?:\|\|.*?)+\|\|)[ \t]*$",
                table_header,
            ),
            Rule::template("table-row-indent", r"(?mR)^[ \t]*\|", "|"),
        ],
    )
});

/// Convert wiki markup to Markdown.
pub fn to_markdown(source: &str) -> String {
    WIKI_TO_MARKDOWN.run(source)
}

fn unordered_item(caps: &Captures) -> String {
    format!("{}* ", "  ".repeat(caps[1].len() - 1))
}

fn ordered_item(caps: &Captures) -> String {
    format!("{}1. ", "   ".repeat(caps[1].len() - 1))
}

fn heading(caps: &Captures) -> String {
    let level = caps[1].parse::<usize>().unwrap_or(0);
    format!("{}{}", "#".repeat(level), &caps[2])
}

fn table_header(caps: &Captures) -> String {
    let (header, separator) = markdown_header(&caps[1]);
    format!("\n{header}\n{separator}")
}
