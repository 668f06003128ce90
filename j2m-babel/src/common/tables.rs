//! Pipe-table helpers shared by both conversion directions.

use once_cell::sync::Lazy;
use regex::Regex;

/// A bar followed by cell content.
static HEADER_CELL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\|[^|]+").unwrap_or_else(|err| panic!("invalid header cell pattern: {err}"))
});

/// Cells of a pipe-delimited line: every non-empty segment that is followed by
/// a `|`.
///
/// Text after the last bar is not a cell, and empty segments (`||`) are
/// skipped, so `"| a || b |"` yields `[" a ", " b "]` with whitespace kept.
pub fn delimited_cells(line: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = line.split('|').collect();
    segments.pop();
    segments.into_iter().filter(|s| !s.is_empty()).collect()
}

/// Turn a wiki `||a||b||` header into a Markdown header row and the matching
/// `---` separator row.
pub fn markdown_header(wiki_header: &str) -> (String, String) {
    let single_barred = wiki_header.replace("||", "|");
    let separator = HEADER_CELL.replace_all(&single_barred, "| --- ").into_owned();
    (single_barred, separator)
}
