//! Markdown emphasis spans.
//!
//! A span opens with a run of `*`/`_` characters and closes with the very same
//! run (`**bold**`, `_*both*_` is not a span of `_*`). The closing run is a
//! back-reference to the opening one, which the `regex` crate does not
//! support, so spans are found with a small scanner that follows the same
//! leftmost, longest-opener, shortest-content preference a backtracking engine
//! would.

/// A matched emphasis span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmphasisSpan<'a> {
    /// The opening (and closing) run of `*`/`_` characters.
    pub wrapper: &'a str,
    /// Text between the two runs. Never starts with whitespace.
    pub content: &'a str,
    /// Byte offset of the opening run.
    pub start: usize,
    /// Byte offset just past the closing run.
    pub end: usize,
}

fn is_wrapper(byte: u8) -> bool {
    byte == b'*' || byte == b'_'
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Try to match a span opening exactly at byte offset `start`.
pub fn match_at(text: &str, start: usize) -> Option<EmphasisSpan<'_>> {
    let bytes = text.as_bytes();
    if !bytes.get(start).copied().is_some_and(is_wrapper) {
        return None;
    }
    let run_len = bytes[start..].iter().take_while(|b| is_wrapper(**b)).count();

    for len in (1..=run_len).rev() {
        let content_start = start + len;
        let Some(first) = text[content_start..].chars().next() else {
            continue;
        };
        if first.is_whitespace() {
            continue;
        }
        let search_from = content_start + first.len_utf8();
        let line_end = text[search_from..]
            .find(is_line_terminator)
            .map_or(text.len(), |offset| search_from + offset);
        let wrapper = &text[start..content_start];
        if let Some(offset) = text[search_from..line_end].find(wrapper) {
            let close = search_from + offset;
            return Some(EmphasisSpan {
                wrapper,
                content: &text[content_start..close],
                start,
                end: close + len,
            });
        }
    }
    None
}

/// Replace every non-overlapping span, scanning left to right.
pub fn replace_spans(text: &str, mut render: impl FnMut(&EmphasisSpan<'_>) -> String) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut pos = 0;
    while pos < text.len() {
        if let Some(span) = match_at(text, pos) {
            out.push_str(&text[copied..pos]);
            out.push_str(&render(&span));
            pos = span.end;
            copied = pos;
        } else {
            pos += text[pos..].chars().next().map_or(1, char::len_utf8);
        }
    }
    out.push_str(&text[copied..]);
    out
}
