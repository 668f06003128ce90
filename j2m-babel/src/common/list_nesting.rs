//! Rebuilds wiki list nesting from Markdown indentation.
//!
//! # The High-Level Concept
//!
//! Markdown nests lists with leading whitespace; wiki markup nests them by
//! repeating the marker character, one character per level (`*`, `**`, `#*`).
//! By the time this pass runs, the Markdown list rules have already turned the
//! indentation into a marker run whose length is roughly proportional to the
//! original indentation (`**` for two spaces, `***` for four, ...). What is
//! unknown is how many run characters one nesting level costs: two-space and
//! four-space Markdown both occur, and ordered items are indented by three.
//!
//! The pass infers that cost, the "indent distance", from the first line of a
//! block that sits deeper than the first level, and then rebuilds each run from
//! the markers remembered for its parent levels. Mixed lists keep their own
//! marker per level, so an unordered item under an ordered one becomes `#*`.
//!
//! # The Algorithm
//!
//! Blocks are separated by a blank line (`\n\n`); each block starts with a fresh
//! [`IndentState`]. For every line starting with `*` or `#` whose marker run is
//! followed by whitespace:
//!
//! 1. `indent = run_len / 2`
//! 2. If `indent > 0` and the distance is still unknown, set it to
//!    `run_len - stack_len` (stack length before truncation)
//! 3. Truncate the marker stack to `indent` slots, pad missing slots, record
//!    the line's marker at slot `indent`
//! 4. Emit the remembered marker of each parent slot while dropping `distance`
//!    characters from the run per slot, then whatever is left of the run
//!
//! Any line not starting with a marker ends the current list: the stack is
//! cleared, the distance is kept for the rest of the block.

use once_cell::sync::Lazy;
use regex::Regex;

static MARKER_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([*#]+)(\s)").unwrap_or_else(|err| panic!("invalid marker pattern: {err}"))
});

/// Rewrite the list marker runs of every block in `text`.
pub fn reindent_nested_lists(text: &str) -> String {
    text.split("\n\n")
        .map(reindent_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn reindent_block(block: &str) -> String {
    let mut state = IndentState::default();
    block
        .split('\n')
        .map(|line| state.rewrite_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Block-scoped nesting state.
#[derive(Debug, Default)]
struct IndentState {
    /// Marker recorded for each depth of the current list run. Slots skipped
    /// by a jump of more than one level stay empty.
    markers: Vec<Option<char>>,
    /// Run characters consumed per nesting level, once inferred.
    indent_distance: Option<isize>,
}

impl IndentState {
    fn rewrite_line(&mut self, line: &str) -> String {
        if !(line.starts_with('#') || line.starts_with('*')) {
            self.markers.clear();
            return line.to_string();
        }
        let Some(caps) = MARKER_RUN.captures(line) else {
            return line.to_string();
        };
        let run = &caps[1];
        let separator = &caps[2];
        let rest = &line[caps[0].len()..];
        format!("{}{separator}{rest}", self.rebuild_run(run))
    }

    fn rebuild_run(&mut self, run: &str) -> String {
        let indent = run.len() / 2;

        // A zero distance never sticks; the next nested line infers it again.
        if indent > 0 && matches!(self.indent_distance, None | Some(0)) {
            self.indent_distance = Some(run.len() as isize - self.markers.len() as isize);
        }
        let distance = self.indent_distance.unwrap_or(1);

        self.markers.truncate(indent);
        self.markers.resize(indent, None);
        self.markers.push(run.chars().next());

        let mut rebuilt = String::with_capacity(run.len());
        let mut remaining = run;
        for marker in &self.markers[..indent] {
            if let Some(marker) = marker {
                rebuilt.push(*marker);
            }
            remaining = drop_level(remaining, distance);
        }
        rebuilt.push_str(remaining);
        rebuilt
    }
}

/// Drop one level's worth of characters from the front of a marker run.
///
/// A negative distance keeps only the last `|distance|` characters.
fn drop_level(run: &str, distance: isize) -> &str {
    let len = run.len();
    if distance >= 0 {
        &run[(distance as usize).min(len)..]
    } else {
        &run[len - distance.unsigned_abs().min(len)..]
    }
}
