//! Nested list conversion in both directions

use j2m_babel::{to_markdown, to_wiki};

#[test]
fn test_wiki_depth_becomes_indentation() {
    assert_eq!(to_markdown("* a\n** b\n*** c"), "* a\n  * b\n    * c");
    assert_eq!(to_markdown("# a\n## b\n### c"), "1. a\n   1. b\n      1. c");
}

#[test]
fn test_nested_unordered_round_trip() {
    let wiki = "* a\n** b\n*** c\n**** d\n* e";
    assert_eq!(to_wiki(&to_markdown(wiki)), wiki);
}

#[test]
fn test_nested_ordered_round_trip() {
    let wiki = "# a\n## b\n### c\n# d";
    assert_eq!(to_wiki(&to_markdown(wiki)), wiki);
}

#[test]
fn test_four_space_markdown_lists() {
    assert_eq!(
        to_wiki("* a\n    * b\n        * c\n    * d"),
        "* a\n** b\n*** c\n** d"
    );
}

#[test]
fn test_dash_and_plus_bullets() {
    assert_eq!(to_wiki("- a\n  + b\n    - c"), "* a\n** b\n*** c");
}

#[test]
fn test_each_block_infers_its_own_indentation() {
    // Two-space nesting in the first list, four-space in the second.
    assert_eq!(
        to_wiki("* a\n  * b\n\n* c\n    * d"),
        "* a\n** b\n\n* c\n** d"
    );
}

#[test]
fn test_bullets_under_numbered_items() {
    assert_eq!(
        to_wiki("1. first\n   - detail\n   - more\n2. second\n   - detail"),
        "# first\n#* detail\n#* more\n# second\n#* detail"
    );
}
