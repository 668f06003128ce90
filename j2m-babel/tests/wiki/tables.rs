//! Tables and panels in both directions

use j2m_babel::{to_markdown, to_wiki};

#[test]
fn test_wiki_table_round_trip() {
    let wiki = "||Name||Value||\n|a|1|\n|b|2|\n";
    let md = to_markdown(wiki);
    assert_eq!(md, "\n|Name|Value|\n| --- | --- |\n|a|1|\n|b|2|\n");
    assert_eq!(to_wiki(&md), wiki);
}

#[test]
fn test_panel_round_trip() {
    let wiki = "{panel:title=Note}\nBody text\n{panel}\n";
    let md = to_markdown(wiki);
    assert_eq!(md, "\n| Note |\n| --- |\n| Body text |\n");
    assert_eq!(to_wiki(&md), wiki);
}

#[test]
fn test_one_column_one_row_is_a_panel() {
    assert_eq!(
        to_wiki("Intro\n\n| Heads up |\n|---|\n| Mind the gap |\n"),
        "Intro\n{panel:title=Heads up}\nMind the gap\n{panel}\n"
    );
}

#[test]
fn test_two_rows_stay_a_table() {
    assert_eq!(
        to_wiki("\n|a|\n|---|\n|1|\n|2|\n"),
        "||a||\n|1|\n|2|\n"
    );
}

#[test]
fn test_two_columns_stay_a_table() {
    assert_eq!(to_wiki("\n|a|b|\n|---|---|\n|1|2|\n"), "||a||b||\n|1|2|\n");
}

#[test]
fn test_mismatched_separator_is_left_unchanged() {
    let md = "\n|a|b|\n|---|\n|1|2|\n";
    assert_eq!(to_wiki(md), md);
}

#[test]
fn test_table_needs_a_preceding_blank_line() {
    let md = "|a|b|\n|---|---|\n|1|2|\n";
    assert_eq!(to_wiki(md), md);
}

#[test]
fn test_indented_wiki_table() {
    assert_eq!(
        to_markdown("  ||h1||h2||\n  |x|y|"),
        "\n|h1|h2|\n| --- | --- |\n|x|y|"
    );
}
