use crate::common::{normalize, round_trip};
use insta::assert_snapshot;

fn assert_round_trips(markdown: &str) {
    let rendered = round_trip("Doc", markdown);
    assert_eq!(
        normalize(&rendered),
        normalize(&format!("# Doc\n\n{markdown}")),
        "rendered:\n{rendered}"
    );
}

#[test]
fn test_heading_and_paragraph() {
    assert_round_trips("# Title\n\nBody text");
}

#[test]
fn test_paragraph_before_heading() {
    assert_round_trips("Intro line\n\n## Details\n\nMore words here");
}

#[test]
fn test_heading_then_bullets() {
    assert_round_trips("# Shopping\n\n* eggs\n* milk\n* bread");
}

#[test]
fn test_bullets_then_paragraph() {
    assert_round_trips("* first\n* second\n\nAfter the list");
}

#[test]
fn test_bullets_first() {
    assert_round_trips("* only item\n\n### Closing");
}

#[test]
fn test_all_heading_levels() {
    assert_round_trips("# a\n\n## b\n\n### c\n\n#### d\n\n##### e\n\n###### f");
}

#[test]
fn test_links_survive_the_round_trip() {
    let rendered = round_trip("Doc", "Read [the guide](https://guide.example) first");
    assert_snapshot!(normalize(&rendered), @r"
    # Doc
    Read
    [the guide](https://guide.example)
    first
    ");
}
