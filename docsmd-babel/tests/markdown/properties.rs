//! Property tests over generated Markdown.

use crate::common::{normalize, round_trip, DOC_ID};
use docsmd_babel::formats::markdown::parse_markdown;
use docsmd_babel::ir::ops::text_len;
use docsmd_babel::{
    markdown_to_structured_doc, submit, Cancellation, EditOperation, LocalDocument,
    SubmissionPolicy,
};
use proptest::prelude::*;

/// Fragments glued together into arbitrary, often odd, Markdown.
const FRAGMENTS: &[&str] = &[
    "# ",
    "### ",
    "* ",
    "1. ",
    "  * ",
    "> ",
    "**bold**",
    "_it_",
    "`code`",
    "[link](http://example.com)",
    "[**mixed** text](http://x)",
    "| a | b |\n|---|---|\n| c | d |\n",
    "😀",
    "\n",
    "\n\n",
];

fn markdown_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(FRAGMENTS).prop_map(String::from),
        "[a-z ]{1,8}",
    ]
}

fn arbitrary_markdown() -> impl Strategy<Value = String> {
    prop::collection::vec(markdown_fragment(), 0..24).prop_map(|parts| parts.concat())
}

fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn words() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..5).prop_map(|words| words.join(" "))
}

/// Headings, paragraphs and tight bullet lists of plain words.
fn simple_block() -> impl Strategy<Value = String> {
    prop_oneof![
        (1usize..=6, words()).prop_map(|(level, text)| format!("{} {text}", "#".repeat(level))),
        words(),
        prop::collection::vec(words(), 1..4).prop_map(|items| {
            items
                .iter()
                .map(|item| format!("* {item}"))
                .collect::<Vec<_>>()
                .join("\n")
        }),
    ]
}

proptest! {
    #[test]
    fn cursor_only_moves_on_inserts(source in arbitrary_markdown()) {
        let ops = markdown_to_structured_doc(&parse_markdown(&source));
        let mut cursor = 1;
        for op in &ops {
            if let EditOperation::InsertText { text, at_index } = op {
                prop_assert_eq!(*at_index, cursor);
                prop_assert!(!text.is_empty());
                cursor += text_len(text);
            }
        }
    }

    #[test]
    fn ranges_are_well_formed_and_already_reached(source in arbitrary_markdown()) {
        let ops = markdown_to_structured_doc(&parse_markdown(&source));
        let mut cursor = 1;
        for op in &ops {
            match op {
                EditOperation::InsertText { text, .. } => cursor += text_len(text),
                other => {
                    let range = other.range().expect("style operations carry a range");
                    prop_assert!(range.is_well_formed(), "{} in {:?}", range, other);
                    prop_assert!(range.end <= cursor, "{} past cursor {}", range, cursor);
                }
            }
        }
    }

    #[test]
    fn every_build_applies_to_a_fresh_document(source in arbitrary_markdown()) {
        let ops = markdown_to_structured_doc(&parse_markdown(&source));
        let mut document = LocalDocument::new(DOC_ID, "T");
        let result = submit(
            &mut document,
            DOC_ID,
            &ops,
            SubmissionPolicy::Atomic,
            &Cancellation::new(),
        );
        prop_assert!(result.is_ok(), "{:?}", result);
    }

    #[test]
    fn simple_documents_round_trip(blocks in prop::collection::vec(simple_block(), 1..6)) {
        let source = blocks.join("\n\n");
        let rendered = round_trip("Generated", &source);
        prop_assert_eq!(
            normalize(&rendered),
            normalize(&format!("# Generated\n\n{source}"))
        );
    }
}
