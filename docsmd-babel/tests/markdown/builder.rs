use docsmd_babel::common::builder::{BuildOptions, DocumentBuilder, DEFAULT_BULLET_PRESET};
use docsmd_babel::formats::markdown::parse_markdown;
use docsmd_babel::{markdown_to_structured_doc, to_batch_request, EditOperation, StyleRange};
use serde_json::json;

fn insert(text: &str, at_index: usize) -> EditOperation {
    EditOperation::InsertText {
        text: text.to_string(),
        at_index,
    }
}

fn style(start: usize, end: usize, name: &str) -> EditOperation {
    EditOperation::SetParagraphStyle {
        range: StyleRange::new(start, end),
        style_name: name.to_string(),
    }
}

#[test]
fn test_heading_and_paragraph_scenario() {
    let ops = markdown_to_structured_doc(&parse_markdown("# Title\n\nBody text"));
    assert_eq!(
        ops,
        vec![
            insert("Title", 1),
            style(1, 5, "HEADING_1"),
            insert("\n", 6),
            insert("Body text", 7),
            style(7, 15, "NORMAL_TEXT"),
        ]
    );
}

#[test]
fn test_scenario_on_the_wire() {
    let ops = markdown_to_structured_doc(&parse_markdown("# Title\n\nBody text"));
    let body = serde_json::to_value(to_batch_request(&ops)).unwrap();
    assert_eq!(
        body,
        json!({"requests": [
            {"insertText": {"text": "Title", "location": {"index": 1}}},
            {"updateParagraphStyle": {
                "paragraphStyle": {"namedStyleType": "HEADING_1"},
                "range": {"startIndex": 1, "endIndex": 6},
                "fields": "namedStyleType"
            }},
            {"insertText": {"text": "\n", "location": {"index": 6}}},
            {"insertText": {"text": "Body text", "location": {"index": 7}}},
            {"updateParagraphStyle": {
                "paragraphStyle": {"namedStyleType": "NORMAL_TEXT"},
                "range": {"startIndex": 7, "endIndex": 16},
                "fields": "namedStyleType"
            }}
        ]})
    );
}

#[test]
fn test_heading_levels_map_to_named_styles() {
    let source = "# a\n\n## b\n\n### c\n\n#### d\n\n##### e\n\n###### f\n";
    let names: Vec<String> = markdown_to_structured_doc(&parse_markdown(source))
        .into_iter()
        .filter_map(|op| match op {
            EditOperation::SetParagraphStyle { style_name, .. } => Some(style_name),
            _ => None,
        })
        .collect();
    assert_eq!(
        names,
        vec!["HEADING_1", "HEADING_2", "HEADING_3", "HEADING_4", "HEADING_5", "HEADING_6"]
    );
}

#[test]
fn test_list_after_heading() {
    let ops = markdown_to_structured_doc(&parse_markdown("# H\n\n* a\n* b\n"));
    assert_eq!(
        ops,
        vec![
            insert("H", 1),
            style(1, 1, "HEADING_1"),
            insert("\n", 2),
            insert("\n", 3),
            insert("a", 4),
            insert("\n", 5),
            insert("b", 6),
            EditOperation::SetBulletList {
                range: StyleRange::new(3, 6),
                preset: DEFAULT_BULLET_PRESET.to_string(),
            },
        ]
    );
}

#[test]
fn test_link_inside_heading() {
    let ops = markdown_to_structured_doc(&parse_markdown("# Read [the docs](https://docs.example)"));
    assert_eq!(
        ops,
        vec![
            insert("Read ", 1),
            insert("the docs", 6),
            EditOperation::SetLink {
                range: StyleRange::new(6, 13),
                url: "https://docs.example".to_string(),
            },
            style(1, 13, "HEADING_1"),
        ]
    );
}

#[test]
fn test_unsupported_nodes_are_reported_and_their_text_kept() {
    let builder = DocumentBuilder::new(BuildOptions::default());
    let output = builder.build(&parse_markdown("> quoted *words*\n"));
    assert_eq!(output.unsupported, vec!["block_quote", "emph"]);
    let inserted: String = output
        .operations
        .iter()
        .filter_map(|op| match op {
            EditOperation::InsertText { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(inserted, "\nquoted words");
}

#[test]
fn test_soft_breaks_become_spaces() {
    let ops = markdown_to_structured_doc(&parse_markdown("one\ntwo"));
    assert_eq!(
        ops,
        vec![
            insert("\n", 1),
            insert("one", 2),
            insert(" ", 5),
            insert("two", 6),
            style(2, 8, "NORMAL_TEXT"),
        ]
    );
}

#[test]
fn test_empty_input_emits_nothing() {
    assert!(markdown_to_structured_doc(&parse_markdown("")).is_empty());
}
