use docsmd_babel::formats::docs::model::{
    Bullet, Paragraph, StructuralElement, Table, TextRun, TextStyle,
};
use docsmd_babel::{structured_doc_to_markdown, Document};
use insta::assert_snapshot;

const FETCHED: &str = r#"{
  "documentId": "1AbC",
  "title": "Weekly notes",
  "body": {
    "content": [
      {"endIndex": 1, "sectionBreak": {"sectionStyle": {"sectionType": "CONTINUOUS"}}},
      {"startIndex": 1, "endIndex": 8, "paragraph": {
        "elements": [{"startIndex": 1, "endIndex": 8, "textRun": {"content": "Agenda\n", "textStyle": {}}}],
        "paragraphStyle": {"namedStyleType": "HEADING_1"}
      }},
      {"startIndex": 8, "endIndex": 30, "paragraph": {
        "elements": [
          {"startIndex": 8, "endIndex": 12, "textRun": {"content": "See ", "textStyle": {}}},
          {"startIndex": 12, "endIndex": 20, "textRun": {"content": "the plan", "textStyle": {"bold": true, "link": {"url": "https://plan.example"}}}},
          {"startIndex": 20, "endIndex": 21, "textRun": {"content": "\n", "textStyle": {}}}
        ],
        "paragraphStyle": {"namedStyleType": "NORMAL_TEXT"}
      }},
      {"startIndex": 21, "endIndex": 27, "paragraph": {
        "elements": [{"startIndex": 21, "endIndex": 27, "textRun": {"content": "ship\n", "textStyle": {}}}],
        "paragraphStyle": {"namedStyleType": "NORMAL_TEXT"},
        "bullet": {"listId": "kix.abc"}
      }},
      {"startIndex": 27, "endIndex": 34, "paragraph": {
        "elements": [{"startIndex": 27, "endIndex": 34, "textRun": {"content": "review\n", "textStyle": {"strikethrough": true}}}],
        "paragraphStyle": {"namedStyleType": "NORMAL_TEXT"},
        "bullet": {"listId": "kix.abc"}
      }}
    ]
  }
}"#;

#[test]
fn test_fetched_document_renders() {
    let doc = Document::from_json(FETCHED).expect("fixture decodes");
    let markdown = structured_doc_to_markdown(&doc);
    // Only the last token of a run is trimmed, so "review\n" keeps its newline inside the markers.
    assert_snapshot!(markdown.trim_end(), @r"
    # Weekly notes
    # Agenda


    See
    [**the plan**](https://plan.example)



    * ship
    * ~~review
    ~~
    ");
}

#[test]
fn test_table_renders_as_three_lines_and_a_blank() {
    let table = Table::from_text_rows(&[&["a", "b"], &["c", "d"]]);
    let doc = Document::new("T", vec![StructuralElement::table(table)]);
    let markdown = structured_doc_to_markdown(&doc);
    let lines: Vec<&str> = markdown.split('\n').collect();
    assert_eq!(
        lines,
        vec!["# T", "| a | b |", "| --- | --- |", "| c | d |", "", ""]
    );
}

#[test]
fn test_table_cells_join_their_paragraphs() {
    let mut table = Table::from_text_rows(&[&["x", "y"]]);
    table.table_rows[0].table_cells[0]
        .content
        .push(StructuralElement::paragraph(Paragraph::new(
            "NORMAL_TEXT",
            vec![TextRun::new("more\n")],
        )));
    let doc = Document::new("T", vec![StructuralElement::table(table)]);
    assert!(structured_doc_to_markdown(&doc).contains("| x more | y |"));
}

#[test]
fn test_inline_style_nesting() {
    let bold_link = TextStyle {
        bold: true,
        ..TextStyle::link("http://x")
    };
    let underlined_link = TextStyle {
        underline: true,
        ..TextStyle::link("http://x")
    };
    let doc = Document::new(
        "T",
        vec![
            StructuralElement::paragraph(Paragraph::new(
                "NORMAL_TEXT",
                vec![TextRun::styled("hi", bold_link)],
            )),
            StructuralElement::paragraph(Paragraph::new(
                "NORMAL_TEXT",
                vec![TextRun::styled("hi", underlined_link)],
            )),
        ],
    );
    let markdown = structured_doc_to_markdown(&doc);
    let lines: Vec<&str> = markdown.lines().collect();
    assert_eq!(lines[1], "[**hi**](http://x)");
    assert!(lines.contains(&"[hi](http://x)"));
}

#[test]
fn test_titles_and_subtitles_use_heading_prefixes() {
    let doc = Document::new(
        "T",
        vec![
            StructuralElement::paragraph(Paragraph::new("TITLE", vec![TextRun::new("Big\n")])),
            StructuralElement::paragraph(Paragraph::new(
                "SUBTITLE",
                vec![TextRun::new("Smaller\n")],
            )),
            StructuralElement::paragraph(
                Paragraph::new("NORMAL_TEXT", vec![TextRun::new("item\n")]).with_bullet(Bullet {
                    list_id: "l".to_string(),
                    nesting_level: Some(1),
                }),
            ),
        ],
    );
    let normalized: Vec<String> = structured_doc_to_markdown(&doc)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(String::from)
        .collect();
    assert_eq!(normalized, vec!["# T", "# Big", "## Smaller", "* item"]);
}
