//! Structured document → Markdown.
//!
//! Output is a list of lines joined with `"\n"`:
//!
//! - the title, always first, as `# <title>`
//! - per paragraph: one line per text-run element, prefixed by the Markdown
//!   prefix of the paragraph's named style; list paragraphs get `* ` before
//!   non-empty text; non-list paragraphs end with an extra `"\n"` line
//! - per table: a pipe row per table row, a `| --- |` separator after the
//!   first row, then an extra `"\n"` line
//!
//! Other blocks and non-text paragraph elements are skipped.

use crate::common::inline::render_text_runs;
use crate::formats::docs::model::{Block, Document, Inline, Paragraph, Table, TableCell};
use crate::formats::docs::styles::markdown_prefix;

const BULLET_MARKER: &str = "* ";
const TABLE_SEPARATOR_CELL: &str = " --- |";

/// Render a whole document to Markdown
pub fn render_document(document: &Document) -> String {
    let mut lines = vec![format!("# {}", document.title)];

    for element in &document.body.content {
        match element.block() {
            Block::Paragraph(paragraph) => lines.extend(render_paragraph(paragraph)),
            Block::Table(table) => lines.extend(render_table(table)),
            Block::Other => {
                tracing::trace!("skipping non-paragraph, non-table block");
            }
        }
    }

    lines.join("\n")
}

/// Lines for one paragraph.
pub fn render_paragraph(paragraph: &Paragraph) -> Vec<String> {
    let prefix = markdown_prefix(&paragraph.paragraph_style.named_style_type);
    let is_list_item = paragraph.is_list_item();

    let mut lines: Vec<String> = paragraph
        .elements
        .iter()
        .filter_map(|element| match element.inline() {
            Inline::TextRun(run) => Some(render_text_runs([run])),
            Inline::Other => None,
        })
        .map(|text| {
            if is_list_item && !text.is_empty() {
                format!("{prefix}{BULLET_MARKER}{text}")
            } else {
                format!("{prefix}{text}")
            }
        })
        .collect();

    if !is_list_item {
        lines.push("\n".to_string());
    }
    lines
}

/// Lines for one table, as a pipe table.
pub fn render_table(table: &Table) -> Vec<String> {
    let mut lines = Vec::with_capacity(table.table_rows.len() + 2);

    for (row_index, row) in table.table_rows.iter().enumerate() {
        let cells: Vec<String> = row.table_cells.iter().map(render_cell).collect();
        lines.push(format!("| {} |", cells.join(" | ")));
        if row_index == 0 {
            lines.push(format!("|{}", TABLE_SEPARATOR_CELL.repeat(cells.len())));
        }
    }

    lines.push("\n".to_string());
    lines
}

fn render_cell(cell: &TableCell) -> String {
    cell.content
        .iter()
        .filter_map(|element| match element.block() {
            Block::Paragraph(paragraph) => {
                Some(render_paragraph(paragraph).join(" ").trim_end().to_string())
            }
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}
