//! Structured document model, as fetched from the document service.
//!
//! The serde layout follows the service's JSON: camelCase keys, optional
//! members omitted, unknown members ignored. Blocks and paragraph elements are
//! stored the way the service sends them (one optional member per kind); use
//! [`StructuralElement::block`] and [`ParagraphElement::inline`] to match on a
//! closed view instead of probing options.

use crate::error::ConvertError;
use serde::{Deserialize, Serialize};

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub document_id: String,
    pub title: String,
    pub body: Body,
}

impl Document {
    pub fn new(title: impl Into<String>, content: Vec<StructuralElement>) -> Self {
        Document {
            document_id: String::new(),
            title: title.into(),
            body: Body { content },
        }
    }

    /// Decode a document from the service's JSON representation
    pub fn from_json(json: &str) -> Result<Document, ConvertError> {
        serde_json::from_str(json).map_err(|e| ConvertError::Document(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, ConvertError> {
        serde_json::to_string_pretty(self).map_err(|e| ConvertError::Document(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Body {
    pub content: Vec<StructuralElement>,
}

/// Closed view over a [`StructuralElement`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Block<'a> {
    Paragraph(&'a Paragraph),
    Table(&'a Table),
    /// Section breaks, tables of contents and anything newer
    Other,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StructuralElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<Paragraph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<Table>,
}

impl StructuralElement {
    pub fn paragraph(paragraph: Paragraph) -> Self {
        StructuralElement {
            paragraph: Some(paragraph),
            ..Default::default()
        }
    }

    pub fn table(table: Table) -> Self {
        StructuralElement {
            table: Some(table),
            ..Default::default()
        }
    }

    pub fn block(&self) -> Block<'_> {
        match (&self.paragraph, &self.table) {
            (Some(paragraph), _) => Block::Paragraph(paragraph),
            (None, Some(table)) => Block::Table(table),
            (None, None) => Block::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Paragraph {
    pub elements: Vec<ParagraphElement>,
    pub paragraph_style: ParagraphStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet: Option<Bullet>,
}

impl Paragraph {
    /// A paragraph with one element per run
    pub fn new(named_style_type: impl Into<String>, runs: Vec<TextRun>) -> Self {
        Paragraph {
            elements: runs.into_iter().map(ParagraphElement::text_run).collect(),
            paragraph_style: ParagraphStyle {
                named_style_type: named_style_type.into(),
            },
            bullet: None,
        }
    }

    pub fn with_bullet(mut self, bullet: Bullet) -> Self {
        self.bullet = Some(bullet);
        self
    }

    pub fn is_list_item(&self) -> bool {
        self.bullet.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParagraphStyle {
    pub named_style_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bullet {
    pub list_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nesting_level: Option<usize>,
}

/// Closed view over a [`ParagraphElement`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Inline<'a> {
    TextRun(&'a TextRun),
    /// Inline objects, page breaks, footnote references, ...
    Other,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParagraphElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_run: Option<TextRun>,
}

impl ParagraphElement {
    pub fn text_run(run: TextRun) -> Self {
        ParagraphElement {
            text_run: Some(run),
            ..Default::default()
        }
    }

    pub fn inline(&self) -> Inline<'_> {
        match &self.text_run {
            Some(run) => Inline::TextRun(run),
            None => Inline::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextRun {
    pub content: String,
    pub text_style: TextStyle,
}

impl TextRun {
    pub fn new(content: impl Into<String>) -> Self {
        TextRun {
            content: content.into(),
            text_style: TextStyle::default(),
        }
    }

    pub fn styled(content: impl Into<String>, text_style: TextStyle) -> Self {
        TextRun {
            content: content.into(),
            text_style,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    #[serde(skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub strikethrough: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

impl TextStyle {
    pub fn link(url: impl Into<String>) -> Self {
        TextStyle {
            link: Some(Link { url: url.into() }),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Link {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Table {
    pub table_rows: Vec<TableRow>,
}

impl Table {
    /// Build a table where every cell holds a single normal-text paragraph
    pub fn from_text_rows(rows: &[&[&str]]) -> Self {
        Table {
            table_rows: rows
                .iter()
                .map(|cells| TableRow {
                    table_cells: cells
                        .iter()
                        .map(|text| TableCell {
                            content: vec![StructuralElement::paragraph(Paragraph::new(
                                "NORMAL_TEXT",
                                vec![TextRun::new(format!("{text}\n"))],
                            ))],
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableRow {
    pub table_cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableCell {
    pub content: Vec<StructuralElement>,
}
