//! Wire shape of edit requests sent to the document service.
//!
//! Each [`Request`] serializes as an object with exactly one member named after
//! the request kind, e.g. `{"insertText": {"text": "Hi", "location": {"index": 1}}}`.

use crate::formats::docs::model::{Link, ParagraphStyle, TextStyle};
use crate::ir::ops::{EditOperation, StyleRange};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateRequest {
    pub requests: Vec<Request>,
}

impl BatchUpdateRequest {
    pub fn from_operations(operations: &[EditOperation]) -> Self {
        BatchUpdateRequest {
            requests: operations.iter().map(Request::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    InsertText(InsertTextRequest),
    UpdateParagraphStyle(UpdateParagraphStyleRequest),
    CreateParagraphBullets(CreateParagraphBulletsRequest),
    UpdateTextStyle(UpdateTextStyleRequest),
}

impl Request {
    pub fn kind(&self) -> &'static str {
        match self {
            Request::InsertText(_) => "insertText",
            Request::UpdateParagraphStyle(_) => "updateParagraphStyle",
            Request::CreateParagraphBullets(_) => "createParagraphBullets",
            Request::UpdateTextStyle(_) => "updateTextStyle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertTextRequest {
    pub text: String,
    pub location: Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub index: usize,
}

/// Half-open index range, `[start_index, end_index)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    pub start_index: usize,
    pub end_index: usize,
}

impl From<StyleRange> for Range {
    fn from(range: StyleRange) -> Self {
        Range {
            start_index: range.start,
            end_index: range.end_exclusive(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParagraphStyleRequest {
    pub paragraph_style: ParagraphStyle,
    pub range: Range,
    pub fields: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParagraphBulletsRequest {
    pub bullet_preset: String,
    pub range: Range,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTextStyleRequest {
    pub text_style: TextStyle,
    pub range: Range,
    pub fields: String,
}

impl From<&EditOperation> for Request {
    fn from(operation: &EditOperation) -> Self {
        match operation {
            EditOperation::InsertText { text, at_index } => Request::InsertText(InsertTextRequest {
                text: text.clone(),
                location: Location { index: *at_index },
            }),
            EditOperation::SetParagraphStyle { range, style_name } => {
                Request::UpdateParagraphStyle(UpdateParagraphStyleRequest {
                    paragraph_style: ParagraphStyle {
                        named_style_type: style_name.clone(),
                    },
                    range: (*range).into(),
                    fields: "namedStyleType".to_string(),
                })
            }
            EditOperation::SetBulletList { range, preset } => {
                Request::CreateParagraphBullets(CreateParagraphBulletsRequest {
                    bullet_preset: preset.clone(),
                    range: (*range).into(),
                })
            }
            EditOperation::SetLink { range, url } => Request::UpdateTextStyle(UpdateTextStyleRequest {
                text_style: TextStyle {
                    link: Some(Link { url: url.clone() }),
                    ..Default::default()
                },
                range: (*range).into(),
                fields: "link".to_string(),
            }),
        }
    }
}
