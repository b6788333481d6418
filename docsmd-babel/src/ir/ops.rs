//! Position-addressed edit operations.
//!
//! Operations are only meaningful in emission order: every index refers to the
//! document as it stands after all earlier [`EditOperation::InsertText`]s.

use std::fmt;

/// Range of document indices covered by a style operation.
///
/// Both bounds are 1-based document indices; `end` is the index of the last
/// covered character. [`StyleRange::end_exclusive`] gives the half-open form
/// used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRange {
    pub start: usize,
    pub end: usize,
}

impl StyleRange {
    pub fn new(start: usize, end: usize) -> Self {
        StyleRange { start, end }
    }

    pub fn end_exclusive(&self) -> usize {
        self.end + 1
    }

    pub fn is_well_formed(&self) -> bool {
        self.start >= 1 && self.start <= self.end
    }
}

impl fmt::Display for StyleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// A single edit against the target document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOperation {
    InsertText { text: String, at_index: usize },
    SetParagraphStyle { range: StyleRange, style_name: String },
    SetBulletList { range: StyleRange, preset: String },
    SetLink { range: StyleRange, url: String },
}

impl EditOperation {
    /// Range targeted by a style operation, `None` for insertions.
    pub fn range(&self) -> Option<StyleRange> {
        match self {
            EditOperation::InsertText { .. } => None,
            EditOperation::SetParagraphStyle { range, .. }
            | EditOperation::SetBulletList { range, .. }
            | EditOperation::SetLink { range, .. } => Some(*range),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EditOperation::InsertText { .. } => "insert_text",
            EditOperation::SetParagraphStyle { .. } => "set_paragraph_style",
            EditOperation::SetBulletList { .. } => "set_bullet_list",
            EditOperation::SetLink { .. } => "set_link",
        }
    }
}

/// Length of `text` in the unit the document service indexes by (UTF-16 code units).
pub fn text_len(text: &str) -> usize {
    text.encode_utf16().count()
}
