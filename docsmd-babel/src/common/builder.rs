//! Compiles a Markdown tree into ordered edit operations.
//!
//! # The High-Level Concept
//!
//! The target document is written front to back. A single cursor tracks where
//! the next character lands: it starts at index 1 and only moves when text is
//! inserted, by the inserted text's length in UTF-16 code units. Style
//! operations never move it; they address ranges the cursor has already passed.
//!
//! # The Algorithm
//!
//! The tree is flattened into enter/exit events (see `nested_to_flat`) and each
//! event is handled in order:
//!
//! | Node      | Enter                                        | Exit                                  |
//! |-----------|----------------------------------------------|---------------------------------------|
//! | Heading   | break if cursor > 1, open range              | `HEADING_<level>` over the range      |
//! | Paragraph | break, open range                            | `NORMAL_TEXT` over the range          |
//! | List      | break if cursor > 1, open range              | bullets (or numbering) over the range |
//! | ListItem  | break                                        |                                       |
//! | Link      | open range                                   | link over the text inserted since     |
//! | Text      |                                              | insert the text                       |
//! | Other     | log, record kind                             |                                       |
//!
//! A "break" is an inserted `"\n"`. Open ranges live on a stack, so nested
//! blocks (a list inside a list item, a link inside a heading) each close over
//! their own start.
//!
//! A closed range ends at `cursor - 1`, the index of the last character the
//! block inserted. A block that inserted nothing yields `start..=start`.

use crate::common::nested_to_flat::walk;
use crate::formats::docs::styles::NamedStyle;
use crate::formats::markdown::nodes::{MarkdownDocument, Node};
use crate::ir::events::WalkEvent;
use crate::ir::ops::{text_len, EditOperation, StyleRange};

/// First index of a document body.
pub const INITIAL_CURSOR: usize = 1;

pub const DEFAULT_BULLET_PRESET: &str = "BULLET_DISC_CIRCLE_SQUARE";
pub const DEFAULT_NUMBERED_PRESET: &str = "NUMBERED_DECIMAL_ALPHA_ROMAN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Preset applied to unordered lists
    pub bullet_preset: String,
    /// Preset applied to ordered lists
    pub numbered_preset: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            bullet_preset: DEFAULT_BULLET_PRESET.to_string(),
            numbered_preset: DEFAULT_NUMBERED_PRESET.to_string(),
        }
    }
}

/// Result of one build pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutput {
    pub operations: Vec<EditOperation>,
    /// Kinds of nodes that produced no operations, in traversal order
    pub unsupported: Vec<&'static str>,
    /// Cursor position after the last insertion
    pub end_cursor: usize,
}

/// Markdown → edit operations compiler.
///
/// The builder itself holds only options; every call to [`DocumentBuilder::build`]
/// runs with a fresh cursor and range stack.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    options: BuildOptions,
}

impl DocumentBuilder {
    pub fn new(options: BuildOptions) -> Self {
        DocumentBuilder { options }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    pub fn build(&self, document: &MarkdownDocument) -> BuildOutput {
        let mut pass = BuildPass::new(&self.options);
        for event in walk(&document.root) {
            match event {
                WalkEvent::Enter(node) => pass.enter(node),
                WalkEvent::Exit(node) => pass.exit(node),
            }
        }
        pass.finish()
    }
}

/// Mutable state of a single conversion pass.
struct BuildPass<'o> {
    options: &'o BuildOptions,
    cursor: usize,
    range_starts: Vec<usize>,
    operations: Vec<EditOperation>,
    unsupported: Vec<&'static str>,
}

impl<'o> BuildPass<'o> {
    fn new(options: &'o BuildOptions) -> Self {
        BuildPass {
            options,
            cursor: INITIAL_CURSOR,
            range_starts: Vec::new(),
            operations: Vec::new(),
            unsupported: Vec::new(),
        }
    }

    fn enter(&mut self, node: &Node) {
        match node {
            Node::Document(_) | Node::TextBlock(_) | Node::Text(_) => {}
            Node::Heading { .. } | Node::List { .. } => {
                if self.cursor > INITIAL_CURSOR {
                    self.insert("\n");
                }
                self.open_range();
            }
            Node::Paragraph(_) => {
                self.insert("\n");
                self.open_range();
            }
            Node::ListItem(_) => self.insert("\n"),
            Node::Link { .. } => self.open_range(),
            Node::Other { kind, .. } => {
                tracing::warn!(
                    kind = *kind,
                    cursor = self.cursor,
                    "unsupported markdown node, no operations emitted"
                );
                self.unsupported.push(*kind);
            }
        }
    }

    fn exit(&mut self, node: &Node) {
        match node {
            Node::Heading { level, .. } => {
                let range = self.close_range();
                self.push(EditOperation::SetParagraphStyle {
                    range,
                    style_name: NamedStyle::heading(*level).to_string(),
                });
            }
            Node::Paragraph(_) => {
                let range = self.close_range();
                self.push(EditOperation::SetParagraphStyle {
                    range,
                    style_name: NamedStyle::NormalText.to_string(),
                });
            }
            Node::Text(text) => {
                if !text.is_empty() {
                    self.insert(text);
                }
            }
            Node::List { ordered, .. } => {
                let range = self.close_range();
                let preset = if *ordered {
                    &self.options.numbered_preset
                } else {
                    &self.options.bullet_preset
                };
                let preset = preset.clone();
                self.push(EditOperation::SetBulletList { range, preset });
            }
            Node::Link { destination, .. } => {
                let start = self.pop_range_start();
                let visible_len = self.cursor - start;
                if visible_len == 0 {
                    tracing::debug!(url = %destination, "link without visible text, skipped");
                    return;
                }
                self.push(EditOperation::SetLink {
                    range: StyleRange::new(self.cursor - visible_len, self.cursor - 1),
                    url: destination.clone(),
                });
            }
            Node::Document(_) | Node::TextBlock(_) | Node::ListItem(_) | Node::Other { .. } => {}
        }
    }

    fn insert(&mut self, text: &str) {
        let at_index = self.cursor;
        self.cursor += text_len(text);
        self.push(EditOperation::InsertText {
            text: text.to_string(),
            at_index,
        });
    }

    fn open_range(&mut self) {
        self.range_starts.push(self.cursor);
    }

    fn pop_range_start(&mut self) -> usize {
        // Enter/exit events are balanced, so every exit finds its own start.
        self.range_starts.pop().unwrap_or(self.cursor)
    }

    fn close_range(&mut self) -> StyleRange {
        let start = self.pop_range_start();
        let end = self.cursor.saturating_sub(1).max(start);
        StyleRange::new(start, end)
    }

    fn push(&mut self, operation: EditOperation) {
        tracing::debug!(
            index = self.operations.len() + 1,
            operation = operation.name(),
            cursor = self.cursor,
            "emitted edit operation"
        );
        self.operations.push(operation);
    }

    fn finish(self) -> BuildOutput {
        BuildOutput {
            operations: self.operations,
            unsupported: self.unsupported,
            end_cursor: self.cursor,
        }
    }
}
