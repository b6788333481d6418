//! Markdown parsing
//!
//! Pipeline: Markdown string → Comrak AST → [`Node`] tree.
//!
//! Comrak does the actual parsing. This module only lowers its arena-allocated
//! tree into the closed [`Node`] model the builder walks.

use crate::error::ConvertError;
use crate::formats::markdown::nodes::{MarkdownDocument, Node};
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Anchorizer, Arena, ComrakOptions};

/// Parse a Markdown string
pub fn parse_markdown(source: &str) -> MarkdownDocument {
    let arena = Arena::new();
    let options = default_comrak_options();
    let root = parse_document(&arena, source, &options);

    let mut lowering = Lowering {
        anchorizer: Anchorizer::new(),
    };
    let tree = lowering.lower(root, false);
    MarkdownDocument::new(source, tree)
}

/// Parse raw Markdown bytes, failing on input that is not UTF-8
pub fn parse_markdown_bytes(bytes: &[u8]) -> Result<MarkdownDocument, ConvertError> {
    let source = std::str::from_utf8(bytes)
        .map_err(|e| ConvertError::Parse(format!("input is not valid UTF-8: {e}")))?;
    Ok(parse_markdown(source))
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.header_ids = Some(String::new());
    options
}

struct Lowering {
    anchorizer: Anchorizer,
}

impl Lowering {
    /// Lower one comrak node.
    ///
    /// `tight_item` is set while lowering the direct children of an item that
    /// belongs to a tight list; their paragraphs become text blocks.
    fn lower<'a>(&mut self, node: &'a AstNode<'a>, tight_item: bool) -> Node {
        let data = node.data.borrow();

        match &data.value {
            NodeValue::Document => Node::Document(self.lower_children(node, false)),

            NodeValue::Heading(heading) => {
                let children = self.lower_children(node, false);
                let text: String = children.iter().map(Node::plain_text).collect();
                let anchor = self.anchorizer.anchorize(text);
                Node::Heading {
                    level: heading.level,
                    anchor,
                    children,
                }
            }

            NodeValue::Paragraph => {
                let children = self.lower_children(node, false);
                if tight_item {
                    Node::TextBlock(children)
                } else {
                    Node::Paragraph(children)
                }
            }

            NodeValue::List(list) => Node::List {
                ordered: matches!(list.list_type, ListType::Ordered),
                tight: list.tight,
                items: self.lower_children(node, list.tight),
            },

            NodeValue::Item(_) => Node::ListItem(self.lower_children(node, tight_item)),

            NodeValue::Text(text) => Node::Text(text.clone()),

            // A line break inside a paragraph separates words
            NodeValue::SoftBreak | NodeValue::LineBreak => Node::Text(" ".to_string()),

            NodeValue::Code(code) => Node::Other {
                kind: "code",
                children: vec![Node::Text(code.literal.clone())],
            },

            NodeValue::Link(link) => Node::Link {
                destination: link.url.clone(),
                children: self.lower_children(node, false),
            },

            other => Node::Other {
                kind: node_kind(other),
                children: self.lower_children(node, false),
            },
        }
    }

    fn lower_children<'a>(&mut self, node: &'a AstNode<'a>, tight_item: bool) -> Vec<Node> {
        node.children()
            .map(|child| self.lower(child, tight_item))
            .collect()
    }
}

/// Kind name recorded for nodes the builder does not handle.
fn node_kind(value: &NodeValue) -> &'static str {
    match value {
        NodeValue::Strong => "strong",
        NodeValue::Emph => "emph",
        NodeValue::Strikethrough => "strikethrough",
        NodeValue::BlockQuote => "block_quote",
        NodeValue::ThematicBreak => "thematic_break",
        NodeValue::CodeBlock(..) => "code_block",
        NodeValue::HtmlBlock(..) => "html_block",
        NodeValue::HtmlInline(..) => "html_inline",
        NodeValue::Table(..) => "table",
        NodeValue::TableRow(..) => "table_row",
        NodeValue::TableCell => "table_cell",
        NodeValue::Image(..) => "image",
        NodeValue::FootnoteDefinition(..) => "footnote_definition",
        NodeValue::FootnoteReference(..) => "footnote_reference",
        NodeValue::TaskItem(..) => "task_item",
        NodeValue::FrontMatter(..) => "frontmatter",
        _ => "other",
    }
}
