//! Closed node model for parsed Markdown.
//!
//! The builder only understands a fixed set of node kinds. Everything else the
//! parser produces is carried as [`Node::Other`] so that traversal can still
//! reach its children.

/// A parsed Markdown document together with the source it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownDocument {
    pub source: String,
    pub root: Node,
}

impl MarkdownDocument {
    pub fn new(source: impl Into<String>, root: Node) -> Self {
        MarkdownDocument {
            source: source.into(),
            root,
        }
    }

    /// Anchors generated for every heading, in document order.
    pub fn heading_anchors(&self) -> Vec<&str> {
        let mut anchors = Vec::new();
        collect_anchors(&self.root, &mut anchors);
        anchors
    }
}

fn collect_anchors<'a>(node: &'a Node, anchors: &mut Vec<&'a str>) {
    if let Node::Heading { anchor, .. } = node {
        anchors.push(anchor.as_str());
    }
    for child in node.children() {
        collect_anchors(child, anchors);
    }
}

/// A block or inline Markdown node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Document(Vec<Node>),
    Heading {
        level: u8,
        anchor: String,
        children: Vec<Node>,
    },
    Paragraph(Vec<Node>),
    /// Inline container without its own paragraph break (tight list items)
    TextBlock(Vec<Node>),
    Text(String),
    List {
        ordered: bool,
        tight: bool,
        items: Vec<Node>,
    },
    ListItem(Vec<Node>),
    Link {
        destination: String,
        children: Vec<Node>,
    },
    /// Any node kind the converter does not map
    Other {
        kind: &'static str,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document(children)
            | Node::Paragraph(children)
            | Node::TextBlock(children)
            | Node::ListItem(children) => children,
            Node::Heading { children, .. }
            | Node::Link { children, .. }
            | Node::Other { children, .. } => children,
            Node::List { items, .. } => items,
            Node::Text(_) => &[],
        }
    }

    /// Short name of the node kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Document(_) => "document",
            Node::Heading { .. } => "heading",
            Node::Paragraph(_) => "paragraph",
            Node::TextBlock(_) => "text_block",
            Node::Text(_) => "text",
            Node::List { .. } => "list",
            Node::ListItem(_) => "list_item",
            Node::Link { .. } => "link",
            Node::Other { kind, .. } => *kind,
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        push_plain_text(self, &mut out);
        out
    }
}

fn push_plain_text(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(text),
        other => {
            for child in other.children() {
                push_plain_text(child, out);
            }
        }
    }
}
