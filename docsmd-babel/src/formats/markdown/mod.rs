//! Markdown side of the conversion
//!
//! # Library Choice
//!
//! Parsing is delegated to `comrak` with the GitHub-flavored extensions this
//! tool cares about (tables, strikethrough, autolinks) and heading anchors.
//! The comrak arena tree is lowered into [`nodes::Node`], a closed sum type that
//! the builder can match exhaustively.
//!
//! # Node Mapping
//!
//! | Comrak node            | Node                      | Builder behaviour                     |
//! |------------------------|---------------------------|---------------------------------------|
//! | Document               | Document                  | transparent                           |
//! | Heading                | Heading { level, anchor } | `HEADING_<level>` paragraph style     |
//! | Paragraph              | Paragraph                 | paragraph break + `NORMAL_TEXT`       |
//! | Paragraph (tight item) | TextBlock                 | transparent                           |
//! | Text                   | Text                      | text insertion                        |
//! | SoftBreak / LineBreak  | Text(" ")                 | text insertion                        |
//! | List                   | List { ordered, tight }   | bullets over the list's range         |
//! | Item                   | ListItem                  | paragraph break                       |
//! | Link                   | Link { destination }      | link over the visible text            |
//! | Code                   | Other("code") + Text      | literal inserted, no style            |
//! | anything else          | Other(kind)               | logged, children still visited        |
//!
//! Markdown output is not produced through comrak: the renderer in
//! `common::renderer` writes it directly from the structured document.

pub mod nodes;
pub mod parser;

pub use nodes::{MarkdownDocument, Node};
pub use parser::{parse_markdown, parse_markdown_bytes};
