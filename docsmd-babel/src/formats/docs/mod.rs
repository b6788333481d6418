//! Structured document side of the conversion
//!
//! - [`model`]: the document tree the service returns (render input).
//! - [`requests`]: the batch-update requests the service accepts (builder output, on the wire).
//! - [`styles`]: named paragraph styles and their Markdown prefixes.
//!
//! # Element Mapping Table
//!
//! | Markdown                | Edit operation / request                     | Rendered back as         |
//! |-------------------------|----------------------------------------------|--------------------------|
//! | `# Heading`             | insertText + updateParagraphStyle HEADING_n  | `#` prefix per level     |
//! | Paragraph               | insertText + updateParagraphStyle NORMAL_TEXT| plain line + blank line  |
//! | `* item` / `1. item`    | insertText + createParagraphBullets          | `* ` line                |
//! | `[text](url)`           | insertText + updateTextStyle link            | `[text](url)`            |
//! | Table                   | cell text only                               | pipe table               |
//!
//! Bold, italic, strikethrough and underline are only read (render direction).

pub mod model;
pub mod requests;
pub mod styles;

pub use model::Document;
pub use requests::{BatchUpdateRequest, Request};
pub use styles::{markdown_prefix, NamedStyle};
