//! Conversion between Markdown and structured documents
//!
//!     This crate converts Markdown into the edit operations a structured document service
//!     (paragraphs, named styles, bullets, links, addressed by UTF-16 index) accepts, and renders
//!     documents fetched from such a service back into Markdown.
//!
//!     TLDR:
//!         - Markdown is parsed with comrak and lowered into a small tree (formats/markdown).
//!         - The builder walks that tree and emits position-addressed operations (common/builder.rs).
//!         - Operations become wire requests (formats/docs/requests.rs) and are submitted under a
//!           policy (submit).
//!         - The renderer walks a fetched document and writes Markdown (common/renderer.rs).
//!
//! Architecture
//!
//!     The two directions do not share a tree. Markdown → document is a compiler: a depth-first
//!     walk over the Markdown tree with one cursor, producing a flat list of operations
//!     (./ir/ops.rs). Document → Markdown is a plain traversal of the service's JSON model
//!     (./formats/docs/model.rs).
//!
//!     This is a pure lib, it powers docsmd-cli but is shell agnostic: no printing, no env vars.
//!     The only side effects are the calls made through the DocumentService trait.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── formats
//!     │   ├── markdown            # comrak → Node tree
//!     │   └── docs                # document model, wire requests, named styles
//!     ├── ir                      # walk events and edit operations
//!     ├── common                  # builder, inline and document renderers, tree walk
//!     ├── submit                  # policies, cancellation, in-memory service
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── common                  # shared helpers (recording service, normalization)
//!     ├── markdown                # Markdown → operations
//!     └── docs                    # document → Markdown, submission, round trips
//!
//!     Rust does not discover tests in subdirectories, so tests/lib.rs includes them as modules.
//!
//! Library Choices
//!
//!     Markdown parsing is comrak's, we never tokenize Markdown ourselves; the lowering only picks
//!     the nodes the builder understands and keeps the rest as opaque kinds. The document model
//!     and requests are serde types mirroring the service JSON.
//!
pub mod common;
pub mod error;
pub mod formats;
pub mod ir;
pub mod submit;

pub use common::builder::{BuildOptions, BuildOutput, DocumentBuilder};
pub use error::{ConvertError, ServiceError};
pub use formats::docs::{BatchUpdateRequest, Document};
pub use formats::markdown::{parse_markdown, MarkdownDocument};
pub use ir::ops::{EditOperation, StyleRange};
pub use submit::{submit, Cancellation, DocumentService, LocalDocument, SubmissionPolicy};

/// Compiles a Markdown tree into edit operations using the default presets.
///
/// Nodes the builder does not handle are logged and skipped (their text still
/// lands in the document); use [`DocumentBuilder`] directly to see which kinds
/// were skipped or to change the list presets.
pub fn markdown_to_structured_doc(document: &MarkdownDocument) -> Vec<EditOperation> {
    DocumentBuilder::default().build(document).operations
}

/// Renders a structured document as Markdown.
pub fn structured_doc_to_markdown(document: &Document) -> String {
    common::renderer::render_document(document)
}

/// Wraps operations in the batch request body the service accepts.
pub fn to_batch_request(operations: &[EditOperation]) -> BatchUpdateRequest {
    BatchUpdateRequest::from_operations(operations)
}
