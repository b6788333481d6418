//! Error types for conversion and submission

use thiserror::Error;

/// Errors that can occur while converting or submitting a document
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// Markdown input could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
    /// A structured document could not be decoded
    #[error("Document error: {0}")]
    Document(String),
    /// The document service rejected an edit operation
    ///
    /// `operation` is the 1-based index of the rejected operation under the
    /// sequential policy, and `None` when an atomic batch was rejected as a whole.
    #[error("{}", describe_submission(.operation, .applied, .source))]
    Submission {
        operation: Option<usize>,
        applied: usize,
        #[source]
        source: ServiceError,
    },
    /// Submission stopped by a cancellation request or deadline
    #[error("Submission cancelled after {applied} applied operation(s)")]
    Cancelled { applied: usize },
}

fn describe_submission(
    operation: &Option<usize>,
    applied: &usize,
    source: &ServiceError,
) -> String {
    match operation {
        Some(index) => format!(
            "Operation {index} rejected by the document service ({applied} applied before it): {source}"
        ),
        None => format!("Batch rejected by the document service: {source}"),
    }
}

/// A rejection reported by a [`DocumentService`](crate::submit::DocumentService)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ServiceError {
    pub message: String,
}

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        ServiceError {
            message: message.into(),
        }
    }
}
