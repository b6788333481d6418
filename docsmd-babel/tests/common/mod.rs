//! Helpers shared by the integration tests.

use docsmd_babel::formats::docs::requests::Request;
use docsmd_babel::{
    markdown_to_structured_doc, parse_markdown, structured_doc_to_markdown, submit, Cancellation,
    DocumentService, LocalDocument, ServiceError, SubmissionPolicy,
};

pub const DOC_ID: &str = "test-doc";

/// A service that records every call and rejects the `fail_on_call`-th one (1-based).
#[derive(Debug, Default)]
pub struct RecordingService {
    pub calls: Vec<Vec<Request>>,
    pub fail_on_call: Option<usize>,
}

impl RecordingService {
    pub fn failing_on(call: usize) -> Self {
        RecordingService {
            calls: Vec::new(),
            fail_on_call: Some(call),
        }
    }

    /// Requests the service accepted, in order.
    pub fn applied(&self) -> Vec<&Request> {
        let accepted = match self.fail_on_call {
            Some(failed) if failed <= self.calls.len() => failed - 1,
            _ => self.calls.len(),
        };
        self.calls[..accepted].iter().flatten().collect()
    }
}

impl DocumentService for RecordingService {
    fn batch_update(&mut self, _document_id: &str, requests: &[Request]) -> Result<(), ServiceError> {
        self.calls.push(requests.to_vec());
        if self.fail_on_call == Some(self.calls.len()) {
            return Err(ServiceError::new("Invalid requests[0]: rejected by test service"));
        }
        Ok(())
    }
}

/// Trim every line, drop empty ones.
pub fn normalize(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Markdown → operations → in-memory document → Markdown.
pub fn round_trip(title: &str, markdown: &str) -> String {
    let operations = markdown_to_structured_doc(&parse_markdown(markdown));
    let mut document = LocalDocument::new(DOC_ID, title);
    submit(
        &mut document,
        DOC_ID,
        &operations,
        SubmissionPolicy::Atomic,
        &Cancellation::new(),
    )
    .expect("operations apply to a fresh document");
    structured_doc_to_markdown(&document.to_document())
}
