//! Submitting edit operations to a document service.
//!
//! The builder only produces [`EditOperation`]s; this module decides how they
//! reach the service:
//!
//! - [`SubmissionPolicy::Atomic`]: a single batch. Either every operation is
//!   applied or none is.
//! - [`SubmissionPolicy::Sequential`]: one call per operation, in order, with a
//!   delay between calls. The first rejection stops submission; operations
//!   applied before it stay applied and the error reports how many there were.
//!
//! Nothing is retried. A [`Cancellation`] is checked before every call and
//! polled while waiting out each delay.

pub mod cancellation;
pub mod local;
pub mod policy;

pub use cancellation::Cancellation;
pub use local::LocalDocument;
pub use policy::SubmissionPolicy;

use crate::error::{ConvertError, ServiceError};
use crate::formats::docs::requests::Request;
use crate::ir::ops::EditOperation;
use std::time::{Duration, Instant};

/// Longest single sleep while waiting between sequential operations.
const PAUSE_SLICE: Duration = Duration::from_millis(10);

/// Anything that accepts batches of edit requests for a document.
pub trait DocumentService {
    /// Apply `requests` to the document, in order, as one unit.
    fn batch_update(&mut self, document_id: &str, requests: &[Request])
        -> Result<(), ServiceError>;
}

impl<S: DocumentService + ?Sized> DocumentService for &mut S {
    fn batch_update(
        &mut self,
        document_id: &str,
        requests: &[Request],
    ) -> Result<(), ServiceError> {
        (**self).batch_update(document_id, requests)
    }
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitReport {
    pub policy: SubmissionPolicy,
    /// Operations the service accepted
    pub applied: usize,
    /// Calls made to the service
    pub calls: usize,
}

/// Send `operations` to `service` under `policy`.
pub fn submit<S>(
    service: &mut S,
    document_id: &str,
    operations: &[EditOperation],
    policy: SubmissionPolicy,
    cancellation: &Cancellation,
) -> Result<SubmitReport, ConvertError>
where
    S: DocumentService + ?Sized,
{
    tracing::info!(
        document_id,
        operations = operations.len(),
        %policy,
        "submitting edit operations"
    );

    let report = match policy {
        SubmissionPolicy::Atomic => submit_atomic(service, document_id, operations, cancellation)?,
        SubmissionPolicy::Sequential { delay } => {
            submit_sequential(service, document_id, operations, delay, cancellation)?
        }
    };

    tracing::info!(
        applied = report.applied,
        calls = report.calls,
        "submission finished"
    );
    Ok(report)
}

fn submit_atomic<S>(
    service: &mut S,
    document_id: &str,
    operations: &[EditOperation],
    cancellation: &Cancellation,
) -> Result<SubmitReport, ConvertError>
where
    S: DocumentService + ?Sized,
{
    let mut report = SubmitReport {
        policy: SubmissionPolicy::Atomic,
        applied: 0,
        calls: 0,
    };
    if operations.is_empty() {
        return Ok(report);
    }
    if cancellation.is_cancelled() {
        return Err(ConvertError::Cancelled { applied: 0 });
    }

    let requests: Vec<Request> = operations.iter().map(Request::from).collect();
    report.calls = 1;
    service
        .batch_update(document_id, &requests)
        .map_err(|source| {
            tracing::error!(error = %source, "batch rejected");
            ConvertError::Submission {
                operation: None,
                applied: 0,
                source,
            }
        })?;

    report.applied = operations.len();
    Ok(report)
}

fn submit_sequential<S>(
    service: &mut S,
    document_id: &str,
    operations: &[EditOperation],
    delay: Duration,
    cancellation: &Cancellation,
) -> Result<SubmitReport, ConvertError>
where
    S: DocumentService + ?Sized,
{
    let mut report = SubmitReport {
        policy: SubmissionPolicy::Sequential { delay },
        applied: 0,
        calls: 0,
    };

    for (index, operation) in operations.iter().enumerate() {
        if index > 0 && !delay.is_zero() {
            pause(delay, cancellation);
        }
        if cancellation.is_cancelled() {
            tracing::warn!(applied = report.applied, "submission cancelled");
            return Err(ConvertError::Cancelled {
                applied: report.applied,
            });
        }

        let request = Request::from(operation);
        tracing::debug!(index = index + 1, kind = request.kind(), "sending operation");
        report.calls += 1;
        if let Err(source) = service.batch_update(document_id, std::slice::from_ref(&request)) {
            tracing::error!(index = index + 1, error = %source, "operation rejected");
            return Err(ConvertError::Submission {
                operation: Some(index + 1),
                applied: report.applied,
                source,
            });
        }
        report.applied += 1;
    }

    Ok(report)
}

/// Sleep for `delay`, waking early once `cancellation` fires.
fn pause(delay: Duration, cancellation: &Cancellation) {
    let until = Instant::now() + delay;
    while !cancellation.is_cancelled() {
        let now = Instant::now();
        if now >= until {
            break;
        }
        std::thread::sleep(PAUSE_SLICE.min(until - now));
    }
}
