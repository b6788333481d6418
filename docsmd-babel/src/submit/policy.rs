//! How edit operations are handed to the document service.

use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPolicy {
    /// One batch request with every operation; the service applies all or nothing.
    #[default]
    Atomic,
    /// One request per operation, in order, with `delay` between consecutive
    /// requests. Stops at the first rejection and leaves earlier operations applied.
    Sequential { delay: Duration },
}

impl SubmissionPolicy {
    pub fn sequential(delay: Duration) -> Self {
        SubmissionPolicy::Sequential { delay }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SubmissionPolicy::Atomic => "atomic",
            SubmissionPolicy::Sequential { .. } => "sequential",
        }
    }
}

impl fmt::Display for SubmissionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionPolicy::Atomic => write!(f, "atomic"),
            SubmissionPolicy::Sequential { delay } => {
                write!(f, "sequential ({}ms between operations)", delay.as_millis())
            }
        }
    }
}
