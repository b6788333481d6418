//! Format-specific code: Markdown on one side, the structured document service on the other.

pub mod docs;
pub mod markdown;
