//! Intermediate representation shared by the builder and the submitter.
//!
//! - [`events`]: the flat enter/exit stream produced from a Markdown tree.
//! - [`ops`]: the ordered edit operations the builder emits.

pub mod events;
pub mod ops;
