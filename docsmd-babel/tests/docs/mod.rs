//! Structured document tests
//!
//! Rendering documents back to Markdown, submitting operations, and the full
//! Markdown → document → Markdown round trip.

mod render;
mod round_trip;
