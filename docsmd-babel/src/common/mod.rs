//! Format-independent conversion passes.

pub mod builder;
pub mod inline;
pub mod nested_to_flat;
pub mod renderer;
