//! Defines the flat enter/exit event stream walked by the builder.

use crate::formats::markdown::nodes::Node;

/// One step of a depth-first traversal.
///
/// Every node produces an `Enter` before any of its descendants and an `Exit`
/// after all of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WalkEvent<'a> {
    Enter(&'a Node),
    Exit(&'a Node),
}

impl<'a> WalkEvent<'a> {
    pub fn node(&self) -> &'a Node {
        match self {
            WalkEvent::Enter(node) | WalkEvent::Exit(node) => node,
        }
    }

    pub fn is_enter(&self) -> bool {
        matches!(self, WalkEvent::Enter(_))
    }
}
