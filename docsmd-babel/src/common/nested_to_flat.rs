//! Converts a nested Markdown tree into a flat enter/exit event stream.
//!
//! # The Algorithm
//!
//! 1. Emit `Enter(node)` when a node is first reached
//! 2. Recurse into its children in document order
//! 3. Emit `Exit(node)` once every child has been processed
//!
//! Leaves (text) still produce both events, so a consumer can attach its work
//! to either side of any node kind.

use crate::formats::markdown::nodes::Node;
use crate::ir::events::WalkEvent;

/// Converts a `Node` tree to a flat vector of `WalkEvent`s.
pub fn walk(root: &Node) -> Vec<WalkEvent<'_>> {
    let mut events = Vec::new();
    walk_node(root, &mut events);
    events
}

fn walk_node<'a>(node: &'a Node, events: &mut Vec<WalkEvent<'a>>) {
    events.push(WalkEvent::Enter(node));
    for child in node.children() {
        walk_node(child, events);
    }
    events.push(WalkEvent::Exit(node));
}
