//! Path matcher: walks the trie one input segment at a time.
//!
//! At each node the literal children are consulted first; pattern children are
//! tried only when no literal matches, in declaration order. The walk never
//! backtracks: once a child is picked for a segment, a later failure fails the
//! whole match.
//!
//! ```text
//! path: /users/42          routes: /users/new, /users/:id(\d+)
//!
//! root ─"users"→ users ─"42"→ (no literal "42") → :id(\d+) ─""→ end ✓
//!                      params { id: "42" }
//! ```

use super::syntax;
use super::trie::{NodeId, Trie};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Mapping from capture name to the segment text it consumed.
pub type Params = HashMap<String, String>;

/// Walk `path` and return the terminal node reached plus its captures.
pub(crate) fn walk(trie: &Trie, path: &str) -> Option<(NodeId, Params)> {
    let trimmed = syntax::trim_separators(path);
    let mut current = NodeId::ROOT;
    let mut params = Params::new();

    for segment in syntax::split_segments(trimmed).chain(std::iter::once("")) {
        let Some(child) = step(trie, current, segment) else {
            debug!(path, segment, depth = trie.ancestors(current).count(), "no matching child");
            return None;
        };
        trace!(segment, node = child.index(), "matched segment");

        if let Some(name) = &trie.node(child).name {
            params.insert(name.clone(), segment.to_string());
        }
        current = child;
    }

    if !trie.node(current).terminal {
        debug!(path, node = current.index(), "path ends on a non-terminal node");
        return None;
    }
    Some((current, params))
}

/// Pick the child of `node` that consumes `segment`.
fn step(trie: &Trie, node: NodeId, segment: &str) -> Option<NodeId> {
    let node = trie.node(node);
    if let Some(&child) = node.literal_children.get(segment) {
        return Some(child);
    }
    node.pattern_children.iter().copied().find(|&child| trie.node(child).matcher.accepts(segment))
}
