//! Child deduplication keys.
//!
//! Compiling the same definition twice must land on the same node, so every
//! find-or-create goes through a [`ChildKey`]. Two children of one parent are
//! the same entity iff their keys are equal.
//!
//! ## What counts as “the same child”
//!
//! - Literals: equal text. A group alternative without metacharacters
//!   (`:id(asdf)`) is a literal too, so it lands on a plain `asdf` node.
//! - Patterns: equal regex source. The capture name is not part of the key.
//! - Bare captures (`:id`, `:other`): all share one key.
//! - A constrained capture (`:id(.*)`) under a parent that already has the bare
//!   capture `:id` reuses it; the bare capture never gains a pattern.
//!
//! Whichever declaration created the node first keeps its name and pattern;
//! later aliases reuse it as is.

use super::syntax::Alternative;
use super::trie::{Node, NodeId, SegmentMatcher, Trie};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum ChildKey<'a> {
    Literal(&'a str),
    Capture,
    Pattern(&'a str),
}

impl<'a> ChildKey<'a> {
    pub(crate) fn from_alternative(alt: &'a Alternative) -> Self {
        match alt {
            Alternative::Literal(text) => ChildKey::Literal(text),
            Alternative::Capture => ChildKey::Capture,
            Alternative::Pattern(pattern) => ChildKey::Pattern(pattern.source()),
        }
    }

    pub(crate) fn from_node(node: &'a Node) -> Option<Self> {
        match &node.matcher {
            SegmentMatcher::Root => None,
            SegmentMatcher::Literal(text) => Some(ChildKey::Literal(text)),
            SegmentMatcher::Capture => Some(ChildKey::Capture),
            SegmentMatcher::Pattern(pattern) => Some(ChildKey::Pattern(pattern.source())),
        }
    }
}

/// Find the child of `parent` that a definition named `name` with `key`
/// resolves to, if any.
pub(crate) fn find_child(trie: &Trie, parent: NodeId, name: Option<&str>, key: ChildKey<'_>) -> Option<NodeId> {
    let node = trie.node(parent);
    let by_key = |key: ChildKey<'_>| {
        node.pattern_children.iter().copied().find(|&child| ChildKey::from_node(trie.node(child)) == Some(key))
    };
    match key {
        ChildKey::Literal(text) => node.literal_children.get(text).copied(),
        ChildKey::Capture => by_key(ChildKey::Capture),
        ChildKey::Pattern(_) => name
            .and_then(|name| {
                node.pattern_children.iter().copied().find(|&child| {
                    let child = trie.node(child);
                    matches!(child.matcher, SegmentMatcher::Capture) && child.name.as_deref() == Some(name)
                })
            })
            .or_else(|| by_key(key)),
    }
}
