//! Arena-backed route trie.
//!
//! Nodes live in a single `Vec` owned by the router and refer to each other by
//! [`NodeId`]. Ownership flows root → children only; the `parent` index is a
//! plain back-reference used to rebuild ancestor chains.
//!
//! ## Invariants
//!
//! - `NodeId(0)` is the root and has no parent.
//! - Every other node is listed in exactly one child collection of its parent:
//!   `literal_children` for literal nodes, `pattern_children` otherwise.
//! - Nodes are never removed. After creation only their child collections grow
//!   and their `terminal` flag may flip from false to true.

use super::syntax::CompiledPattern;
use std::collections::HashMap;

/// Stable handle to a node inside one router.
///
/// Ids are only meaningful for the router that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in its router's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// How a node consumes one path segment.
#[derive(Debug, Clone)]
pub(crate) enum SegmentMatcher {
    Root,
    Literal(String),
    Capture,
    Pattern(CompiledPattern),
}

impl SegmentMatcher {
    pub(crate) fn accepts(&self, segment: &str) -> bool {
        match self {
            SegmentMatcher::Root => false,
            SegmentMatcher::Literal(text) => text == segment,
            SegmentMatcher::Capture => !segment.is_empty(),
            SegmentMatcher::Pattern(pattern) => pattern.is_match(segment),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Node {
    pub matcher: SegmentMatcher,
    pub name: Option<String>,
    pub parent: Option<NodeId>,
    pub literal_children: HashMap<String, NodeId>,
    /// Declaration order is match precedence.
    pub pattern_children: Vec<NodeId>,
    /// Set once some compile call has returned this node.
    pub terminal: bool,
}

impl Node {
    fn new(matcher: SegmentMatcher, name: Option<String>, parent: Option<NodeId>) -> Self {
        Node {
            matcher,
            name,
            parent,
            literal_children: HashMap::new(),
            pattern_children: Vec::new(),
            terminal: false,
        }
    }

    pub fn literal(&self) -> Option<&str> {
        match &self.matcher {
            SegmentMatcher::Literal(text) => Some(text),
            _ => None,
        }
    }

    pub fn pattern(&self) -> Option<&CompiledPattern> {
        match &self.matcher {
            SegmentMatcher::Pattern(pattern) => Some(pattern),
            _ => None,
        }
    }

    /// Render this node as a pattern token that compiles back to it.
    pub fn render_token(&self) -> String {
        let name = self.name.as_deref();
        match (&self.matcher, name) {
            (SegmentMatcher::Root, _) => String::new(),
            (SegmentMatcher::Literal(text), None) => text.clone(),
            (SegmentMatcher::Literal(text), Some(name)) => format!(":{name}({text})"),
            (SegmentMatcher::Capture, Some(name)) => format!(":{name}"),
            (SegmentMatcher::Capture, None) => String::new(),
            (SegmentMatcher::Pattern(pattern), Some(name)) => format!(":{name}({})", pattern.source()),
            (SegmentMatcher::Pattern(pattern), None) => format!("({})", pattern.source()),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Trie {
    nodes: Vec<Node>,
}

impl Default for Trie {
    fn default() -> Self {
        Trie { nodes: vec![Node::new(SegmentMatcher::Root, None, None)] }
    }
}

impl Trie {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Ids handed out by this trie are always in bounds.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Append a child under `parent`, filing it by matcher kind.
    pub fn push_child(&mut self, parent: NodeId, matcher: SegmentMatcher, name: Option<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let literal = match &matcher {
            SegmentMatcher::Literal(text) => Some(text.clone()),
            _ => None,
        };
        self.nodes.push(Node::new(matcher, name, Some(parent)));

        let parent = &mut self.nodes[parent.0];
        match literal {
            Some(text) => {
                parent.literal_children.insert(text, id);
            }
            None => parent.pattern_children.push(id),
        }
        id
    }

    pub fn mark_terminal(&mut self, id: NodeId) {
        self.nodes[id.0].terminal = true;
    }

    /// Parent first, root last; excludes `id` itself.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.node(id).parent, move |&current| self.node(current).parent)
    }
}
