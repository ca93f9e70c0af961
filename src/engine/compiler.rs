//! Pattern compiler: inserts one route pattern into the trie.
//!
//! The pattern is parsed in full first (see `syntax.rs`), then folded over a
//! *frontier*: the set of nodes the next segment hangs off.
//!
//! ```text
//! pattern: /a|b/:id?
//!
//! frontier {root}
//!   a|b   -> {a, b}                     one child per (node × alternative)
//!   :id?  -> {a/:id, b/:id, a, b}       include branch, then skip branch
//!   <end> -> {a/:id/"", b/:id/"", a/"", b/""}
//! ```
//!
//! Every child goes through `find_or_create`, so nodes are shared between
//! alternation branches, optional branches and repeated compile calls.

use super::dedup::{ChildKey, find_child};
use super::syntax::{self, Alternative, SegmentSpec};
use super::trie::{NodeId, SegmentMatcher, Trie};
use crate::error::RouteError;
use tracing::{debug, trace};

/// Compile `pattern` into `trie` and return its terminal nodes in branch order.
///
/// The trie is left untouched when the pattern fails to parse.
pub(crate) fn compile(trie: &mut Trie, pattern: &str) -> Result<Vec<NodeId>, RouteError> {
    let specs = syntax::parse_pattern(pattern).map_err(|err| err.in_pattern(pattern))?;
    let end = SegmentSpec::end_marker();
    let before = trie.len();

    let mut frontier = vec![NodeId::ROOT];
    for spec in specs.iter().chain(std::iter::once(&end)) {
        frontier = advance(trie, &frontier, spec);
    }

    for &id in &frontier {
        trie.mark_terminal(id);
    }

    debug!(pattern, terminals = frontier.len(), created = trie.len() - before, "compiled route");
    Ok(frontier)
}

/// Compute the frontier after `spec`.
fn advance(trie: &mut Trie, frontier: &[NodeId], spec: &SegmentSpec) -> Vec<NodeId> {
    let mut next = Vec::with_capacity(frontier.len() * (spec.alternatives.len() + 1));

    for &parent in frontier {
        for alt in &spec.alternatives {
            let child = find_or_create(trie, parent, spec.name.as_deref(), alt);
            push_unique(&mut next, child);
        }
    }

    if spec.is_optional() {
        for &parent in frontier {
            push_unique(&mut next, parent);
        }
    }

    next
}

fn find_or_create(trie: &mut Trie, parent: NodeId, name: Option<&str>, alt: &Alternative) -> NodeId {
    if let Some(existing) = find_child(trie, parent, name, ChildKey::from_alternative(alt)) {
        trace!(parent = parent.index(), node = existing.index(), "reused node");
        return existing;
    }

    let matcher = match alt {
        Alternative::Literal(text) => SegmentMatcher::Literal(text.clone()),
        Alternative::Capture => SegmentMatcher::Capture,
        Alternative::Pattern(pattern) => SegmentMatcher::Pattern(pattern.clone()),
    };
    let id = trie.push_child(parent, matcher, name.map(str::to_string));
    trace!(parent = parent.index(), node = id.index(), name, "created node");
    id
}

fn push_unique(frontier: &mut Vec<NodeId>, id: NodeId) {
    if !frontier.contains(&id) {
        frontier.push(id);
    }
}
