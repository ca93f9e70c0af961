//! Route compilation and matching engine.
//!
//! The engine is split into focused submodules under `src/engine/` and is
//! driven through [`crate::Router`].
//!
//! ## How the parts work together
//!
//! ```text
//! define time                                   request time
//! ───────────                                   ────────────
//! "/users/:id(\d+)?"                            "/users/42"
//!     │ parse_pattern        (syntax.rs)            │
//!     v                                             │
//! Vec<SegmentSpec>  ── all-or-nothing ──┐           │
//!     │ frontier fold        (compiler.rs)          │ walk  (matcher.rs)
//!     │   find_or_create ── ChildKey (dedup.rs)     │  literal > pattern
//!     v                                             v
//!   Trie arena of Nodes     (trie.rs)  ─────────> (NodeId, Params)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `syntax.rs`: the segment grammar; literal/capture/regex alternatives,
//!   optional markers and every syntax error.
//! - `trie.rs`: the node arena, `NodeId`, child collections and the ancestor
//!   chain.
//! - `dedup.rs`: `ChildKey`, the single rule deciding when a definition reuses
//!   an existing child.
//! - `compiler.rs`: expands alternation and optional segments over a frontier
//!   of insertion points.
//! - `matcher.rs`: greedy, non-backtracking walk producing captures.
//!
//! ## Debugging
//!
//! The engine emits `tracing` events: `debug` per compile call and per failed
//! match, `trace` per node created/reused and per matched segment.

#[path = "engine/compiler.rs"]
mod compiler;
#[path = "engine/dedup.rs"]
mod dedup;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/syntax.rs"]
mod syntax;
#[path = "engine/trie.rs"]
mod trie;

#[cfg(test)]
#[path = "engine/tests.rs"]
mod tests;

pub(crate) use compiler::compile;
pub(crate) use matcher::walk;
pub use matcher::Params;
pub(crate) use syntax::parse_segment_spec;
pub use syntax::{Alternative, CompiledPattern, SegmentFlags, SegmentSpec};
pub(crate) use trie::{Node, Trie};
pub use trie::NodeId;
