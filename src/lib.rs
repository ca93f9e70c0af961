//! # pathtrie
//!
//! A path-routing engine. Route patterns are compiled into one shared prefix
//! tree; concrete request paths are then matched against it to find the most
//! specific route and its named captures.
//!
//! ```
//! use pathtrie::Router;
//!
//! let mut router = Router::new();
//! let user = router.compile(r"/users/:id(\d+)").unwrap();
//! let about = router.compile("/about|info").unwrap();
//!
//! let found = router.match_path("/users/42").unwrap();
//! assert_eq!(found.node, user[0]);
//! assert_eq!(found.params["id"], "42");
//!
//! assert_eq!(router.match_path("/info").unwrap().node, about[1]);
//! assert!(router.match_path("/users/abc").is_none());
//! ```
//!
//! ## Pattern syntax
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `users` | literal segment |
//! | `a\|b` | either literal |
//! | `:id` | named capture of any non-empty segment |
//! | `:id(\d+)` | named capture constrained by a regex |
//! | `(\d+)` | unnamed regex segment |
//! | `:id?` | optional segment (route exists with and without it) |
//!
//! A `*` outside a regex group is rejected.
//!
//! ## Precedence
//!
//! At every depth a literal child beats any pattern child; pattern children are
//! tried in the order they were first declared. Matching does not backtrack.
//!
//! ## Handler data
//!
//! The router stores no handlers. Compile returns [`NodeId`]s, which are
//! `Copy + Hash` and can key whatever the caller wants to attach to a route.

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;

pub use api::{NodeRef, RouteMatch, Router, parse_segment};
pub use engine::{Alternative, CompiledPattern, NodeId, Params, SegmentFlags, SegmentSpec};
pub use error::{RouteError, SyntaxError};
