use crate::engine::{self, Node, NodeId, Params, SegmentSpec, Trie};
use crate::error::RouteError;
use std::fmt;

/// A path router: one trie of compiled route patterns.
///
/// Build it by calling [`Router::compile`] for every route during setup, then
/// share it (for example behind an `Arc`) and call [`Router::match_path`] from
/// as many threads as needed. Matching never mutates the router.
#[derive(Debug, Default)]
pub struct Router {
    trie: Trie,
}

/// Result of a successful [`Router::match_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// The terminal node the path resolved to.
    pub node: NodeId,
    /// Captured parameters, by name.
    pub params: Params,
}

impl Router {
    /// Create a router holding only the root node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `pattern` into the trie and return its terminal nodes.
    ///
    /// Re-declaring a pattern returns the nodes created the first time.
    /// On error the trie is left exactly as it was.
    ///
    /// # Example
    /// ```
    /// use pathtrie::Router;
    ///
    /// let mut router = Router::new();
    /// assert_eq!(router.compile("/a|b/c|d").unwrap().len(), 4);
    /// assert!(router.compile("/files/*").is_err());
    /// ```
    pub fn compile(&mut self, pattern: &str) -> Result<Vec<NodeId>, RouteError> {
        engine::compile(&mut self.trie, pattern)
    }

    /// Match a concrete request path.
    ///
    /// Returns `None` when no compiled route accepts the path.
    ///
    /// # Example
    /// ```
    /// use pathtrie::Router;
    ///
    /// let mut router = Router::new();
    /// let routes = router.compile("/users/:id").unwrap();
    ///
    /// let found = router.match_path("/users/42").unwrap();
    /// assert_eq!(found.node, routes[0]);
    /// assert_eq!(found.params["id"], "42");
    /// assert!(router.match_path("/users").is_none());
    /// ```
    pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
        engine::walk(&self.trie, path).map(|(node, params)| RouteMatch { node, params })
    }

    pub fn root(&self) -> NodeRef<'_> {
        NodeRef { trie: &self.trie, id: NodeId::ROOT }
    }

    /// Read-only view of a node, or `None` when `id` is outside this router.
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.trie.get(id).map(|_| NodeRef { trie: &self.trie, id })
    }

    /// Read-only view of a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this router.
    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        match self.get(id) {
            Some(node) => node,
            None => panic!("node {} does not belong to this router", id.index()),
        }
    }

    /// Rebuild a pattern string for `id` from its ancestor chain.
    ///
    /// ```
    /// use pathtrie::Router;
    ///
    /// let mut router = Router::new();
    /// let ends = router.compile(r"/users/:id(\d+|new)").unwrap();
    /// assert_eq!(router.route_string(ends[0]), "/users/:id(new)");
    /// assert_eq!(router.route_string(ends[1]), r"/users/:id(\d+)");
    /// ```
    pub fn route_string(&self, id: NodeId) -> String {
        self.node(id).route_string()
    }

    /// Number of nodes in the trie, root included.
    pub fn node_count(&self) -> usize {
        self.trie.len()
    }
}

/// Validate and parse a single path segment token such as `:id(\d+)?`.
pub fn parse_segment(token: &str) -> Result<SegmentSpec, RouteError> {
    engine::parse_segment_spec(token).map_err(|err| err.in_pattern(token))
}

/// A borrowed, read-only view of one trie node.
#[derive(Clone, Copy)]
pub struct NodeRef<'r> {
    trie: &'r Trie,
    id: NodeId,
}

impl<'r> NodeRef<'r> {
    fn at(&self, id: NodeId) -> NodeRef<'r> {
        NodeRef { trie: self.trie, id }
    }

    fn inner(&self) -> &'r Node {
        self.trie.node(self.id)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn is_root(&self) -> bool {
        self.id == NodeId::ROOT
    }

    /// True once a compile call has returned this node.
    pub fn is_terminal(&self) -> bool {
        self.inner().terminal
    }

    /// Literal text this node matches; empty for pattern nodes and the root.
    pub fn literal(&self) -> &'r str {
        self.inner().literal().unwrap_or("")
    }

    /// Capture name bound when this node matches; empty when it binds nothing.
    pub fn param_name(&self) -> &'r str {
        self.name().unwrap_or("")
    }

    pub fn name(&self) -> Option<&'r str> {
        self.inner().name.as_deref()
    }

    /// Regex constraint as declared; empty when the node has none.
    pub fn pattern_source(&self) -> &'r str {
        self.inner().pattern().map_or("", |p| p.source())
    }

    /// Compiled constraint, present iff [`pattern_source`](Self::pattern_source) is non-empty.
    pub fn pattern(&self) -> Option<&'r engine::CompiledPattern> {
        self.inner().pattern()
    }

    pub fn parent(&self) -> Option<NodeRef<'r>> {
        self.inner().parent.map(|id| self.at(id))
    }

    /// Ancestors from the parent up to and including the root.
    pub fn ancestors(&self) -> impl Iterator<Item = NodeRef<'r>> + use<'r> {
        let this = *self;
        self.trie.ancestors(self.id).map(move |id| this.at(id))
    }

    pub fn literal_child(&self, text: &str) -> Option<NodeRef<'r>> {
        self.inner().literal_children.get(text).map(|&id| self.at(id))
    }

    /// Pattern children in declaration (= match precedence) order.
    pub fn pattern_children(&self) -> impl Iterator<Item = NodeRef<'r>> + use<'r> {
        let this = *self;
        self.inner().pattern_children.iter().map(move |&id| this.at(id))
    }

    pub fn route_string(&self) -> String {
        let mut chain: Vec<NodeRef<'r>> = std::iter::once(*self).chain(self.ancestors()).collect();
        chain.pop(); // root
        chain.reverse();
        if chain.last().is_some_and(|node| node.is_end_marker()) {
            chain.pop();
        }
        let tokens: Vec<String> = chain.iter().map(|node| node.inner().render_token()).collect();
        format!("/{}", tokens.join("/"))
    }

    fn is_end_marker(&self) -> bool {
        self.inner().literal() == Some("") && self.name().is_none()
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.trie, other.trie) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id.index())
            .field("literal", &self.literal())
            .field("name", &self.param_name())
            .field("pattern", &self.pattern_source())
            .field("terminal", &self.is_terminal())
            .finish()
    }
}
