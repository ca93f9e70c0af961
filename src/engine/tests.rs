use crate::{NodeId, Router};

fn compiled(router: &mut Router, pattern: &str) -> Vec<NodeId> {
    match router.compile(pattern) {
        Ok(ends) => ends,
        Err(err) => panic!("{pattern:?} should compile: {err}"),
    }
}

fn parent(router: &Router, id: NodeId) -> NodeId {
    router.node(id).parent().map(|p| p.id()).expect("node has a parent")
}

// --- define -----------------------------------------------------------------

#[test]
fn root_route() {
    let mut router = Router::new();
    let routes = compiled(&mut router, "");
    assert_eq!(routes.len(), 1);

    let route = router.node(routes[0]);
    assert_eq!(route.literal(), "");
    assert_eq!(route.param_name(), "");
    assert_eq!(route.parent(), Some(router.root()));
    assert_eq!(router.root().literal_child(""), Some(route));

    assert_eq!(compiled(&mut router, "/"), routes);
}

#[test]
fn first_and_second_level_children() {
    let mut router = Router::new();
    let routes = compiled(&mut router, "/asdf/wqer");
    assert_eq!(routes.len(), 1);

    let ancestors: Vec<_> = router.node(routes[0]).ancestors().collect();
    assert_eq!(ancestors.len(), 3);
    assert_eq!(ancestors[0].literal(), "wqer");
    assert_eq!(ancestors[1].literal(), "asdf");
    assert!(ancestors[2].is_root());
}

#[test]
fn named_and_regex_routes() {
    let mut router = Router::new();
    let named = compiled(&mut router, "/:id");
    let param = router.node(parent(&router, named[0]));
    assert_eq!(param.param_name(), "id");
    assert_eq!(param.pattern_source(), "");
    assert!(param.pattern().is_none());

    let mut router = Router::new();
    let constrained = compiled(&mut router, r"/:id(\w{3,30})");
    let param = router.node(parent(&router, constrained[0]));
    assert_eq!(param.param_name(), "id");
    assert_eq!(param.pattern_source(), r"\w{3,30}");
    assert!(param.pattern().is_some_and(|p| p.is_match("asd") && !p.is_match("a")));
}

#[test]
fn regex_alternation_yields_sibling_patterns() {
    let mut router = Router::new();
    let routes = compiled(&mut router, r"/:id(\w{3,30}|[0-9a-f]{24})");
    assert_eq!(routes.len(), 2);

    let first = router.node(parent(&router, routes[0]));
    let second = router.node(parent(&router, routes[1]));
    assert_ne!(first, second);
    assert_eq!(first.param_name(), "id");
    assert_eq!(second.param_name(), "id");
    assert_eq!(first.pattern_source(), r"\w{3,30}");
    assert_eq!(second.pattern_source(), "[0-9a-f]{24}");
    assert_eq!(first.parent(), second.parent());
}

#[test]
fn unnamed_regex_group() {
    let mut router = Router::new();
    let routes = compiled(&mut router, r"/(\w{3,30}|[0-9a-f]{24})");
    assert_eq!(routes.len(), 2);
    for &route in &routes {
        let node = router.node(parent(&router, route));
        assert_eq!(node.param_name(), "");
        assert!(!node.pattern_source().is_empty());
    }
}

#[test]
fn string_and_regex_alternatives() {
    let mut router = Router::new();
    let routes = compiled(&mut router, r"/:id(\w{3,30}|asdf)");
    assert_eq!(routes.len(), 2);

    let literal = router.node(parent(&router, routes[0]));
    assert_eq!(literal.param_name(), "id");
    assert_eq!(literal.literal(), "asdf");
    assert_eq!(literal.pattern_source(), "");

    let regex = router.node(parent(&router, routes[1]));
    assert_eq!(regex.param_name(), "id");
    assert_eq!(regex.pattern_source(), r"\w{3,30}");
}

#[test]
fn multiple_string_routes() {
    let cases: Vec<(&str, &str)> = vec![("/asdf|qwer", ""), ("/:id(asdf|qwer)", "id")];

    for (pattern, name) in cases {
        let mut router = Router::new();
        let routes = compiled(&mut router, pattern);
        assert_eq!(routes.len(), 2, "pattern {pattern:?}");

        let first = router.node(parent(&router, routes[0]));
        let second = router.node(parent(&router, routes[1]));
        assert_eq!((first.literal(), first.param_name()), ("asdf", name));
        assert_eq!((second.literal(), second.param_name()), ("qwer", name));
    }
}

#[test]
fn literal_is_not_duplicated_by_pattern_alias() {
    let mut router = Router::new();
    let plain = compiled(&mut router, "/asdf");
    let alias = compiled(&mut router, "/:id(asdf)");

    assert_eq!(plain, alias);
    assert_eq!(router.node(parent(&router, alias[0])).param_name(), "");
}

#[test]
fn regex_is_not_duplicated_under_another_name() {
    let mut router = Router::new();
    let a = compiled(&mut router, r"/:a(\w{3,30})");
    let b = compiled(&mut router, r"/:b(\w{3,30})");

    assert_eq!(a, b);
    assert_eq!(router.node(parent(&router, b[0])).param_name(), "a");
}

#[test]
fn bare_captures_share_the_first_name() {
    let mut router = Router::new();
    let a = compiled(&mut router, "/:a");
    let b = compiled(&mut router, "/:b");
    assert_eq!(a, b);
    assert_eq!(router.match_path("/x").unwrap().params["a"], "x");
}

#[test]
fn alternation_multiplies_every_segment() {
    let mut router = Router::new();
    let cases: Vec<(&str, usize)> = vec![("/a|b/c|d", 4), ("/a|b|c/d|e|f", 9), ("/1|4/2|3/6|2", 8)];

    for (pattern, expected) in cases {
        let routes = compiled(&mut router, pattern);
        assert_eq!(routes.len(), expected, "pattern {pattern:?}");

        let mut distinct = routes.clone();
        distinct.sort();
        distinct.dedup();
        assert_eq!(distinct.len(), expected);
    }
}

#[test]
fn redeclaration_is_idempotent() {
    let patterns = ["", "/asdf", "/a|b/c|d", r"/:id(\w+|x)?/edit", "/users/:id/posts/:post?"];
    let mut router = Router::new();

    for pattern in patterns {
        let first = compiled(&mut router, pattern);
        let count = router.node_count();
        let second = compiled(&mut router, pattern);
        assert_eq!(first, second, "pattern {pattern:?}");
        assert_eq!(router.node_count(), count);
    }
}

#[test]
fn trailing_slashes_do_not_matter() {
    let mut router = Router::new();
    let with_slash = compiled(&mut router, "/asdf/");
    let without = compiled(&mut router, "/asdf");
    assert_eq!(with_slash, without);
    assert_eq!(compiled(&mut router, "asdf"), without);
}

#[test]
fn wildcards_outside_groups_are_rejected() {
    let mut router = Router::new();
    for pattern in ["/*", "/*/", "/asdf/*", "/*asdf", "/asdf*", "/?", "/*?"] {
        let err = router.compile(pattern).expect_err(pattern);
        assert!(err.is_syntax(), "pattern {pattern:?}: {err}");
        assert_eq!(err.pattern(), pattern);
    }
    assert_eq!(router.node_count(), 1);

    assert!(router.compile("/:id(.*)").is_ok());
}

#[test]
fn optional_segment_shares_its_parent() {
    let mut router = Router::new();
    let routes = compiled(&mut router, "/x?");
    assert_eq!(routes.len(), 2);

    let include: Vec<_> = router.node(routes[0]).ancestors().collect();
    let skip: Vec<_> = router.node(routes[1]).ancestors().collect();
    assert_eq!((include.len(), skip.len()), (2, 1));
    assert_eq!(include[0].literal(), "x");
    assert_eq!(include[1], skip[0]);
    assert!(skip[0].is_root());
}

#[test]
fn optional_continuation_is_built_once_per_branch_point() {
    let mut router = Router::new();
    let routes = compiled(&mut router, "/a/:id?/b");
    assert_eq!(routes.len(), 2);

    let a = router.root().literal_child("a").unwrap();
    let id = a.pattern_children().next().unwrap();
    assert_eq!(id.literal_child("b").and_then(|b| b.literal_child("")).map(|n| n.id()), Some(routes[0]));
    assert_eq!(a.literal_child("b").and_then(|b| b.literal_child("")).map(|n| n.id()), Some(routes[1]));
}

// --- match ------------------------------------------------------------------

#[test]
fn match_root_path() {
    let mut router = Router::new();
    let routes = compiled(&mut router, "");

    let found = router.match_path("").unwrap();
    assert!(found.params.is_empty());
    assert_eq!(found.node, routes[0]);
    assert_eq!(router.match_path("/").map(|m| m.node), Some(routes[0]));
}

#[test]
fn empty_path_needs_a_root_route() {
    let mut router = Router::new();
    compiled(&mut router, "/a");
    assert!(router.match_path("").is_none());
}

#[test]
fn match_top_level_literal() {
    let mut router = Router::new();
    let routes = compiled(&mut router, "/favicon.ico");

    let found = router.match_path("/favicon.ico").unwrap();
    assert!(found.params.is_empty());
    assert_eq!(found.node, routes[0]);
}

#[test]
fn match_named_parameter() {
    let mut router = Router::new();
    let routes = compiled(&mut router, "/:id");

    let found = router.match_path("/asdf").unwrap();
    assert_eq!(found.params.len(), 1);
    assert_eq!(found.params["id"], "asdf");
    assert_eq!(found.node, routes[0]);
}

#[test]
fn match_regex() {
    let mut router = Router::new();
    let routes = compiled(&mut router, r"/:id(\w{3,30})");

    let found = router.match_path("/asdf").unwrap();
    assert_eq!(found.params["id"], "asdf");
    assert_eq!(found.node, routes[0]);

    assert!(router.match_path("/a").is_none());
}

#[test]
fn first_declared_regex_wins() {
    let mut router = Router::new();
    compiled(&mut router, r"/:id(\w{3,30})");
    compiled(&mut router, "/:id([0-9a-f]{24})");

    let found = router.match_path("/asdfasdfasdfasdfasdfasdf").unwrap();
    assert_eq!(found.params["id"], "asdfasdfasdfasdfasdfasdf");
    assert_eq!(router.node(parent(&router, found.node)).pattern_source(), r"\w{3,30}");
}

#[test]
fn strings_win_over_regex() {
    let mut router = Router::new();
    compiled(&mut router, "/asdf");
    compiled(&mut router, r"/:id(\w{3,30})");

    let found = router.match_path("/asdf").unwrap();
    assert!(found.params.is_empty());
    assert_eq!(router.node(parent(&router, found.node)).literal(), "asdf");
}

#[test]
fn generic_name_is_not_overwritten() {
    let mut router = Router::new();
    compiled(&mut router, "/:id");
    compiled(&mut router, "/:id(.*)");

    let found = router.match_path("/a").unwrap();
    assert_eq!(found.params["id"], "a");
    assert!(router.node(parent(&router, found.node)).pattern().is_none());
}

#[test]
fn bare_capture_absorbs_constrained_redeclarations() {
    let mut router = Router::new();
    let bare = compiled(&mut router, "/:id");
    let count = router.node_count();

    assert_eq!(compiled(&mut router, "/:id(.*)"), bare);
    assert_eq!(compiled(&mut router, r"/:id(\d+)"), bare);
    assert_eq!(router.node_count(), count);

    let found = router.match_path("/7").unwrap();
    assert_eq!(found.node, bare[0]);
    assert!(router.node(parent(&router, found.node)).pattern().is_none());

    // a different name still gets its own constrained sibling
    let other = compiled(&mut router, r"/:n(\d+)");
    assert_ne!(other, bare);
    assert_eq!(router.root().pattern_children().count(), 2);
}

#[test]
fn optional_parameter_matches_with_and_without() {
    let mut router = Router::new();
    let routes = compiled(&mut router, "/posts/:id?");

    let with = router.match_path("/posts/7").unwrap();
    assert_eq!(with.node, routes[0]);
    assert_eq!(with.params["id"], "7");

    let without = router.match_path("/posts").unwrap();
    assert_eq!(without.node, routes[1]);
    assert!(without.params.is_empty());
}

#[test]
fn named_literal_alternative_binds_its_name() {
    let mut router = Router::new();
    compiled(&mut router, "/:kind(posts|pages)/:id");

    let found = router.match_path("/pages/12").unwrap();
    assert_eq!(found.params["kind"], "pages");
    assert_eq!(found.params["id"], "12");
}

#[test]
fn unmatched_segment_is_a_miss() {
    let mut router = Router::new();
    compiled(&mut router, r"/users/:id(\d+)/edit");
    compiled(&mut router, "/about");

    for path in ["/users/x/edit", "/users/1/view", "/users/1", "/contact", "/about/more"] {
        assert!(router.match_path(path).is_none(), "path {path:?}");
    }
}
