use pathtrie::{NodeId, RouteMatch, Router};

/// What a piece of report text is, independent of how it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    /// Section banners.
    Banner,
    /// The request path being matched.
    Request,
    /// Route patterns as declared.
    Pattern,
    /// Matched routes and counts of declared routes.
    Hit,
    /// Node ids and the "possible reasons" header.
    Note,
    /// Captured parameter names and terminal counts.
    Param,
}

impl Role {
    fn sgr(self) -> &'static str {
        match self {
            Role::Banner => "90",
            Role::Request | Role::Param => "36",
            Role::Pattern => "34",
            Role::Hit => "32",
            Role::Note => "33",
        }
    }
}

/// Wraps report text in ANSI SGR sequences when colour is on.
struct Palette {
    enabled: bool,
}

impl Palette {
    fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn sgr(&self, code: &str, s: impl AsRef<str>) -> String {
        if self.enabled { format!("\x1b[{code}m{}\x1b[0m", s.as_ref()) } else { s.as_ref().to_string() }
    }

    fn paint(&self, s: impl AsRef<str>, role: Role) -> String {
        self.sgr(role.sgr(), s)
    }

    fn bold(&self, s: impl AsRef<str>) -> String {
        self.sgr("1", s)
    }

    fn dim(&self, s: impl AsRef<str>) -> String {
        self.sgr("2", s)
    }
}

pub fn print_run(path: &str, router: &Router, routes: &[(String, Vec<NodeId>)], found: Option<&RouteMatch>, color: bool) {
    let palette = Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Matching: \"{}\"", path), Role::Request)));

    println!("\n{}", palette.paint("━━━ Routes ━━━", Role::Banner));
    print_routes(router, routes, found, &palette);

    println!("\n{}", palette.paint("━━━ Result ━━━", Role::Banner));
    match found {
        Some(found) => print_match(router, routes, found, &palette),
        None => {
            println!("{}", palette.dim("  No route matched"));
            println!("\n{}", palette.paint("Possible reasons:", Role::Note));
            println!("  • A segment matched no literal and no pattern at its depth");
            println!("  • An earlier literal or pattern took the segment (matching never backtracks)");
            println!("  • The path ends on a prefix of a route rather than a whole route");
            println!("\n{}", palette.dim("  Tip: Set PATHTRIE_LOG=debug to see where the walk stopped"));
        }
    }

    println!("\n{}", palette.paint("━━━ Trie ━━━", Role::Banner));
    println!(
        "  Routes: {}  │  Terminals: {}  │  Nodes: {}",
        palette.paint(routes.len().to_string(), Role::Hit),
        palette.paint(routes.iter().map(|(_, ends)| ends.len()).sum::<usize>().to_string(), Role::Param),
        palette.dim(router.node_count().to_string()),
    );
    println!();
}

fn print_routes(router: &Router, routes: &[(String, Vec<NodeId>)], found: Option<&RouteMatch>, palette: &Palette) {
    for (idx, (pattern, ends)) in routes.iter().enumerate() {
        let hit = found.is_some_and(|m| ends.contains(&m.node));
        let marker = if hit { palette.paint("✓", Role::Hit) } else { palette.dim("·") };
        println!(
            "  {} {} {} {}",
            palette.paint(format!("[{}]", idx), Role::Banner),
            marker,
            palette.paint(pattern, Role::Pattern),
            palette.dim(format!("({} terminal{})", ends.len(), if ends.len() == 1 { "" } else { "s" })),
        );
        for &end in ends.iter().take(5) {
            println!("      {}", palette.dim(router.route_string(end)));
        }
        if ends.len() > 5 {
            println!("      {}", palette.dim(format!("... +{} more", ends.len() - 5)));
        }
    }
}

fn print_match(router: &Router, routes: &[(String, Vec<NodeId>)], found: &RouteMatch, palette: &Palette) {
    println!(
        "  {} {} {}",
        palette.bold(palette.paint(router.route_string(found.node), Role::Hit)),
        palette.dim("│"),
        palette.paint(format!("node #{}", found.node.index()), Role::Note),
    );

    let declared: Vec<&str> =
        routes.iter().filter(|(_, ends)| ends.contains(&found.node)).map(|(pattern, _)| pattern.as_str()).collect();
    if !declared.is_empty() {
        println!("      {} {}", palette.dim("declared by:"), palette.paint(declared.join(", "), Role::Pattern));
    }

    if found.params.is_empty() {
        println!("      {}", palette.dim("no params"));
        return;
    }
    let mut params: Vec<(&String, &String)> = found.params.iter().collect();
    params.sort();
    for (name, value) in params {
        println!("      {} {}", palette.paint(format!("{name}:"), Role::Param), value);
    }
}
