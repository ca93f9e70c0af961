//! Segment grammar.
//!
//! A route pattern is trimmed of leading/trailing `/` and split into tokens;
//! each token is parsed into a [`SegmentSpec`] before anything touches the
//! trie. That ordering is what makes `Router::compile` all-or-nothing: syntax
//! errors and bad regexes surface here, never halfway through an insert.
//!
//! ## Token forms
//!
//! ```text
//! asdf              literal
//! a|b               two literal alternatives
//! :id               named capture (any non-empty segment)
//! :id(\d+)          named capture constrained by a regex
//! :id(\w+|[0-9]+)   one pattern alternative per top-level '|'
//! (\d+)             unnamed regex group
//! <any of the above>?   optional segment
//! ```
//!
//! Group alternatives with no regex metacharacters (`:id(asdf|qwer)`) are
//! demoted to literal alternatives so they share nodes with plain literals.
//! Within a group, literal alternatives are ordered before pattern ones, so
//! `:id(\w{3,30}|asdf)` yields the `asdf` branch first.

use crate::error::{SegmentError, SyntaxError};
use regex::Regex;

/// Characters that make a group alternative a regex rather than a literal.
const REGEX_META: &[char] = &['\\', '.', '+', '*', '?', '(', ')', '|', '[', ']', '{', '}', '^', '$'];

bitflags::bitflags! {
    /// Shape of a parsed segment token.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SegmentFlags: u8 {
        /// Token starts with `:name`.
        const NAMED    = 1 << 0;
        /// Token carries a parenthesised regex group.
        const GROUPED  = 1 << 1;
        /// Token ends with `?`.
        const OPTIONAL = 1 << 2;
    }
}

/// A constraint regex together with the source text it was declared with.
///
/// The regex is anchored on both ends, so it must match a whole segment.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    regex: Regex,
}

impl CompiledPattern {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{source})$"))?;
        Ok(CompiledPattern { source: source.to_string(), regex })
    }

    /// The regex text as written inside the parentheses.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, segment: &str) -> bool {
        self.regex.is_match(segment)
    }
}

/// One way a segment may be satisfied.
#[derive(Debug, Clone)]
pub enum Alternative {
    /// Exact text.
    Literal(String),
    /// Any non-empty segment (a bare `:name`).
    Capture,
    /// A segment fully matched by the regex.
    Pattern(CompiledPattern),
}

/// A parsed segment token: the capture name, every alternative that applies at
/// this depth, and the token's shape.
#[derive(Debug, Clone)]
pub struct SegmentSpec {
    pub name: Option<String>,
    pub alternatives: Vec<Alternative>,
    pub flags: SegmentFlags,
}

impl SegmentSpec {
    /// The empty literal that terminates every route.
    pub(crate) fn end_marker() -> Self {
        SegmentSpec {
            name: None,
            alternatives: vec![Alternative::Literal(String::new())],
            flags: SegmentFlags::empty(),
        }
    }

    pub fn is_optional(&self) -> bool {
        self.flags.contains(SegmentFlags::OPTIONAL)
    }
}

/// Strip leading and trailing path separators.
pub(crate) fn trim_separators(path: &str) -> &str {
    path.trim_matches('/')
}

/// Split a trimmed path into segments; the empty path has none.
pub(crate) fn split_segments(trimmed: &str) -> impl Iterator<Item = &str> {
    (!trimmed.is_empty()).then(|| trimmed.split('/')).into_iter().flatten()
}

/// Parse a whole route pattern into its segment specs.
pub(crate) fn parse_pattern(pattern: &str) -> Result<Vec<SegmentSpec>, SegmentError> {
    split_segments(trim_separators(pattern)).map(parse_segment_spec).collect()
}

/// Parse one `/`-free token.
pub(crate) fn parse_segment_spec(token: &str) -> Result<SegmentSpec, SegmentError> {
    let mut flags = SegmentFlags::empty();
    let mut body = token;

    if let Some(stripped) = token.strip_suffix('?') {
        if stripped.is_empty() {
            return Err(SyntaxError::DanglingOptional.into());
        }
        if stripped.ends_with('*') {
            return Err(SyntaxError::OptionalWildcard(token.to_string()).into());
        }
        flags |= SegmentFlags::OPTIONAL;
        body = stripped;
    }

    let (name, rest) = match regex!(r"^:(\w+)").captures(body) {
        Some(caps) => {
            flags |= SegmentFlags::NAMED;
            let end = caps.get(0).map_or(0, |m| m.end());
            (caps.get(1).map(|m| m.as_str().to_string()), &body[end..])
        }
        None if body.starts_with(':') => return Err(SyntaxError::MissingName(token.to_string()).into()),
        None => (None, body),
    };
    if rest.starts_with('(') {
        flags |= SegmentFlags::GROUPED;
    }

    let alternatives = if flags.contains(SegmentFlags::GROUPED) {
        let inner = group_body(rest).ok_or_else(|| SyntaxError::UnbalancedGroup(token.to_string()))?;
        let mut alternatives = split_alternatives(inner)
            .into_iter()
            .map(|alt| classify_alternative(token, alt))
            .collect::<Result<Vec<_>, _>>()?;
        // literals first; stable, so written order holds within each kind
        alternatives.sort_by_key(|alt| !matches!(alt, Alternative::Literal(_)));
        alternatives
    } else if flags.contains(SegmentFlags::NAMED) {
        if rest.contains('*') {
            return Err(SyntaxError::IllegalWildcard(token.to_string()).into());
        }
        if !rest.is_empty() {
            return Err(SyntaxError::TrailingText(token.to_string()).into());
        }
        vec![Alternative::Capture]
    } else {
        if body.contains('*') {
            return Err(SyntaxError::IllegalWildcard(token.to_string()).into());
        }
        if body.contains('?') {
            return Err(SyntaxError::MisplacedOptional(token.to_string()).into());
        }
        body.split('|')
            .map(|alt| {
                if alt.is_empty() {
                    Err(SyntaxError::EmptyAlternative(token.to_string()))
                } else {
                    Ok(Alternative::Literal(alt.to_string()))
                }
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(SegmentSpec { name, alternatives, flags })
}

fn classify_alternative(token: &str, alt: &str) -> Result<Alternative, SegmentError> {
    if alt.is_empty() {
        return Err(SyntaxError::EmptyAlternative(token.to_string()).into());
    }
    if alt.contains(REGEX_META) {
        Ok(Alternative::Pattern(CompiledPattern::new(alt)?))
    } else {
        Ok(Alternative::Literal(alt.to_string()))
    }
}

/// Tracks regex nesting while scanning a group: escapes, character classes
/// and parenthesis depth.
#[derive(Default)]
struct GroupScanner {
    depth: usize,
    in_class: bool,
    escaped: bool,
}

impl GroupScanner {
    /// Feed one char; returns true when it is a structural char at `depth`
    /// (before this char is applied) outside any class or escape.
    fn feed(&mut self, ch: char) -> bool {
        if self.escaped {
            self.escaped = false;
            return false;
        }
        match ch {
            '\\' => {
                self.escaped = true;
                false
            }
            '[' if !self.in_class => {
                self.in_class = true;
                false
            }
            ']' if self.in_class => {
                self.in_class = false;
                false
            }
            '(' | ')' | '|' if !self.in_class => true,
            _ => false,
        }
    }
}

/// Return the text between a leading `(` and the `)` that closes it, provided
/// that `)` is the last char of `rest`.
fn group_body(rest: &str) -> Option<&str> {
    let mut scanner = GroupScanner::default();
    for (idx, ch) in rest.char_indices() {
        if !scanner.feed(ch) {
            continue;
        }
        match ch {
            '(' => scanner.depth += 1,
            ')' => {
                scanner.depth = scanner.depth.checked_sub(1)?;
                if scanner.depth == 0 {
                    return (idx + 1 == rest.len()).then(|| &rest[1..idx]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split a group body on `|` that is not nested in a sub-group, a class, or
/// escaped.
fn split_alternatives(source: &str) -> Vec<&str> {
    let mut scanner = GroupScanner::default();
    let mut parts = Vec::new();
    let mut start = 0;
    for (idx, ch) in source.char_indices() {
        if !scanner.feed(ch) {
            continue;
        }
        match ch {
            '(' => scanner.depth += 1,
            ')' => scanner.depth = scanner.depth.saturating_sub(1),
            '|' if scanner.depth == 0 => {
                parts.push(&source[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&source[start..]);
    parts
}
