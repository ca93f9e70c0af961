//! Errors raised while compiling route patterns.
//!
//! Every error is detected before the trie is touched, so a failing
//! [`Router::compile`](crate::Router::compile) call never leaves partial nodes
//! behind. Matching has no error path: an unknown path is simply `None`.

/// A malformed segment in a route pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("wildcard '*' is only allowed inside a regex group: {0:?}")]
    IllegalWildcard(String),
    #[error("optional marker '?' has no segment to apply to")]
    DanglingOptional,
    #[error("optional marker '?' cannot follow a wildcard: {0:?}")]
    OptionalWildcard(String),
    #[error("optional marker '?' must end the segment: {0:?}")]
    MisplacedOptional(String),
    #[error("parameter name missing after ':' in {0:?}")]
    MissingName(String),
    #[error("unexpected text after parameter name: {0:?}")]
    TrailingText(String),
    #[error("unbalanced regex group: {0:?}")]
    UnbalancedGroup(String),
    #[error("empty alternative in segment: {0:?}")]
    EmptyAlternative(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("syntax error in route {pattern:?}: {source}")]
    Syntax {
        pattern: String,
        #[source]
        source: SyntaxError,
    },
    #[error("invalid regex in route {pattern:?}: {source}")]
    Regex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl RouteError {
    /// The route pattern that failed to compile.
    pub fn pattern(&self) -> &str {
        match self {
            RouteError::Syntax { pattern, .. } | RouteError::Regex { pattern, .. } => pattern,
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, RouteError::Syntax { .. })
    }
}

/// Error from parsing a single segment, before the owning pattern is known.
#[derive(Debug)]
pub(crate) enum SegmentError {
    Syntax(SyntaxError),
    Regex(regex::Error),
}

impl From<SyntaxError> for SegmentError {
    fn from(err: SyntaxError) -> Self {
        SegmentError::Syntax(err)
    }
}

impl From<regex::Error> for SegmentError {
    fn from(err: regex::Error) -> Self {
        SegmentError::Regex(err)
    }
}

impl SegmentError {
    pub(crate) fn in_pattern(self, pattern: &str) -> RouteError {
        let pattern = pattern.to_string();
        match self {
            SegmentError::Syntax(source) => RouteError::Syntax { pattern, source },
            SegmentError::Regex(source) => RouteError::Regex { pattern, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_messages() {
        let cases: Vec<(SyntaxError, &str)> = vec![
            (SyntaxError::IllegalWildcard("*".into()), "wildcard '*' is only allowed inside a regex group: \"*\""),
            (SyntaxError::DanglingOptional, "optional marker '?' has no segment to apply to"),
            (SyntaxError::OptionalWildcard("*?".into()), "optional marker '?' cannot follow a wildcard: \"*?\""),
            (SyntaxError::EmptyAlternative("a||b".into()), "empty alternative in segment: \"a||b\""),
        ];

        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn route_error_keeps_pattern() {
        let err = SegmentError::from(SyntaxError::DanglingOptional).in_pattern("/?");
        assert!(err.is_syntax());
        assert_eq!(err.pattern(), "/?");
        assert_eq!(err.to_string(), "syntax error in route \"/?\": optional marker '?' has no segment to apply to");
    }
}
