/// Lazily compile a literal regex into a `&'static Regex`.
///
/// Used for the fixed pieces of the segment grammar; user-supplied constraint
/// regexes are compiled per route in `engine/syntax.rs` instead.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}
