//! Fully qualified symbol paths.
//!
//! A [`SymbolPath`] is an ordered list of name segments. Source text may use
//! `.`, `::` or `->` between segments; all three normalize to the same path,
//! and formatting picks the separator the caller wants.

use std::fmt;
use std::ops::Add;

use smol_str::SmolStr;

/// Ordered, separator-free name segments, e.g. `N.C.Method`.
///
/// The empty path is the global scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolPath {
    segments: Vec<SmolStr>,
}

impl SymbolPath {
    /// The global scope
    pub fn global() -> Self {
        Self::default()
    }

    /// Normalize raw text into a path.
    ///
    /// Whitespace runs collapse to one space, whitespace touching a separator
    /// is dropped, and empty segments (leading, trailing or doubled separators)
    /// are removed.
    pub fn from_text(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            let is_separator = match c {
                '.' => true,
                ':' if chars.peek() == Some(&':') => {
                    chars.next();
                    true
                }
                '-' if chars.peek() == Some(&'>') => {
                    chars.next();
                    true
                }
                _ => false,
            };

            if is_separator {
                push_segment(&mut segments, &current);
                current.clear();
            } else if c.is_whitespace() {
                if !current.is_empty() && !current.ends_with(' ') {
                    current.push(' ');
                }
            } else {
                current.push(c);
            }
        }

        push_segment(&mut segments, &current);
        Self { segments }
    }

    /// Build a path from already separated segments, normalizing each one
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut path = Self::global();
        for segment in segments {
            path = path + Self::from_text(segment.as_ref());
        }
        path
    }

    /// Strip a trailing parameter list such as `(int, string)`, returning it separately
    pub fn from_plain_text(text: &str) -> (Self, Option<String>) {
        let trimmed = text.trim_end();
        if trimmed.ends_with(')') {
            if let Some(open) = trimmed.find('(') {
                let parameters = trimmed[open..].to_string();
                return (Self::from_text(&trimmed[..open]), Some(parameters));
            }
        }
        (Self::from_text(trimmed), None)
    }

    pub fn is_global(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(SmolStr::as_str)
    }

    pub fn last_segment(&self) -> Option<&str> {
        self.segments.last().map(SmolStr::as_str)
    }

    /// The enclosing scope of this path; the global scope for one-segment paths
    pub fn without_last_segment(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.pop();
        Self { segments }
    }

    /// Whether `prefix` matches whole leading segments of this path
    pub fn starts_with(&self, prefix: &SymbolPath) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    /// Whether `suffix` matches whole trailing segments of this path
    pub fn ends_with(&self, suffix: &SymbolPath) -> bool {
        self.segments.ends_with(&suffix.segments)
    }

    /// Append one already-normalized segment
    pub fn join(&self, segment: &str) -> Self {
        self.clone() + Self::from_text(segment)
    }

    pub fn format_with_separator(&self, separator: &str) -> String {
        self.segments
            .iter()
            .map(SmolStr::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

fn push_segment(segments: &mut Vec<SmolStr>, raw: &str) {
    let segment = raw.trim();
    if !segment.is_empty() {
        segments.push(SmolStr::new(segment));
    }
}

impl Add for SymbolPath {
    type Output = SymbolPath;

    fn add(mut self, rhs: SymbolPath) -> SymbolPath {
        self.segments.extend(rhs.segments);
        self
    }
}

impl Add<&SymbolPath> for &SymbolPath {
    type Output = SymbolPath;

    fn add(self, rhs: &SymbolPath) -> SymbolPath {
        let mut segments = self.segments.clone();
        segments.extend(rhs.segments.iter().cloned());
        SymbolPath { segments }
    }
}

impl fmt::Display for SymbolPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_separator("."))
    }
}

impl From<&str> for SymbolPath {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("A.B.C", &["A", "B", "C"])]
    #[case("A::B::C", &["A", "B", "C"])]
    #[case("A->B", &["A", "B"])]
    #[case("  .A .. B.  ", &["A", "B"])]
    #[case("operator  +", &["operator +"])]
    #[case("", &[])]
    fn test_from_text_normalizes(#[case] input: &str, #[case] expected: &[&str]) {
        let path = SymbolPath::from_text(input);
        assert_eq!(path.segments().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_concatenation_is_associative() {
        let a = SymbolPath::from_text("A");
        let b = SymbolPath::from_text("B");
        let c = SymbolPath::from_text("C");
        assert_eq!((&(&a + &b) + &c), (&a + &(&b + &c)));
        assert_eq!((&a + &b).join("C").without_last_segment(), &a + &b);
    }

    #[test]
    fn test_segment_matching_is_whole_segment() {
        let path = SymbolPath::from_text("Alpha.Beta.Gamma");
        assert!(path.starts_with(&SymbolPath::from_text("Alpha.Beta")));
        assert!(!path.starts_with(&SymbolPath::from_text("Alp")));
        assert!(path.ends_with(&SymbolPath::from_text("Gamma")));
        assert!(!path.ends_with(&SymbolPath::from_text("amma")));
    }

    #[test]
    fn test_format_round_trips_segments() {
        let path = SymbolPath::from_text("N::Inner.C");
        let formatted = path.format_with_separator("::");
        assert_eq!(formatted, "N::Inner::C");
        assert_eq!(SymbolPath::from_text(&formatted), path);
    }

    #[test]
    fn test_plain_text_parameters() {
        let (path, params) = SymbolPath::from_plain_text("Foo.Bar(int, string)");
        assert_eq!(path.to_string(), "Foo.Bar");
        assert_eq!(params.as_deref(), Some("(int, string)"));
    }
}
