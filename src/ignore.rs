//! Exclusion pattern for scans.
//!
//! A single shell-style glob matched against the bare name of each directory
//! entry, never against the full or root-relative path. Matching follows
//! fnmatch with `FNM_PATHNAME | FNM_PERIOD`: wildcards never cross a `/`, and
//! a leading `.` must be matched literally. An empty pattern disables
//! exclusion.

use glob::{MatchOptions, Pattern};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

#[derive(Debug, Clone)]
enum Matcher {
    Glob(Pattern),
    Literal(String),
}

/// Compiled exclusion pattern. A disabled pattern matches nothing.
///
/// Compilation never fails: runs of `*` collapse to one, `\c` matches `c`
/// literally, and a bracket expression that does not close is taken as a
/// literal `[`.
#[derive(Debug, Clone, Default)]
pub struct ExclusionPattern {
    source: String,
    matcher: Option<Matcher>,
}

impl ExclusionPattern {
    /// Compile `pattern`. The empty string yields a pattern that matches nothing.
    pub fn new(pattern: &str) -> Self {
        if pattern.is_empty() {
            return Self::disabled();
        }

        let matcher = Pattern::new(&translate(pattern, false))
            .or_else(|_| Pattern::new(&translate(pattern, true)))
            .map(Matcher::Glob)
            .unwrap_or_else(|_| Matcher::Literal(pattern.to_string()));

        Self {
            source: pattern.to_string(),
            matcher: Some(matcher),
        }
    }

    /// Pattern that excludes nothing.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Build from an optional pattern string, as read from config or the CLI.
    pub fn from_option(pattern: Option<&str>) -> Self {
        pattern.map(Self::new).unwrap_or_default()
    }

    pub fn is_enabled(&self) -> bool {
        self.matcher.is_some()
    }

    /// The pattern as given.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// True when `name` should be excluded.
    pub fn matches(&self, name: &str) -> bool {
        match &self.matcher {
            Some(Matcher::Glob(pattern)) => pattern.matches_with(name, MATCH_OPTIONS),
            Some(Matcher::Literal(literal)) => literal == name,
            None => false,
        }
    }
}

/// Rewrite fnmatch syntax into what `glob::Pattern` accepts.
///
/// With `literal_brackets` every `[` and `]` is matched as itself, which is
/// how fnmatch reads a bracket expression that never closes.
fn translate(pattern: &str, literal_brackets: bool) -> String {
    let mut out = String::with_capacity(pattern.len() + 4);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' => {
                while chars.peek() == Some(&'*') {
                    chars.next();
                }
                out.push('*');
            }
            '\\' => match chars.next() {
                Some(escaped) => push_literal(&mut out, escaped),
                None => out.push('\\'),
            },
            '[' | ']' if literal_brackets => push_literal(&mut out, c),
            '[' if chars.peek() == Some(&'^') => {
                chars.next();
                out.push_str("[!");
            }
            _ => out.push(c),
        }
    }

    out
}

fn push_literal(out: &mut String, c: char) {
    if matches!(c, '*' | '?' | '[' | ']') {
        out.push('[');
        out.push(c);
        out.push(']');
    } else {
        out.push(c);
    }
}

/// One-shot match of `name` against `pattern`.
pub fn matches(name: &str, pattern: &str) -> bool {
    ExclusionPattern::new(pattern).matches(name)
}
