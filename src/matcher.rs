//! Suffix-based blacklist matching on dot-prefixed domain strings.

use tracing::warn;

/// Normalize a domain or pattern to dot-prefixed canonical form.
///
/// `example.com` becomes `.example.com`; an already dot-prefixed string is
/// returned unchanged.
pub fn canonical(domain: &str) -> String {
    if domain.starts_with('.') {
        domain.to_string()
    } else {
        format!(".{}", domain)
    }
}

/// Ordered set of blacklist suffix patterns.
///
/// Patterns are kept in file order and stored in canonical form. A pattern
/// matches a domain when the canonical strings are equal or the domain ends
/// with the pattern; because both carry a leading dot, the match boundary
/// always falls on a label separator (`notexample.com` never matches
/// `example.com`, `mail.example.com` does).
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    patterns: Vec<String>,
}

impl Blacklist {
    /// Build a blacklist from raw pattern lines.
    ///
    /// Blank lines and `#` comments are dropped here as well as in the
    /// loader; the matcher must never see them.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Vec::new();
        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let pattern = canonical(line);
            // A pattern that normalizes to a bare dot would suffix-match
            // every domain. Refuse it here instead of trusting the loader.
            if pattern == "." {
                warn!(pattern = line, "ignoring degenerate blacklist pattern");
                continue;
            }
            patterns.push(pattern);
        }
        Self { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Return the first pattern matching `domain`, if any.
    ///
    /// `domain` may be given in either bare or canonical form. Patterns are
    /// tested in list order; order only affects which pattern is reported,
    /// not whether a match occurs. Absence of a match is not an error.
    pub fn find_match(&self, domain: &str) -> Option<&str> {
        let canon;
        let domain = if domain.starts_with('.') {
            domain
        } else {
            canon = canonical(domain);
            &canon
        };
        self.patterns
            .iter()
            .find(|pattern| domain == pattern.as_str() || domain.ends_with(pattern.as_str()))
            .map(String::as_str)
    }
}
