use once_cell::sync::Lazy;
use regex::Regex;

/// Regex pattern for lines of interest in the rule source.
/// Format: server=/<domain>/<address>
static SERVER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"server=/([^/]+)/").expect("SERVER_PATTERN: hardcoded regex is invalid")
});

/// Extract domain tokens from rule-source text.
///
/// Tokens come out in source order, duplicates preserved and taken verbatim
/// with no validation. Lines without a `server=/<domain>/` pattern contribute
/// nothing. The iterator is lazy and can be restarted by calling again on the
/// same text.
pub fn domains(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter_map(|line| {
        SERVER_PATTERN
            .captures(line)
            .map(|captures| captures.get(1).unwrap().as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_pattern_regex_compiles() {
        // Forces Lazy evaluation; if the pattern is invalid, this panics
        // with the expect message rather than an opaque unwrap.
        assert!(SERVER_PATTERN.is_match("server=/example.com/114.114.114.114"));
    }

    #[test]
    fn test_extracts_in_source_order() {
        let text = "server=/a.com/1.1.1.1\nserver=/b.com/2.2.2.2\ngarbage\n";
        let tokens: Vec<&str> = domains(text).collect();
        assert_eq!(tokens, vec!["a.com", "b.com"]);
    }

    #[test]
    fn test_ignores_lines_without_pattern() {
        let text = "# comment\naddress=/a.com/1.1.1.1\n\nplain text\n";
        assert_eq!(domains(text).count(), 0);
    }

    #[test]
    fn test_duplicates_preserved() {
        let text = "server=/a.com/1.1.1.1\nserver=/a.com/8.8.8.8\n";
        let tokens: Vec<&str> = domains(text).collect();
        assert_eq!(tokens, vec!["a.com", "a.com"]);
    }

    #[test]
    fn test_token_taken_verbatim() {
        // No validation: malformed tokens pass through untouched.
        let text = "server=/not a domain!/1.1.1.1\n";
        let tokens: Vec<&str> = domains(text).collect();
        assert_eq!(tokens, vec!["not a domain!"]);
    }

    #[test]
    fn test_pattern_anywhere_in_line() {
        let text = "some prefix server=/a.com/114.114.114.114 trailing\n";
        let tokens: Vec<&str> = domains(text).collect();
        assert_eq!(tokens, vec!["a.com"]);
    }

    #[test]
    fn test_token_must_not_contain_slash() {
        // "server=//1.1.1.1" has an empty token; [^/]+ requires at least one
        // character, so the line contributes nothing.
        let text = "server=//1.1.1.1\n";
        assert_eq!(domains(text).count(), 0);
    }

    #[test]
    fn test_restartable() {
        let text = "server=/a.com/1.1.1.1\n";
        assert_eq!(domains(text).count(), 1);
        assert_eq!(domains(text).count(), 1);
    }
}
