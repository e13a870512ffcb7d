//! Loading of the whitelist and blacklist override files.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{HostRulesError, Result};

/// One line of the whitelist file, classified but never reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhitelistLine {
    /// Empty line, passed through as an empty output line.
    Blank,
    /// `#`-prefixed line, passed through verbatim.
    Comment(String),
    /// Any other non-empty line. Its exact text is the deduplication key
    /// compared byte-for-byte against auto-generated canonical domains.
    Domain(String),
}

impl WhitelistLine {
    fn classify(line: &str) -> Self {
        if line.is_empty() {
            WhitelistLine::Blank
        } else if line.starts_with('#') {
            WhitelistLine::Comment(line.to_string())
        } else {
            WhitelistLine::Domain(line.to_string())
        }
    }
}

/// Load blacklist patterns in file order.
///
/// Lines are trimmed; blank lines and `#` comments are discarded. A missing
/// file is an empty blacklist, not an error.
pub fn load_blacklist(path: &Path) -> Result<Vec<String>> {
    let text = match read_override(path)? {
        Some(text) => text,
        None => return Ok(Vec::new()),
    };
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Load whitelist lines in file order.
///
/// Unlike the blacklist, blank and comment lines are preserved as entries:
/// they become part of the output. A missing file is an empty whitelist.
pub fn load_whitelist(path: &Path) -> Result<Vec<WhitelistLine>> {
    let text = match read_override(path)? {
        Some(text) => text,
        None => return Ok(Vec::new()),
    };
    Ok(text.lines().map(WhitelistLine::classify).collect())
}

/// Read an override file; `Ok(None)` when it does not exist.
fn read_override(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(HostRulesError::OverrideUnreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_missing_blacklist_is_empty() {
        let dir = TempDir::new().unwrap();
        let patterns = load_blacklist(&dir.path().join("preblack.hostrules")).unwrap();
        assert!(patterns.is_empty());
    }

    #[test]
    fn test_blacklist_filters_blanks_and_comments() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "black", "b.com\n\n# note\n  c.com  \n");
        let patterns = load_blacklist(&path).unwrap();
        assert_eq!(patterns, vec!["b.com", "c.com"]);
    }

    #[test]
    fn test_missing_whitelist_is_empty() {
        let dir = TempDir::new().unwrap();
        let lines = load_whitelist(&dir.path().join("prewhite.hostrules")).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_whitelist_preserves_structure() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "white", "# my domains\n.a.com\n\n.b.com\n");
        let lines = load_whitelist(&path).unwrap();
        assert_eq!(
            lines,
            vec![
                WhitelistLine::Comment("# my domains".to_string()),
                WhitelistLine::Domain(".a.com".to_string()),
                WhitelistLine::Blank,
                WhitelistLine::Domain(".b.com".to_string()),
            ]
        );
    }

    #[test]
    fn test_unreadable_override_is_an_error() {
        // A directory at the override path fails with something other than
        // NotFound; the loader must surface that instead of treating it as
        // absent.
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("white");
        fs::create_dir(&path).unwrap();
        let result = load_whitelist(&path);
        assert!(matches!(
            result,
            Err(HostRulesError::OverrideUnreadable { .. })
        ));
    }
}
