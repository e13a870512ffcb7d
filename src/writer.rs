//! Serialization of output entries to the target file.

use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::{HostRulesError, Result};
use crate::reconcile::OutputEntry;

/// Render entries to the final document, one line per entry, each terminated
/// with a single newline. The comment-prefix convention for blacklisted
/// entries and the separator text are applied here and nowhere else.
pub fn render(entries: &[OutputEntry], config: &Config) -> String {
    let mut document = String::new();
    for entry in entries {
        match entry {
            OutputEntry::Blank => {}
            OutputEntry::Comment(text)
            | OutputEntry::WhitelistDomain(text)
            | OutputEntry::Domain(text) => document.push_str(text),
            OutputEntry::Separator => document.push_str(&config.separator),
            OutputEntry::Blacklisted(text) => {
                document.push_str(&config.blocked_prefix);
                document.push_str(text);
            }
        }
        document.push('\n');
    }
    document
}

/// Write the rendered document, creating the parent directory first.
///
/// The write is a single call; there is no partial-output state to clean up
/// on failure.
pub fn write(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| HostRulesError::WriteFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        }
    }
    fs::write(path, document).map_err(|e| HostRulesError::WriteFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_applies_prefix_convention() {
        let config = Config::new();
        let entries = vec![
            OutputEntry::Comment("# mine".to_string()),
            OutputEntry::WhitelistDomain(".a.com".to_string()),
            OutputEntry::Blank,
            OutputEntry::Separator,
            OutputEntry::Domain(".b.com".to_string()),
            OutputEntry::Blacklisted(".c.com".to_string()),
        ];
        let document = render(&entries, &config);
        assert_eq!(
            document,
            "# mine\n.a.com\n\n# -------autogen------\n.b.com\n# blocked .c.com\n"
        );
    }

    #[test]
    fn test_render_empty_entries() {
        let config = Config::new();
        assert_eq!(render(&[], &config), "");
    }

    #[test]
    fn test_write_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dist").join("out.hostrules");
        write(&path, ".a.com\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), ".a.com\n");
    }

    #[test]
    fn test_write_reports_failure() {
        let dir = TempDir::new().unwrap();
        // The target path is an existing directory; the write must fail
        // with a WriteFailed error, not panic.
        let result = write(dir.path(), ".a.com\n");
        assert!(matches!(result, Err(HostRulesError::WriteFailed { .. })));
    }
}
