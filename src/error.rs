use std::path::PathBuf;

use thiserror::Error;

/// Host-rules pipeline error types
#[derive(Error, Debug)]
pub enum HostRulesError {
    #[error("failed to fetch rule source '{source_name}': {message}")]
    SourceUnreachable { source_name: String, message: String },

    #[error("rule source '{source_name}' yielded no domains")]
    SourceEmpty { source_name: String },

    #[error("failed to read override file '{}': {message}", .path.display())]
    OverrideUnreadable { path: PathBuf, message: String },

    #[error("failed to write output '{}': {message}", .path.display())]
    WriteFailed { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HostRulesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_source_name() {
        let err = HostRulesError::SourceUnreachable {
            source_name: "https://example.com/list.conf".into(),
            message: "connection refused".into(),
        };
        let display = format!("{}", err);
        assert!(
            display.contains("https://example.com/list.conf"),
            "got: {}",
            display
        );
        assert!(display.contains("connection refused"), "got: {}", display);
    }

    #[test]
    fn test_source_empty_is_matchable() {
        let err = HostRulesError::SourceEmpty {
            source_name: "input.conf".into(),
        };
        assert!(matches!(err, HostRulesError::SourceEmpty { .. }));
    }

    #[test]
    fn test_write_failed_display_includes_path() {
        let err = HostRulesError::WriteFailed {
            path: PathBuf::from("dist/whitelist.hostrules"),
            message: "permission denied".into(),
        };
        let display = format!("{}", err);
        assert!(
            display.contains("dist/whitelist.hostrules"),
            "got: {}",
            display
        );
    }
}
