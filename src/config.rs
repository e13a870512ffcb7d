use std::path::{Path, PathBuf};

/// Default remote rule source (dnsmasq accelerated-domains list).
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/felixonmars/dnsmasq-china-list/master/accelerated-domains.china.conf";

/// Directory the default output file lives in.
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// Default output filename, placed under [`DEFAULT_OUTPUT_DIR`].
pub const DEFAULT_OUTPUT_FILE: &str = "whitelist.hostrules";

/// Whitelist override file, read from the working directory.
pub const WHITELIST_FILE: &str = "prewhite.hostrules";

/// Blacklist override file, read from the working directory.
pub const BLACKLIST_FILE: &str = "preblack.hostrules";

/// Line separating whitelist-derived content from auto-generated content.
pub const SEPARATOR_COMMENT: &str = "# -------autogen------";

/// Prefix for entries suppressed by the blacklist.
pub const BLOCKED_PREFIX: &str = "# blocked ";

/// Run configuration, built once at startup and passed explicitly into the
/// pipeline. All fields default to the fixed constants above.
#[derive(Debug, Clone)]
pub struct Config {
    pub output_path: PathBuf,
    pub whitelist_path: PathBuf,
    pub blacklist_path: PathBuf,
    pub separator: String,
    pub blocked_prefix: String,
}

impl Config {
    /// Create a configuration with the default paths and markers.
    pub fn new() -> Self {
        Self {
            output_path: default_output_path(),
            whitelist_path: PathBuf::from(WHITELIST_FILE),
            blacklist_path: PathBuf::from(BLACKLIST_FILE),
            separator: SEPARATOR_COMMENT.to_string(),
            blocked_prefix: BLOCKED_PREFIX.to_string(),
        }
    }

    /// Set the output file path.
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output_path = path.as_ref().to_path_buf();
        self
    }

    /// Set the whitelist override file path.
    pub fn with_whitelist_path(mut self, path: impl AsRef<Path>) -> Self {
        self.whitelist_path = path.as_ref().to_path_buf();
        self
    }

    /// Set the blacklist override file path.
    pub fn with_blacklist_path(mut self, path: impl AsRef<Path>) -> Self {
        self.blacklist_path = path.as_ref().to_path_buf();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Default output path: `dist/whitelist.hostrules`.
pub fn default_output_path() -> PathBuf {
    Path::new(DEFAULT_OUTPUT_DIR).join(DEFAULT_OUTPUT_FILE)
}

/// Resolve an output path given on the command line. A bare filename with no
/// directory component goes under the default output directory; anything else
/// is used as given.
pub fn resolve_output_arg(arg: &str) -> PathBuf {
    let path = Path::new(arg);
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => path.to_path_buf(),
        _ => Path::new(DEFAULT_OUTPUT_DIR).join(path),
    }
}
