//! Rule-source acquisition: remote URL or local file.

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use crate::error::{HostRulesError, Result};

/// Where the rule source comes from.
#[derive(Debug, Clone)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => f.write_str(url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetch the full rule-source text.
///
/// Blocking, no retries. The HTTP response or file handle is fully consumed
/// and released before returning.
pub fn fetch(source: &Source) -> Result<String> {
    match source {
        Source::Url(url) => {
            let response = ureq::get(url)
                .call()
                .map_err(|e| HostRulesError::SourceUnreachable {
                    source_name: url.clone(),
                    message: e.to_string(),
                })?;
            let (_, body) = response.into_parts();
            let mut text = String::new();
            body.into_reader().read_to_string(&mut text).map_err(|e| {
                HostRulesError::SourceUnreachable {
                    source_name: url.clone(),
                    message: e.to_string(),
                }
            })?;
            Ok(text)
        }
        Source::File(path) => {
            fs::read_to_string(path).map_err(|e| HostRulesError::SourceUnreachable {
                source_name: path.display().to_string(),
                message: e.to_string(),
            })
        }
    }
}
