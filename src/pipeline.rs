//! End-to-end run: fetch, extract, load overrides, reconcile, write.

use tracing::{info, warn};

use crate::config::Config;
use crate::error::{HostRulesError, Result};
use crate::extract;
use crate::fetch::{self, Source};
use crate::matcher::Blacklist;
use crate::overrides::{self, WhitelistLine};
use crate::reconcile::{reconcile, OutputEntry};
use crate::writer;

/// Counters reported after a successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Domain tokens extracted from the source, duplicates included.
    pub extracted: usize,
    /// Whitelist lines carried into the output (including demoted ones).
    pub whitelist_lines: usize,
    /// Whitelist domain entries demoted to comments by the blacklist.
    pub demoted: usize,
    /// Extracted domains skipped as already covered by the whitelist.
    pub deduplicated: usize,
    /// Extracted domains commented out by the blacklist.
    pub blacklisted: usize,
    /// Total lines written, separator included.
    pub written: usize,
}

/// Run the whole pipeline once.
///
/// Fatal errors (unreachable source, empty source, failed write) abort with
/// nothing written. An unreadable override file is downgraded to a warning
/// and an empty override list; a missing one is silently empty.
pub fn run(config: &Config, source: &Source) -> Result<RunSummary> {
    info!(source = %source, "fetching domain rule source");
    let text = fetch::fetch(source)?;

    let tokens: Vec<&str> = extract::domains(&text).collect();
    if tokens.is_empty() {
        return Err(HostRulesError::SourceEmpty {
            source_name: source.to_string(),
        });
    }
    info!(count = tokens.len(), "extracted domains from source");

    let whitelist = load_whitelist_or_empty(config);
    let blacklist = load_blacklist_or_empty(config);

    let entries = reconcile(tokens.iter().copied(), &whitelist, &blacklist);
    let summary = summarize(&tokens, &whitelist, &entries);

    if summary.deduplicated > 0 {
        info!(
            count = summary.deduplicated,
            "filtered domains already present in the whitelist"
        );
    }
    if summary.blacklisted > 0 || summary.demoted > 0 {
        info!(
            blacklisted = summary.blacklisted,
            demoted = summary.demoted,
            "commented out blacklisted entries"
        );
    }

    let document = writer::render(&entries, config);
    writer::write(&config.output_path, &document)?;
    info!(
        lines = summary.written,
        path = %config.output_path.display(),
        "wrote host rules"
    );

    Ok(summary)
}

fn load_whitelist_or_empty(config: &Config) -> Vec<WhitelistLine> {
    match overrides::load_whitelist(&config.whitelist_path) {
        Ok(lines) => {
            if lines.is_empty() {
                info!(path = %config.whitelist_path.display(), "no whitelist entries found");
            } else {
                info!(
                    path = %config.whitelist_path.display(),
                    lines = lines.len(),
                    "loaded whitelist"
                );
            }
            lines
        }
        Err(e) => {
            warn!(error = %e, "ignoring unreadable whitelist");
            Vec::new()
        }
    }
}

fn load_blacklist_or_empty(config: &Config) -> Blacklist {
    match overrides::load_blacklist(&config.blacklist_path) {
        Ok(patterns) => {
            if !patterns.is_empty() {
                info!(
                    path = %config.blacklist_path.display(),
                    patterns = patterns.len(),
                    "loaded blacklist"
                );
            }
            Blacklist::new(&patterns)
        }
        Err(e) => {
            warn!(error = %e, "ignoring unreadable blacklist");
            Blacklist::default()
        }
    }
}

fn summarize(tokens: &[&str], whitelist: &[WhitelistLine], entries: &[OutputEntry]) -> RunSummary {
    let mut summary = RunSummary {
        extracted: tokens.len(),
        whitelist_lines: whitelist.len(),
        written: entries.len(),
        ..Default::default()
    };
    let mut emitted = 0usize;
    let mut after_separator = false;
    for entry in entries {
        match entry {
            OutputEntry::Separator => after_separator = true,
            OutputEntry::Blacklisted(_) if after_separator => summary.blacklisted += 1,
            OutputEntry::Blacklisted(_) => summary.demoted += 1,
            OutputEntry::Domain(_) => emitted += 1,
            _ => {}
        }
    }
    summary.deduplicated = summary.extracted - emitted - summary.blacklisted;
    summary
}
