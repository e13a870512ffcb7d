//! Merging of whitelist, blacklist, and freshly extracted domains into one
//! ordered output document.

use std::collections::HashSet;

use tracing::debug;

use crate::matcher::{canonical, Blacklist};
use crate::overrides::WhitelistLine;

/// One line of the final document.
///
/// Entries carry plain text only; the textual comment-prefix convention for
/// blacklisted entries and the separator text are applied by the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputEntry {
    /// Empty line carried over from the whitelist.
    Blank,
    /// Verbatim comment line carried over from the whitelist.
    Comment(String),
    /// Retained whitelist domain entry, verbatim.
    WhitelistDomain(String),
    /// Marker between the whitelist region and the auto-generated region.
    Separator,
    /// Auto-generated domain in canonical form.
    Domain(String),
    /// Entry suppressed by the blacklist: either a demoted whitelist domain
    /// entry (original text) or an auto-generated canonical domain.
    Blacklisted(String),
}

/// Merge extracted domain tokens with the override lists.
///
/// Whitelist lines come first in their original order, with domain entries
/// that match the blacklist demoted to comments in place. The separator is
/// emitted exactly once, whether or not a whitelist was found. Extracted
/// domains follow in source order: blacklisted ones become comments without
/// any whitelist check, and the rest are skipped when their canonical form
/// equals a retained whitelist entry byte-for-byte. Entries are append-only
/// and never reordered.
pub fn reconcile<'a, I>(
    tokens: I,
    whitelist: &[WhitelistLine],
    blacklist: &Blacklist,
) -> Vec<OutputEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut entries = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for line in whitelist {
        match line {
            WhitelistLine::Blank => entries.push(OutputEntry::Blank),
            WhitelistLine::Comment(text) => entries.push(OutputEntry::Comment(text.clone())),
            WhitelistLine::Domain(text) => {
                if let Some(pattern) = blacklist.find_match(text) {
                    debug!(entry = %text, pattern, "whitelist entry demoted by blacklist");
                    entries.push(OutputEntry::Blacklisted(text.clone()));
                } else {
                    seen.insert(text.as_str());
                    entries.push(OutputEntry::WhitelistDomain(text.clone()));
                }
            }
        }
    }

    entries.push(OutputEntry::Separator);

    for token in tokens {
        let domain = canonical(token);
        if let Some(pattern) = blacklist.find_match(&domain) {
            debug!(domain = %domain, pattern, "domain suppressed by blacklist");
            entries.push(OutputEntry::Blacklisted(domain));
        } else if seen.contains(domain.as_str()) {
            // Already covered by the whitelist region.
            continue;
        } else {
            entries.push(OutputEntry::Domain(domain));
        }
    }

    entries
}
