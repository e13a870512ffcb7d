//! Host Rules Generator - converts dnsmasq-style domain server lists into
//! dotted-domain `.hostrules` whitelists.
//!
//! The input is a rule source in the `server=/domain.com/114.114.114.114`
//! format; the output is one `.domain.com` line per extracted domain. Two
//! override files shape the result:
//!
//! - a **whitelist** whose lines are kept verbatim at the top of the output
//!   and take precedence over auto-generated duplicates,
//! - a **blacklist** whose patterns suppress matching domains (and all their
//!   subdomains) by commenting them out rather than deleting them.
//!
//! # Example
//!
//! ```rust
//! use hostrules_gen::{domains, reconcile, Blacklist, OutputEntry, WhitelistLine};
//!
//! let source = "\
//! server=/a.com/114.114.114.114
//! server=/b.com/114.114.114.114
//! garbage
//! ";
//!
//! let whitelist = vec![WhitelistLine::Domain(".a.com".to_string())];
//! let blacklist = Blacklist::new(["b.com"]);
//!
//! let entries = reconcile(domains(source), &whitelist, &blacklist);
//! assert_eq!(
//!     entries,
//!     vec![
//!         OutputEntry::WhitelistDomain(".a.com".to_string()),
//!         OutputEntry::Separator,
//!         OutputEntry::Blacklisted(".b.com".to_string()),
//!     ]
//! );
//! ```
//!
//! # Matching
//!
//! Blacklist patterns use suffix matching on dot-prefixed canonical forms:
//! `example.com` matches `example.com` and `mail.example.com` but never
//! `notexample.com`, because `.notexample.com` does not end with
//! `.example.com`.

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod matcher;
pub mod overrides;
pub mod pipeline;
pub mod reconcile;
pub mod writer;

// Re-export commonly used items
pub use config::{
    default_output_path, resolve_output_arg, Config, BLACKLIST_FILE, BLOCKED_PREFIX,
    DEFAULT_OUTPUT_DIR, DEFAULT_OUTPUT_FILE, DEFAULT_SOURCE_URL, SEPARATOR_COMMENT,
    WHITELIST_FILE,
};
pub use error::{HostRulesError, Result};
pub use extract::domains;
pub use fetch::{fetch, Source};
pub use matcher::{canonical, Blacklist};
pub use overrides::{load_blacklist, load_whitelist, WhitelistLine};
pub use pipeline::{run, RunSummary};
pub use reconcile::{reconcile, OutputEntry};
pub use writer::render;
