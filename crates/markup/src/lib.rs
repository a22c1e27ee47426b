//! Tag scanning and balancing for raw markup fragments.
//!
//! [`find_unclosed_tags`] is the entry point most callers need: hand it a fragment that
//! may have been cut anywhere outside a tag and append what it returns.

pub mod balance;
pub mod perf_fixtures;
mod scanner;
mod types;

pub use crate::balance::{
    close_unclosed_tags, find_unclosed_tags, find_unclosed_tags_with, is_balanced,
    is_balanced_with, unclosed_tags,
};
pub use crate::scanner::{TagScanner, scan_tags};
pub use crate::types::{BalanceOptions, TagEvent, TagKind, TagNameMatching};

