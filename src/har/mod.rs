//! HAR (HTTP Archive) import
//!
//! Browser devtools and proxies export captured traffic as HAR. Each entry
//! converts into a [`RequestDescriptor`](crate::request::RequestDescriptor).

pub mod convert;
pub mod parser;
pub mod types;

pub use parser::{filter_by_indices, filter_entries, load_har, parse_har};
pub use types::{Har, HarEntry};

use std::fmt::Write;

/// Numbered listing of entries, one per line (`  1. GET https://... -> 200`)
pub fn format_har_list(har: &Har) -> String {
    let mut output = String::new();
    for (idx, entry) in har.log.entries.iter().enumerate() {
        let _ = writeln!(output, "{:>3}. {}", idx + 1, entry.short_description());
    }
    output
}
