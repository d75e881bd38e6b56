//! HAR file parsing
//!
//! Loads HAR files from disk and narrows their entries.

use std::fs;
use std::path::Path;

use regex::Regex;

use super::types::Har;
use crate::errors::CurlizeError;

/// Maximum HAR file size (64 MB)
const MAX_HAR_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Load and parse a HAR file
pub fn load_har(path: &Path) -> Result<Har, CurlizeError> {
    if !path.exists() {
        return Err(CurlizeError::Har(format!(
            "HAR file not found: {}",
            path.display()
        )));
    }

    let metadata = fs::metadata(path)?;
    if metadata.len() > MAX_HAR_FILE_SIZE {
        return Err(CurlizeError::Har(format!(
            "HAR file too large: {} bytes (max {} MB)",
            metadata.len(),
            MAX_HAR_FILE_SIZE / 1024 / 1024
        )));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| CurlizeError::Har(format!("Failed to read HAR file: {}", e)))?;

    parse_har(&content)
}

/// Parse HAR from JSON string
pub fn parse_har(json: &str) -> Result<Har, CurlizeError> {
    serde_json::from_str(json)
        .map_err(|e| CurlizeError::Har(format!("Invalid HAR format: {}", e)))
}

/// Keep only entries whose URL matches `pattern`
pub fn filter_entries(har: &mut Har, pattern: &str) -> Result<(), CurlizeError> {
    let regex = Regex::new(pattern)
        .map_err(|e| CurlizeError::Argument(format!("Invalid filter pattern: {}", e)))?;
    har.log.entries.retain(|entry| regex.is_match(&entry.request.url));
    Ok(())
}

/// Keep entries by 1-based index, in the order given; out-of-range indices are ignored
pub fn filter_by_indices(har: &mut Har, indices: &[usize]) {
    if indices.is_empty() {
        return;
    }

    let filtered: Vec<_> = indices
        .iter()
        .filter(|&&idx| idx > 0 && idx <= har.log.entries.len())
        .map(|&idx| har.log.entries[idx - 1].clone())
        .collect();
    har.log.entries = filtered;
}
