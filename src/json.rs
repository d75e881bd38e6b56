//! JSON utilities
//!
//! Parsing for descriptor input and a serializer for request bodies that
//! never fails.

use serde::Serialize;
use tracing::warn;

use crate::errors::CurlizeError;

/// Text used in place of a body that cannot be represented as JSON
pub const UNSERIALIZABLE_PLACEHOLDER: &str = "{}";

/// Load JSON while preserving key order
///
/// Uses serde_json with preserve_order feature, so header and parameter
/// mappings keep the order they were captured in.
pub fn load_json_preserve_order(s: &str) -> Result<serde_json::Value, CurlizeError> {
    serde_json::from_str(s).map_err(|e| CurlizeError::Parse(format!("JSON parse error: {}", e)))
}

/// Serialize a value to compact, standard JSON without ever failing.
///
/// Output always has double-quoted keys and no trailing commas. Values whose
/// `Serialize` impl errors (custom errors, maps keyed by non-string types)
/// are rendered as [`UNSERIALIZABLE_PLACEHOLDER`].
pub fn safe_json_stringify<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "body is not representable as JSON, using placeholder");
            UNSERIALIZABLE_PLACEHOLDER.to_string()
        }
    }
}
