//! HAR entry to request descriptor conversion

use serde_json::Value as JsonValue;

use super::types::{HarEntry, HarPostData};
use crate::request::{RequestDescriptor, StringMap};

impl From<&HarEntry> for RequestDescriptor {
    fn from(entry: &HarEntry) -> Self {
        let request = &entry.request;

        // HTTP/2 pseudo-headers (":authority", ":path") are not sendable with -H
        let header: StringMap = request
            .headers
            .iter()
            .filter(|h| !h.name.starts_with(':'))
            .map(|h| (h.name.clone(), h.value.clone()))
            .collect();

        let query_params = if request.query_string.is_empty() {
            None
        } else {
            Some(
                request
                    .query_string
                    .iter()
                    .map(|q| (q.name.clone(), q.value.clone()))
                    .collect(),
            )
        };

        RequestDescriptor {
            url: Some(request.url.clone()),
            method: Some(request.method.clone()),
            header: (!header.is_empty()).then_some(header),
            query_params,
            body_data: request.post_data.as_ref().and_then(post_data_body),
        }
    }
}

/// Body payload of a captured request.
///
/// JSON text is parsed so it renders in compact standard form; anything that
/// does not parse stays verbatim. Form params are joined as `name=value&..`
/// when no text was recorded.
fn post_data_body(post: &HarPostData) -> Option<JsonValue> {
    if let Some(text) = post.text.as_deref().filter(|t| !t.is_empty()) {
        if post.is_json() {
            if let Ok(value) = serde_json::from_str::<JsonValue>(text) {
                return Some(value);
            }
        }
        return Some(JsonValue::String(text.to_string()));
    }

    let params = post.params.as_ref().filter(|p| !p.is_empty())?;
    let joined = params
        .iter()
        .map(|p| format!("{}={}", p.name, p.value.as_deref().unwrap_or_default()))
        .collect::<Vec<_>>()
        .join("&");
    Some(JsonValue::String(joined))
}
