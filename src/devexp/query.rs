//! Query string merging
//!
//! A captured request can carry its query parameters twice: embedded in the
//! URL text and as a separately tracked mapping. These helpers fold both
//! into one canonical query string and splice it back into the URL.

use indexmap::IndexMap;

/// Ordered query parameters, keyed by parameter name
pub type QueryParams = IndexMap<String, String>;

/// Parse the parameters embedded after the first `?` of a URL.
///
/// Tokens are split on the first `=`. Tokens with an empty key are skipped,
/// a token without `=` maps to an empty value, and a repeated key keeps its
/// first position but takes the last value.
pub fn parse_embedded_query(url: &str) -> QueryParams {
    let mut params = QueryParams::new();

    let Some((_, search)) = url.split_once('?') else {
        return params;
    };

    for token in search.split('&') {
        let (key, value) = token.split_once('=').unwrap_or((token, ""));
        if key.is_empty() {
            continue;
        }
        params.insert(key.to_string(), value.to_string());
    }

    params
}

/// Overlay explicit parameters on top of embedded ones.
///
/// Keys already present keep their position and take the explicit value;
/// explicit-only keys are appended in their own order.
pub fn merge_query_params(embedded: &QueryParams, explicit: &QueryParams) -> QueryParams {
    let mut merged = embedded.clone();
    for (key, value) in explicit {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Compute the canonical query string (`?a=1&b=2`) for a request.
///
/// Returns an empty string when no explicit parameter mapping exists; the
/// URL is not inspected in that case. Key presence and order come from the
/// merged mapping, while each value is looked up in the explicit mapping
/// first and only falls back to the embedded value.
pub fn compute_query_string(url: &str, explicit: Option<&QueryParams>) -> String {
    let Some(explicit) = explicit else {
        return String::new();
    };

    let embedded = parse_embedded_query(url);
    let merged = merge_query_params(&embedded, explicit);

    let mut query = String::new();
    for (index, key) in merged.keys().enumerate() {
        let value = explicit
            .get(key)
            .or_else(|| embedded.get(key))
            .map(String::as_str)
            .unwrap_or_default();
        query.push(if index == 0 { '?' } else { '&' });
        query.push_str(key);
        query.push('=');
        query.push_str(value);
    }
    query
}

/// Rebuild a URL around a computed query string.
///
/// Only a URL that already has a `?` gets its query replaced. A URL without
/// one is returned as-is (trimmed) even when a query string was computed.
pub fn build_url(url: &str, query_string: &str) -> String {
    if !query_string.is_empty() {
        if let Some(index) = url.find('?') {
            return format!("{}{}", &url[..index], query_string).trim().to_string();
        }
    }
    url.trim().to_string()
}
