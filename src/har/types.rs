//! HAR (HTTP Archive) data structures
//!
//! Only the request side of the HAR 1.2 format is modelled in detail:
//! http://www.softwareishard.com/blog/har-12-spec/

use serde::{Deserialize, Serialize};

/// Root HAR structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Har {
    pub log: HarLog,
}

/// HAR log containing all entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarLog {
    /// HAR format version (e.g., "1.2")
    #[serde(default)]
    pub version: String,

    /// Creator application info
    #[serde(default)]
    pub creator: Option<HarCreator>,

    /// List of HTTP request/response entries
    #[serde(default)]
    pub entries: Vec<HarEntry>,
}

/// Creator application info
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarCreator {
    pub name: String,
    pub version: String,
}

/// A single captured request, with its response when one was recorded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarEntry {
    /// Request start time (ISO 8601)
    #[serde(rename = "startedDateTime", default)]
    pub started_date_time: String,

    /// Total time in milliseconds
    #[serde(default)]
    pub time: f64,

    pub request: HarRequest,

    #[serde(default)]
    pub response: Option<HarResponse>,
}

/// HTTP request details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarRequest {
    /// HTTP method (GET, POST, etc.)
    pub method: String,

    /// Full URL, including any query string
    pub url: String,

    #[serde(rename = "httpVersion", default)]
    pub http_version: String,

    #[serde(default)]
    pub headers: Vec<HarHeader>,

    /// Query string parameters as recorded separately from the URL
    #[serde(rename = "queryString", default)]
    pub query_string: Vec<HarQueryParam>,

    #[serde(rename = "postData", default)]
    pub post_data: Option<HarPostData>,
}

/// Response status, kept for listings only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarResponse {
    pub status: i32,

    #[serde(rename = "statusText", default)]
    pub status_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarHeader {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarQueryParam {
    pub name: String,
    pub value: String,
}

/// Request body as captured
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarPostData {
    #[serde(rename = "mimeType", default)]
    pub mime_type: String,

    #[serde(default)]
    pub text: Option<String>,

    /// Form fields, used when `text` was not recorded
    #[serde(default)]
    pub params: Option<Vec<HarPostParam>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarPostParam {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl HarEntry {
    /// One-line `METHOD url -> status` summary
    pub fn short_description(&self) -> String {
        let url = truncate_url(&self.request.url, 60);
        match &self.response {
            Some(response) => format!("{} {} -> {}", self.request.method, url, response.status),
            None => format!("{} {}", self.request.method, url),
        }
    }
}

/// Shorten `url` to at most `max_len` bytes, ending in "..." when cut
fn truncate_url(url: &str, max_len: usize) -> String {
    if url.len() <= max_len {
        return url.to_string();
    }

    let mut end = max_len.saturating_sub(3);
    while end > 0 && !url.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &url[..end])
}

impl HarPostData {
    pub fn is_json(&self) -> bool {
        let mime = self.mime_type.to_ascii_lowercase();
        mime.starts_with("application/json") || mime.contains("+json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_har() {
        let json = r#"{
            "log": {
                "version": "1.2",
                "entries": []
            }
        }"#;

        let har: Har = serde_json::from_str(json).unwrap();
        assert_eq!(har.log.version, "1.2");
        assert!(har.log.entries.is_empty());
    }

    #[test]
    fn test_parse_request_only_entry() {
        let json = r#"{
            "log": {
                "entries": [{
                    "request": {
                        "method": "POST",
                        "url": "https://example.com/api?x=1",
                        "headers": [{"name": "Accept", "value": "application/json"}],
                        "queryString": [{"name": "x", "value": "1"}],
                        "postData": {"mimeType": "application/json", "text": "{\"a\": 1}"}
                    }
                }]
            }
        }"#;

        let har: Har = serde_json::from_str(json).unwrap();
        let entry = &har.log.entries[0];
        assert_eq!(entry.request.method, "POST");
        assert!(entry.response.is_none());
        assert!(entry.request.post_data.as_ref().unwrap().is_json());
        assert_eq!(entry.short_description(), "POST https://example.com/api?x=1");
    }

    #[test]
    fn test_short_description_with_status() {
        let json = r#"{
            "request": {"method": "GET", "url": "https://example.com/"},
            "response": {"status": 404, "statusText": "Not Found"}
        }"#;
        let entry: HarEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.short_description(), "GET https://example.com/ -> 404");
    }

    #[test]
    fn test_short_description_truncates_long_urls() {
        let url = format!("https://example.com/{}", "a".repeat(80));
        let json = format!(r#"{{"request": {{"method": "GET", "url": "{}"}}}}"#, url);
        let entry: HarEntry = serde_json::from_str(&json).unwrap();
        let description = entry.short_description();
        assert_eq!(description.len(), "GET ".len() + 60);
        assert!(description.ends_with("..."));
    }

    #[test]
    fn test_truncate_url_respects_char_boundaries() {
        assert_eq!(truncate_url("https://x.io/", 60), "https://x.io/");
        let cut = truncate_url("https://example.com/héllo/wörld", 25);
        assert!(cut.starts_with("https://example.com/h"));
        assert!(cut.ends_with("..."));
        assert_eq!(truncate_url("abcdef", 2), "...");
    }

    #[test]
    fn test_post_data_mime_detection() {
        let mut post = HarPostData {
            mime_type: "application/vnd.api+json; charset=utf-8".to_string(),
            text: None,
            params: None,
        };
        assert!(post.is_json());
        post.mime_type = "application/x-www-form-urlencoded".to_string();
        assert!(!post.is_json());
    }
}
