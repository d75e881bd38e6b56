//! Developer Experience features
//!
//! - **Curl Generation**: Convert captured requests to equivalent curl commands
//! - **Query Merging**: Fold URL-embedded and tracked query parameters together
//!
//! # Curl Generation
//!
//! ```
//! use curlize::devexp::build_command;
//! use curlize::request::RequestDescriptor;
//!
//! let request = RequestDescriptor::new("https://api.example.com/users?page=1")
//!     .with_method("post")
//!     .with_query_param("limit", "10")
//!     .with_header("Content-Type", "application/json")
//!     .with_body(serde_json::json!({"name": "John"}));
//!
//! assert_eq!(
//!     build_command(&request),
//!     r#"curl -X POST "https://api.example.com/users?page=1&limit=10" -H "Content-Type:application/json" --data '{"name":"John"}'"#
//! );
//! ```

pub mod curl;
pub mod query;

pub use curl::{
    build_command, build_command_or, format_curl_pretty, try_build_command, CommandConfig,
    DEFAULT_FAILURE_MESSAGE,
};
pub use query::{build_url, compute_query_string, merge_query_params, parse_embedded_query, QueryParams};
