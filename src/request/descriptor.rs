//! Captured request descriptor
//!
//! The shape a network capture hands over for one request. Every field is
//! optional because captures are frequently partial.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use crate::errors::CurlizeError;
use crate::json::safe_json_stringify;

/// Ordered string mapping used for headers and query parameters
pub type StringMap = IndexMap<String, String>;

/// A captured HTTP request, as recorded by the capture layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDescriptor {
    /// Raw URL, possibly carrying its own query string
    #[serde(default)]
    pub url: Option<String>,

    /// Method in any letter case
    #[serde(default)]
    pub method: Option<String>,

    /// Request headers in capture order
    #[serde(default, deserialize_with = "deserialize_string_map")]
    pub header: Option<StringMap>,

    /// Query parameters tracked apart from the URL text
    #[serde(default, deserialize_with = "deserialize_string_map")]
    pub query_params: Option<StringMap>,

    /// Body payload: `None` when the capture has no body at all
    #[serde(default)]
    pub body_data: Option<JsonValue>,
}

impl RequestDescriptor {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.header
            .get_or_insert_with(StringMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params
            .get_or_insert_with(StringMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: JsonValue) -> Self {
        self.body_data = Some(body);
        self
    }

    /// Build a descriptor from an already parsed JSON object
    pub fn from_json(value: JsonValue) -> Result<Self, CurlizeError> {
        if !value.is_object() {
            return Err(CurlizeError::Parse(format!(
                "request descriptor must be a JSON object, got {}",
                json_kind(&value)
            )));
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// Parse one descriptor object or an array of them
pub fn parse_descriptors(value: JsonValue) -> Result<Vec<RequestDescriptor>, CurlizeError> {
    match value {
        JsonValue::Array(items) => items.into_iter().map(RequestDescriptor::from_json).collect(),
        other => RequestDescriptor::from_json(other).map(|d| vec![d]),
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

/// Render a captured scalar the way it would appear in a header or URL
fn scalar_to_string(value: JsonValue) -> String {
    match value {
        JsonValue::String(s) => s,
        JsonValue::Null => String::new(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Number(n) => n.to_string(),
        nested => safe_json_stringify(&nested),
    }
}

/// Accept `{"page": 2, "debug": true}` as well as all-string mappings
fn deserialize_string_map<'de, D>(deserializer: D) -> Result<Option<StringMap>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<IndexMap<String, JsonValue>> = Option::deserialize(deserializer)?;
    Ok(raw.map(|map| {
        map.into_iter()
            .map(|(key, value)| (key, scalar_to_string(value)))
            .collect()
    }))
}
