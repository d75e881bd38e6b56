//! Curl command generation
//!
//! Converts captured requests into equivalent curl commands for copying
//! out of a debugging console. The command is only ever displayed.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value as JsonValue;
use tracing::{debug, error};

use super::query::{self, QueryParams};
use crate::errors::CurlizeError;
use crate::http::{method, Method};
use crate::json::safe_json_stringify;
use crate::request::{RequestDescriptor, StringMap};

/// Returned in place of a command when generation fails
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to generate curl command";

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("Invalid whitespace regex"));

/// Normalized view of one descriptor, alive for a single build
#[derive(Debug, Clone)]
pub struct CommandConfig<'a> {
    url: &'a str,
    method: Option<Method>,
    headers: Option<&'a StringMap>,
    query_params: Option<&'a QueryParams>,
    body: Option<&'a JsonValue>,
}

impl<'a> CommandConfig<'a> {
    /// Normalize a descriptor. Fails only on a method that is not a valid token.
    pub fn from_descriptor(descriptor: &'a RequestDescriptor) -> Result<Self, CurlizeError> {
        Ok(Self {
            url: descriptor.url.as_deref().unwrap_or_default(),
            method: method::parse_optional(descriptor.method.as_deref())?,
            headers: descriptor.header.as_ref(),
            query_params: descriptor.query_params.as_ref(),
            body: descriptor.body_data.as_ref(),
        })
    }

    /// `-H "name:value"` for every header, in capture order
    pub fn format_headers(&self) -> String {
        let Some(headers) = self.headers else {
            return String::new();
        };
        headers
            .iter()
            .map(|(name, value)| format!("-H \"{}:{}\"", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `-X METHOD`; a missing method renders as `-X ` rather than failing
    pub fn format_method(&self) -> String {
        format!("-X {}", self.method.as_ref().map(Method::as_str).unwrap_or_default())
    }

    /// `--data '...'`, or nothing for GET requests and empty bodies
    pub fn format_body(&self) -> String {
        if matches!(self.method, Some(Method::Get)) {
            return String::new();
        }

        let data = match self.body {
            None | Some(JsonValue::Null) => return String::new(),
            Some(JsonValue::String(text)) if text.is_empty() => return String::new(),
            Some(JsonValue::String(text)) => text.clone(),
            Some(JsonValue::Bool(flag)) => flag.to_string(),
            Some(JsonValue::Number(number)) => format_number(number),
            Some(structured) => safe_json_stringify(structured),
        };

        format!("--data '{}'", data)
    }

    /// Canonical query string built from the URL and the explicit parameters
    pub fn compute_query_string(&self) -> String {
        query::compute_query_string(self.url, self.query_params)
    }

    /// URL with its query string replaced by the canonical one
    pub fn build_url(&self) -> String {
        query::build_url(self.url, &self.compute_query_string())
    }

    /// Full single-line curl command
    pub fn generate_command(&self) -> String {
        let command = format!(
            "curl {} \"{}\" {} {}",
            self.format_method(),
            self.build_url(),
            self.format_headers(),
            self.format_body()
        );
        WHITESPACE_RUN.replace_all(command.trim(), " ").into_owned()
    }
}

/// Plain text of a numeric body; integral floats drop their `.0`
fn format_number(number: &serde_json::Number) -> String {
    match number.as_f64() {
        Some(value) if number.is_f64() && value.fract() == 0.0 && value.abs() < 1e15 => {
            format!("{}", value as i64)
        }
        _ => number.to_string(),
    }
}

/// Generate a curl command, surfacing normalization errors
pub fn try_build_command(descriptor: &RequestDescriptor) -> Result<String, CurlizeError> {
    let config = CommandConfig::from_descriptor(descriptor)?;
    let command = config.generate_command();
    debug!(url = config.url, command = %command, "curl command generated");
    Ok(command)
}

/// Generate a curl command; never fails.
///
/// Any error is logged and replaced by [`DEFAULT_FAILURE_MESSAGE`].
pub fn build_command(descriptor: &RequestDescriptor) -> String {
    build_command_or(descriptor, DEFAULT_FAILURE_MESSAGE)
}

/// Like [`build_command`] with a caller-chosen failure message
pub fn build_command_or(descriptor: &RequestDescriptor, failure_message: &str) -> String {
    match try_build_command(descriptor) {
        Ok(command) => command,
        Err(e) => {
            error!(error = %e, "failed to generate curl command");
            failure_message.to_string()
        }
    }
}

/// Format curl command with syntax highlighting for terminal
///
/// `curl` is bold yellow, flags are cyan and quoted arguments green.
pub fn format_curl_pretty(cmd: &str) -> String {
    const RESET: &str = "\x1b[0m";
    const PROGRAM: &str = "\x1b[1;33m";
    const FLAG: &str = "\x1b[36m";
    const QUOTED: &str = "\x1b[32m";

    let Some(rest) = cmd.strip_prefix("curl") else {
        return cmd.to_string();
    };

    let mut result = format!("{}curl{}", PROGRAM, RESET);
    let mut quote: Option<char> = None;
    let mut at_word_start = false;
    let mut chars = rest.chars().peekable();

    while let Some(c) = chars.next() {
        match quote {
            Some(open) => {
                result.push(c);
                if c == open {
                    result.push_str(RESET);
                    quote = None;
                }
            }
            None if c == '"' || c == '\'' => {
                result.push_str(QUOTED);
                result.push(c);
                quote = Some(c);
            }
            None if c == '-' && at_word_start => {
                result.push_str(FLAG);
                result.push(c);
                while let Some(&next) = chars.peek() {
                    if next.is_alphanumeric() || next == '-' {
                        result.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                result.push_str(RESET);
            }
            None => result.push(c),
        }
        at_word_start = quote.is_none() && c.is_whitespace();
    }

    if quote.is_some() {
        result.push_str(RESET);
    }
    result
}
