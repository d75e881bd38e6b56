//! HTTP method set
//!
//! Captured requests carry their method as free text in any letter case.
//! It is parsed once into [`Method`] and only the upper-case form is
//! rendered afterwards.

use std::fmt;
use std::str::FromStr;

use crate::errors::CurlizeError;

/// HTTP method of a captured request
///
/// The standard methods get their own variants; anything else that is a
/// valid method token (WebDAV `PROPFIND`, `PURGE`, app-defined verbs) is
/// kept upper-cased in [`Method::Extension`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    Options,
    Get,
    Head,
    Post,
    Put,
    Delete,
    Trace,
    Connect,
    Patch,
    Extension(String),
}

/// All standard HTTP methods
pub const STANDARD_METHODS: &[Method] = &[
    Method::Options,
    Method::Get,
    Method::Head,
    Method::Post,
    Method::Put,
    Method::Delete,
    Method::Trace,
    Method::Connect,
    Method::Patch,
];

impl Method {
    /// Upper-case wire name
    pub fn as_str(&self) -> &str {
        match self {
            Method::Options => "OPTIONS",
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Trace => "TRACE",
            Method::Connect => "CONNECT",
            Method::Patch => "PATCH",
            Method::Extension(name) => name,
        }
    }

    /// Whether this is one of the standard methods
    pub fn is_standard(&self) -> bool {
        !matches!(self, Method::Extension(_))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// RFC 9110 `tchar`
fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c)
}

impl FromStr for Method {
    type Err = CurlizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if let Some(standard) = STANDARD_METHODS
            .iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(token))
        {
            return Ok(standard.clone());
        }

        if token.is_empty() || !token.chars().all(is_token_char) {
            return Err(CurlizeError::InvalidMethod(s.to_string()));
        }

        Ok(Method::Extension(token.to_ascii_uppercase()))
    }
}

/// Check if a string is a standard HTTP method
pub fn is_standard(method: &str) -> bool {
    method.parse::<Method>().is_ok_and(|m| m.is_standard())
}

/// Parse an optional method token.
///
/// Missing and blank tokens are not an error: they mean the capture did not
/// record a method and yield `None`.
pub fn parse_optional(method: Option<&str>) -> Result<Option<Method>, CurlizeError> {
    match method.map(str::trim) {
        None | Some("") => Ok(None),
        Some(token) => token.parse().map(Some),
    }
}
