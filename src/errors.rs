//! Error types for curlize

use thiserror::Error;

/// Main error type for curlize
#[derive(Error, Debug)]
pub enum CurlizeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("HAR error: {0}")]
    Har(String),
}

pub type Result<T> = std::result::Result<T, CurlizeError>;
