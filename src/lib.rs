//! curlize library interface
//!
//! Turns captured HTTP requests into equivalent curl commands for debugging
//! consoles.
//!
//! # Module Organization
//!
//! - [`devexp`] - Curl command generation and query string merging
//! - [`request`] - Captured request descriptors
//! - [`http`] - HTTP method set
//! - [`har`] - HTTP Archive import
//! - [`errors`] - Error types (CurlizeError, Result)
//! - [`core`] - CLI execution logic

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod devexp;
pub mod errors;
pub mod har;
pub mod http;
pub mod json;
pub mod logging;
pub mod request;
pub mod status;

pub use devexp::{build_command, try_build_command};
pub use errors::{CurlizeError, Result};
pub use request::RequestDescriptor;
