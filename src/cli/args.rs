//! CLI argument definitions using clap
//!
//! This module defines all command-line arguments for curlize.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::PrettyMode;

/// Turn captured HTTP requests into curl commands
#[derive(Parser, Debug, Clone)]
#[command(name = "curlize", version, about, long_about = None)]
pub struct Args {
    /// JSON request descriptor (object or array); `-` or omitted reads stdin
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    // =========================================================================
    // HAR IMPORT
    // =========================================================================

    /// Read requests from an HTTP Archive instead of a descriptor
    #[arg(long = "har", value_name = "FILE", conflicts_with = "input")]
    pub har: Option<PathBuf>,

    /// Keep only HAR entries whose URL matches this regex
    #[arg(long = "filter", value_name = "REGEX", requires = "har")]
    pub filter: Option<String>,

    /// Keep only these HAR entries (1-based, repeatable)
    #[arg(long = "index", value_name = "N", requires = "har", action = ArgAction::Append)]
    pub indices: Vec<usize>,

    /// List HAR entries instead of printing commands
    #[arg(long = "list", action = ArgAction::SetTrue, requires = "har")]
    pub list: bool,

    // =========================================================================
    // OUTPUT
    // =========================================================================

    /// Colorize commands: auto (terminal only), always, never
    #[arg(long = "pretty", value_name = "WHEN", value_enum)]
    pub pretty: Option<PrettyMode>,

    /// Output format for diagnostic logs: text (default) or json (JSON Lines)
    #[arg(long = "log-format", value_name = "FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Debug mode: verbose logs (overrides the CURLIZE_LOG level) and detailed errors
    #[arg(long = "debug", action = ArgAction::SetTrue)]
    pub debug: bool,
}

/// Log format for structured output (CI/CD)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON Lines format for parsing
    Json,
}

impl Args {
    /// Whether the descriptor should come from stdin
    pub fn reads_stdin(&self) -> bool {
        self.har.is_none() && self.input.as_deref().map_or(true, |p| p.as_os_str() == "-")
    }
}
