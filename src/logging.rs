//! Diagnostic logging setup
//!
//! Logs go to stderr so stdout carries nothing but generated commands.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::LogFormat;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "CURLIZE_LOG";

/// Filter from `CURLIZE_LOG` (default `warn`). `--debug` raises the global
/// level to `debug` on top of whatever the variable says.
fn build_filter(directives: Option<&str>, debug: bool) -> EnvFilter {
    let filter = directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    if debug {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(format: LogFormat, debug: bool) {
    let directives = std::env::var(LOG_ENV).ok();
    let filter = build_filter(directives.as_deref(), debug);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_target(false);

    let _ = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_is_warn() {
        assert_eq!(build_filter(None, false).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_env_directive_is_used() {
        assert_eq!(build_filter(Some("error"), false).max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_debug_flag_overrides_env_directive() {
        assert_eq!(build_filter(Some("error"), true).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(build_filter(None, true).max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
