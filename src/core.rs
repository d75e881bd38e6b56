use std::io::{Read, Write};

use clap::Parser;
use tracing::debug;

use crate::cli::Args;
use crate::config::Config;
use crate::context::Environment;
use crate::devexp::{build_command_or, format_curl_pretty};
use crate::errors::CurlizeError;
use crate::har::{filter_by_indices, filter_entries, format_har_list, load_har};
use crate::json::load_json_preserve_order;
use crate::logging;
use crate::request::{parse_descriptors, RequestDescriptor};
use crate::status::ExitStatus;

/// Main entry point for the CLI.
///
/// Loads configuration, parses arguments, and prints one curl command per
/// request read from a descriptor file, stdin, or a HAR archive.
pub fn run(args: Vec<String>, mut env: Environment) -> ExitStatus {
    if let Some(name) = args.first() {
        if let Some(basename) = std::path::Path::new(name).file_stem() {
            env.program_name = basename.to_string_lossy().to_string();
        }
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {}", e);
            Config::default()
        }
    };

    let merged_args = merge_default_options(args, &config);

    let parsed = match Args::try_parse_from(&merged_args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    logging::init(parsed.log_format, parsed.debug);

    match program(&parsed, &config, &mut env) {
        Ok(status) => status,
        Err(e) => handle_error(e, parsed.debug),
    }
}

pub fn program(args: &Args, config: &Config, env: &mut Environment) -> Result<ExitStatus, CurlizeError> {
    debug!(?args, config_dir = %config.config_dir.display(), "starting");

    let descriptors: Vec<RequestDescriptor> = if let Some(ref har_path) = args.har {
        let mut har = load_har(har_path)?;

        if let Some(ref pattern) = args.filter {
            filter_entries(&mut har, pattern)?;
        }
        filter_by_indices(&mut har, &args.indices);

        if har.log.entries.is_empty() {
            eprintln!("No HAR entries to convert");
            return Ok(ExitStatus::Error);
        }

        if args.list {
            write!(env.stdout, "{}", format_har_list(&har))?;
            return Ok(ExitStatus::Success);
        }

        har.log.entries.iter().map(RequestDescriptor::from).collect()
    } else {
        let text = read_input(args, env)?;
        parse_descriptors(load_json_preserve_order(&text)?)?
    };

    let pretty = args.pretty.unwrap_or(config.pretty).enabled(env.stdout_isatty);

    let mut out = env.stdout.lock();
    for descriptor in &descriptors {
        let command = build_command_or(descriptor, &config.failure_message);
        if pretty {
            writeln!(out, "{}", format_curl_pretty(&command))?;
        } else {
            writeln!(out, "{}", command)?;
        }
    }
    out.flush()?;

    Ok(ExitStatus::Success)
}

/// Read descriptor JSON from the input file or stdin
fn read_input(args: &Args, env: &mut Environment) -> Result<String, CurlizeError> {
    if !args.reads_stdin() {
        if let Some(ref path) = args.input {
            return Ok(std::fs::read_to_string(path)?);
        }
    }

    if env.stdin_isatty {
        return Err(CurlizeError::Argument(format!(
            "no input: usage: {} [FILE] | --har FILE, or pipe a request descriptor on stdin",
            env.program_name
        )));
    }

    let mut text = String::new();
    env.stdin.lock().read_to_string(&mut text)?;
    Ok(text)
}

/// Prepend configured default options right after the program name
fn merge_default_options(args: Vec<String>, config: &Config) -> Vec<String> {
    if config.default_options.is_empty() {
        return args;
    }

    let mut merged = Vec::with_capacity(args.len() + config.default_options.len());
    let mut rest = args.into_iter();
    merged.extend(rest.next());
    merged.extend(config.default_options.iter().cloned());
    merged.extend(rest);
    merged
}

fn handle_error(error: CurlizeError, debug: bool) -> ExitStatus {
    if debug {
        eprintln!("Error: {:?}", error);
    } else {
        eprintln!("Error: {}", error);
    }

    ExitStatus::Error
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_default_options() {
        let config = Config {
            default_options: vec!["--pretty".to_string(), "never".to_string()],
            ..Config::default()
        };
        let merged = merge_default_options(
            vec!["curlize".to_string(), "req.json".to_string()],
            &config,
        );
        assert_eq!(merged, ["curlize", "--pretty", "never", "req.json"]);
    }

    #[test]
    fn test_merge_without_defaults() {
        let args = vec!["curlize".to_string()];
        assert_eq!(merge_default_options(args.clone(), &Config::default()), args);
    }
}
