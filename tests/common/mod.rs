//! Common test utilities for curlize integration tests
//!
//! - CLI invocation helpers with an isolated config directory
//! - Fixture files written into temporary directories

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Exit status codes matching the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    Error = 1,
}

impl From<i32> for ExitStatus {
    fn from(code: i32) -> Self {
        match code {
            0 => ExitStatus::Success,
            _ => ExitStatus::Error,
        }
    }
}

/// Result of running the CLI
#[derive(Debug)]
pub struct CliResponse {
    pub stdout: String,
    pub stderr: String,
    pub exit_status: ExitStatus,
}

impl CliResponse {
    /// Non-empty stdout lines
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().filter(|l| !l.is_empty()).collect()
    }
}

/// Isolated environment: empty config dir, optional stdin and env vars
pub struct MockEnvironment {
    pub config_dir: TempDir,
    pub env_vars: HashMap<String, String>,
    pub stdin: Option<Vec<u8>>,
}

impl Default for MockEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEnvironment {
    pub fn new() -> Self {
        Self {
            config_dir: TempDir::new().expect("Failed to create temp config dir"),
            env_vars: HashMap::new(),
            stdin: None,
        }
    }

    pub fn set_env(&mut self, key: &str, value: &str) -> &mut Self {
        self.env_vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn set_stdin(&mut self, content: impl Into<Vec<u8>>) -> &mut Self {
        self.stdin = Some(content.into());
        self
    }

    /// Write `config.toml` into the isolated config dir
    pub fn write_config(&mut self, toml: &str) -> &mut Self {
        std::fs::write(self.config_dir.path().join("config.toml"), toml)
            .expect("Failed to write config");
        self
    }

    /// Write a fixture file next to the config and return its path
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.config_dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write fixture");
        path
    }
}

/// Run the CLI with the given arguments in a fresh environment
pub fn curlize(args: &[&str]) -> CliResponse {
    curlize_with_env(args, &MockEnvironment::new())
}

/// Run the CLI with the given arguments and environment
pub fn curlize_with_env(args: &[&str], env: &MockEnvironment) -> CliResponse {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_curlize"));
    cmd.args(args);
    cmd.env("CURLIZE_CONFIG_DIR", env.config_dir.path());
    cmd.env_remove("CURLIZE_LOG");
    for (key, value) in &env.env_vars {
        cmd.env(key, value);
    }
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let output = if let Some(ref stdin_data) = env.stdin {
        cmd.stdin(Stdio::piped());
        let mut child = cmd.spawn().expect("Failed to spawn command");
        child
            .stdin
            .take()
            .expect("Failed to open stdin")
            .write_all(stdin_data)
            .expect("Failed to write to stdin");
        child.wait_with_output().expect("Failed to wait for command")
    } else {
        cmd.stdin(Stdio::null());
        cmd.output().expect("Failed to execute command")
    };

    parse_output(output)
}

fn parse_output(output: Output) -> CliResponse {
    CliResponse {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_status: ExitStatus::from(output.status.code().unwrap_or(1)),
    }
}

pub mod fixtures {
    /// Three captured requests: a GET with query, a JSON POST, a form POST
    pub const SAMPLE_HAR: &str = r#"{
        "log": {
            "version": "1.2",
            "creator": {"name": "devtools", "version": "1.0"},
            "entries": [
                {
                    "startedDateTime": "2024-01-01T00:00:00.000Z",
                    "time": 12,
                    "request": {
                        "method": "GET",
                        "url": "https://api.example.com/users?page=1",
                        "httpVersion": "HTTP/2",
                        "headers": [
                            {"name": ":authority", "value": "api.example.com"},
                            {"name": "Accept", "value": "application/json"}
                        ],
                        "queryString": [{"name": "page", "value": "1"}]
                    },
                    "response": {"status": 200, "statusText": "OK"}
                },
                {
                    "startedDateTime": "2024-01-01T00:00:01.000Z",
                    "time": 30,
                    "request": {
                        "method": "POST",
                        "url": "https://api.example.com/users",
                        "httpVersion": "HTTP/1.1",
                        "headers": [{"name": "Content-Type", "value": "application/json"}],
                        "queryString": [],
                        "postData": {"mimeType": "application/json", "text": "{\n  \"name\": \"Ada\"\n}"}
                    },
                    "response": {"status": 201, "statusText": "Created"}
                },
                {
                    "startedDateTime": "2024-01-01T00:00:02.000Z",
                    "time": 8,
                    "request": {
                        "method": "post",
                        "url": "https://auth.example.com/login",
                        "httpVersion": "HTTP/1.1",
                        "headers": [],
                        "queryString": [],
                        "postData": {
                            "mimeType": "application/x-www-form-urlencoded",
                            "params": [{"name": "user", "value": "ada"}, {"name": "pass", "value": "x"}]
                        }
                    }
                }
            ]
        }
    }"#;
}
