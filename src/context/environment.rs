//! Environment struct (stdin/stdout)

use std::io::{self, Stdin, Stdout};

/// Execution environment
pub struct Environment {
    pub stdin: Stdin,
    pub stdout: Stdout,
    pub stdin_isatty: bool,
    pub stdout_isatty: bool,
    pub program_name: String,
}

impl Environment {
    pub fn init() -> Self {
        Self::default()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
            stdin_isatty: atty::is(atty::Stream::Stdin),
            stdout_isatty: atty::is(atty::Stream::Stdout),
            program_name: "curlize".to_string(),
        }
    }
}
