//! Config file handling

use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::devexp::DEFAULT_FAILURE_MESSAGE;
use crate::errors::CurlizeError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "CURLIZE_CONFIG_DIR";

/// When to colorize generated commands
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PrettyMode {
    /// Colorize only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl PrettyMode {
    pub fn enabled(self, stdout_isatty: bool) -> bool {
        match self {
            PrettyMode::Auto => stdout_isatty,
            PrettyMode::Always => true,
            PrettyMode::Never => false,
        }
    }
}

/// curlize configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub config_dir: PathBuf,
    /// Options prepended to the command line
    pub default_options: Vec<String>,
    /// Printed instead of a command when generation fails
    pub failure_message: String,
    pub pretty: PrettyMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_dir: Self::default_config_dir(),
            default_options: Vec::new(),
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
            pretty: PrettyMode::default(),
        }
    }
}

impl Config {
    /// Load configuration from the config file (TOML format)
    pub fn load() -> Result<Self, CurlizeError> {
        let config_dir = Self::default_config_dir();
        let config_file = config_dir.join("config.toml");

        if !config_file.exists() {
            return Ok(Self {
                config_dir,
                ..Self::default()
            });
        }

        let content = std::fs::read_to_string(&config_file)
            .map_err(|e| CurlizeError::Config(format!("Failed to read config: {}", e)))?;

        Self::from_toml_str(&content, &config_dir)
    }

    /// Parse configuration text; unknown keys are ignored
    pub fn from_toml_str(content: &str, config_dir: &Path) -> Result<Self, CurlizeError> {
        let toml_value: toml::Value = toml::from_str(content)
            .map_err(|e| CurlizeError::Config(format!("Invalid config TOML: {}", e)))?;

        let default_options = toml_value
            .get("defaults")
            .and_then(|d| d.get("options"))
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        let output = toml_value.get("output");

        let failure_message = output
            .and_then(|o| o.get("failure_message"))
            .and_then(|v| v.as_str())
            .map(String::from)
            .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());

        let pretty = match output.and_then(|o| o.get("pretty")).and_then(|v| v.as_str()) {
            Some(mode) => PrettyMode::from_str(mode, true)
                .map_err(|_| CurlizeError::Config(format!("Invalid output.pretty value: {}", mode)))?,
            None => PrettyMode::default(),
        };

        Ok(Self {
            config_dir: config_dir.to_path_buf(),
            default_options,
            failure_message,
            pretty,
        })
    }

    /// Get the default config directory
    fn default_config_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return PathBuf::from(dir);
        }
        dirs::config_dir()
            .map(|p| p.join("curlize"))
            .unwrap_or_else(|| PathBuf::from(".curlize"))
    }
}
