//! Configuration types and loading for the toolkit CLI
//!
//! Preferences live in an optional `toolkit.toml`:
//!
//! ```toml
//! [output]
//! format = "json"
//! color = false
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable, colored listing
    #[default]
    Text,
    /// Pretty-printed JSON for scripting
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Output preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
    /// Emit ANSI colors in text output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_color(),
        }
    }
}

/// Top-level CLI configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load configuration from `path`, or defaults when no path is given.
    ///
    /// A path that cannot be read or parsed is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), format = %config.output.format, "loaded config");
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolve the effective output format, letting `--json` win.
    pub fn format(&self, json_flag: bool) -> OutputFormat {
        if json_flag {
            OutputFormat::Json
        } else {
            self.output.format
        }
    }
}
