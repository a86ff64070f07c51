//! Project configuration (appicon.yaml).
//!
//! Optional defaults for the CLI. Flags given on the command line win over
//! the file; the file wins over built-in defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{IconError, Result};

/// Config file looked up in the current directory.
pub const CONFIG_FILENAME: &str = "appicon.yaml";

/// Settings loaded from appicon.yaml.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Default output directory.
    pub output: Option<PathBuf>,

    /// Downscale oversized sources without `--auto-scale`.
    pub auto_scale: bool,

    /// Verbose logging without `--verbose`.
    pub verbose: bool,

    /// Prefix of the timestamped default output directory.
    pub dir_prefix: Option<String>,
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IconError::Config {
            message: format!("Failed to read {}: {}", path.display(), e),
            help: None,
        })?;

        Self::parse(&content)
    }

    /// Parse settings from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| IconError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!(
                "Check {} syntax (keys: output, auto_scale, verbose, dir_prefix)",
                CONFIG_FILENAME
            )),
        })
    }

    /// Load the explicit config file, or `appicon.yaml` from `dir` when present.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = dir.join(CONFIG_FILENAME);
        if default_path.is_file() {
            tracing::debug!(path = %default_path.display(), "loading config");
            return Self::load(&default_path);
        }

        Ok(Self::default())
    }
}
