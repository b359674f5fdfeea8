// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Configuration is read from a TOML file, looked up in order from:
//! - the `--config` flag
//! - the `LAYOVER_CONFIG` environment variable
//! - `<config_dir>/layover/config.toml`
//!
//! ```toml
//! parallel = true
//!
//! [presets.long-layovers]
//! filters = ["departure > now", "idle > 2h"]
//! exclude_invalid = true
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "layover";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Run the filter engine in parallel mode by default.
    #[serde(default)]
    pub parallel: bool,
    /// Named filter sets selectable with `--preset`.
    #[serde(default)]
    pub presets: BTreeMap<String, Preset>,
}

/// A named, reusable set of filter expressions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Preset {
    /// Filter expressions, in the same syntax as the command line.
    #[serde(default)]
    pub filters: Vec<String>,
    /// Drop itineraries with invalid segments.
    #[serde(default)]
    pub exclude_invalid: bool,
}

/// Where a config file path came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    /// Named by the user; the file must exist.
    Explicit(PathBuf),
    /// The per-user default; a missing file means default settings.
    Default(PathBuf),
    /// No config directory could be determined.
    None,
}

impl ConfigLocation {
    /// Resolve the config location from the flag, the environment and the
    /// platform config directory, in that order.
    pub fn resolve(
        flag: Option<&Path>,
        env_path: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = flag {
            return ConfigLocation::Explicit(path.to_path_buf());
        }
        if let Some(path) = env_path {
            return ConfigLocation::Explicit(path);
        }
        match config_dir {
            Some(dir) => {
                ConfigLocation::Default(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            }
            None => ConfigLocation::None,
        }
    }

    /// Resolve using the process environment and `dirs::config_dir`.
    pub fn from_env(flag: Option<&Path>) -> Self {
        Self::resolve(flag, env::config_path(), dirs::config_dir())
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        Self::parse(&content)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads configuration from a resolved location.
    pub fn load(location: &ConfigLocation) -> Result<Self> {
        match location {
            ConfigLocation::Explicit(path) => {
                if !path.is_file() {
                    return Err(Error::ConfigNotFound(path.clone()));
                }
                Self::from_file(path)
            }
            ConfigLocation::Default(path) => {
                if path.is_file() {
                    Self::from_file(path)
                } else {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    Ok(Config::default())
                }
            }
            ConfigLocation::None => Ok(Config::default()),
        }
    }

    /// Looks up a preset by name.
    pub fn preset(&self, name: &str) -> Result<&Preset> {
        self.presets.get(name).ok_or_else(|| Error::UnknownPreset {
            name: name.to_string(),
            available: self.preset_names(),
        })
    }

    fn preset_names(&self) -> String {
        if self.presets.is_empty() {
            "(none)".to_string()
        } else {
            self.presets.keys().cloned().collect::<Vec<_>>().join(", ")
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
