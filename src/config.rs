//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/orgtree/orgtree.toml`
//! 3. Explicit config file (if given)
//! 4. Environment variables: `ORGTREE_*` prefix
//!
//! The `--format` flag is applied on top by the command layer.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::services::conversion::DEFAULT_RECORDS_KEY;
use crate::application::{ApplicationError, OutputFormat};

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "ORGTREE";

/// Unified configuration for orgtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Output format (default: json)
    pub format: OutputFormat,
    /// Top-level array holding the records (default: "divisions")
    pub records_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            records_key: DEFAULT_RECORDS_KEY.to_string(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub format: Option<OutputFormat>,
    pub records_key: Option<String>,
}

/// Get the XDG config directory for orgtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "orgtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("orgtree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            format: overlay.format.unwrap_or(self.format),
            records_key: overlay
                .records_key
                .clone()
                .unwrap_or_else(|| self.records_key.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional config file applied after the global one.
    ///   Unlike the global file it must exist.
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_layers(
            global_config_path().as_deref(),
            config_file,
            Environment::with_prefix(ENV_PREFIX),
        )
    }

    /// Layered loading with every source given explicitly.
    ///
    /// `global` is skipped when it does not exist; `config_file` must exist.
    pub fn load_layers(
        global: Option<&Path>,
        config_file: Option<&Path>,
        env: Environment,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global.filter(|p| p.exists()) {
            debug!("loading global config {}", global_path.display());
            current = current.merge_with(&load_raw_settings(global_path)?);
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            debug!("loading config {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment variables (explicit override)
        current.apply_env_overrides(env)
    }

    /// Apply `ORGTREE_*` variables taken from `env`.
    fn apply_env_overrides(mut self, env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("format") {
            self.format = OutputFormat::from_str(&val, true).map_err(|e| {
                ApplicationError::Config {
                    message: format!("{}_FORMAT: {}", ENV_PREFIX, e),
                }
            })?;
        }
        if let Ok(val) = config.get_string("records_key") {
            self.records_key = val;
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.records_key, "divisions");
    }

    #[test]
    fn test_merge_keeps_unspecified_fields() {
        let overlay = RawSettings {
            format: Some(OutputFormat::Tree),
            records_key: None,
        };
        let merged = Settings::default().merge_with(&overlay);
        assert_eq!(merged.format, OutputFormat::Tree);
        assert_eq!(merged.records_key, "divisions");
    }

    #[test]
    fn test_env_overrides_replace_values() {
        let settings = Settings::default()
            .apply_env_overrides(env(&[
                ("ORGTREE_FORMAT", "Pretty"),
                ("ORGTREE_RECORDS_KEY", "units"),
            ]))
            .unwrap();
        assert_eq!(settings.format, OutputFormat::Pretty);
        assert_eq!(settings.records_key, "units");
    }

    #[test]
    fn test_env_wins_over_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join("local.toml");
        std::fs::write(&global, "format = \"tree\"\nrecords_key = \"units\"\n").unwrap();
        std::fs::write(&local, "format = \"pretty\"\n").unwrap();

        let settings = Settings::load_layers(
            Some(&global),
            Some(&local),
            env(&[("ORGTREE_RECORDS_KEY", "teams")]),
        )
        .unwrap();

        assert_eq!(settings.format, OutputFormat::Pretty);
        assert_eq!(settings.records_key, "teams");
    }

    #[test]
    fn test_invalid_env_format_is_config_error() {
        let result = Settings::default().apply_env_overrides(env(&[("ORGTREE_FORMAT", "xml")]));
        assert!(matches!(result, Err(ApplicationError::Config { .. })));
    }
}
