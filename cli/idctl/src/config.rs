//! Configuration loading.
//!
//! Sources, lowest precedence first:
//! - `config.json` in the platform config directory
//! - `CRID_*` environment variables
//! - command-line flags (applied by the caller)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use coursehub_id::CodecConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Get the config directory path.
fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "coursehub", "crid")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Codec parameters.
    #[serde(default)]
    pub codec: CodecConfig,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Where the file layer was read from, if a file existed.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            codec: CodecConfig::default(),
            log_level: default_log_level(),
            source: None,
        }
    }
}

impl Config {
    /// Load config from disk (or defaults), then apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = config_dir()?.join(CONFIG_FILE);
        let mut config = Self::from_file(&path)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Read a config file, returning defaults when it does not exist.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let mut config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Apply `CRID_*` overrides. `lookup` returns a variable's value if set.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(prefix) = lookup("CRID_PREFIX") {
            self.codec.prefix = prefix;
        }

        if let Some(offset) = lookup("CRID_OFFSET")
            .map(|v| v.parse::<u64>())
            .transpose()
            .context("CRID_OFFSET must be a non-negative integer.")?
        {
            self.codec.offset = offset;
        }

        if let Some(min_width) = lookup("CRID_MIN_WIDTH")
            .map(|v| v.parse::<usize>())
            .transpose()
            .context("CRID_MIN_WIDTH must be a positive integer.")?
        {
            self.codec.min_width = min_width;
        }

        if let Some(level) = lookup("CRID_LOG_LEVEL") {
            self.log_level = level;
        }

        Ok(())
    }

    /// Save config to disk.
    pub fn save(&self) -> Result<PathBuf> {
        let dir = config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = dir.join(CONFIG_FILE);
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::from_file(Path::new("/nonexistent/crid/config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.codec.prefix, "CR");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env(env(&[
                ("CRID_PREFIX", "PX"),
                ("CRID_OFFSET", "0"),
                ("CRID_MIN_WIDTH", "5"),
                ("CRID_LOG_LEVEL", "debug"),
            ]))
            .unwrap();
        assert_eq!(config.codec.prefix, "PX");
        assert_eq!(config.codec.offset, 0);
        assert_eq!(config.codec.min_width, 5);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_env_rejects_bad_numbers() {
        let mut config = Config::default();
        let err = config
            .apply_env(env(&[("CRID_OFFSET", "-3")]))
            .unwrap_err();
        assert!(err.to_string().contains("CRID_OFFSET"));
    }

    #[test]
    fn test_file_layer() {
        let path = std::env::temp_dir().join(format!("crid-config-{}.json", std::process::id()));
        fs::write(&path, r#"{"codec": {"prefix": "CX"}, "log_level": "info"}"#).unwrap();

        let config = Config::from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.codec.prefix, "CX");
        assert_eq!(config.codec.offset, 1000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.source.as_deref(), Some(path.as_path()));
    }
}
