use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_PAGE_SIZE: usize = 1000;

/// Operator configuration persisted as TOML. Everything here is a
/// default the CLI flags can override; a missing file means defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub access_key: Option<String>,
    #[serde(default)]
    pub secret_key: Option<String>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: None,
            access_key: None,
            secret_key: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            return Ok(config_dir.join("translens").join("config.toml"));
        }

        if let Some(home) = std::env::var_os("HOME") {
            return Ok(PathBuf::from(home).join(".translens").join("config.toml"));
        }

        Err(Error::Config(
            "Could not determine config path: no HOME directory or config directory found"
                .to_string(),
        ))
    }
}

/// Resolved connection profile for the stores of one run.
///
/// The filesystem backends only need their paths, but the operator
/// surface keeps the original tooling's contract: a region is required,
/// static credentials are optional (ambient environment otherwise), so a
/// remote backend can slot in without changing the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreProfile {
    pub region: String,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
}

impl StoreProfile {
    /// Merge CLI flags over config-file defaults. A region must come from
    /// one of the two.
    pub fn resolve(
        region: Option<String>,
        access_key: Option<String>,
        secret_key: Option<String>,
        config: &Config,
    ) -> Result<Self> {
        let region = region
            .or_else(|| config.region.clone())
            .ok_or_else(|| Error::Config("a region is required (--region)".to_string()))?;

        Ok(Self {
            region,
            access_key: access_key.or_else(|| config.access_key.clone()),
            secret_key: secret_key.or_else(|| config.secret_key.clone()),
        })
    }
}
