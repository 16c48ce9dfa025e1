//! Configuration management

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;
use crate::application::errors::ConfigError;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default)]
    pub catalogue: CatalogueConfig,
}

/// Which CatalogueService implementation to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    /// HTTP when a base URL is configured, otherwise in-memory
    #[default]
    Auto,
    Fake,
    Http,
}

impl FromStr for ServiceKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "fake" => Ok(Self::Fake),
            "http" => Ok(Self::Http),
            other => Err(ConfigError::InvalidValue(format!("unknown service kind: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CatalogueConfig {
    #[serde(default)]
    pub service: ServiceKind,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub use_seed_data: bool,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to render config: {}", e)))
    }

    pub fn load_env() -> Self {
        Config::default().with_env_overrides()
    }

    /// Apply `CATALOGUE_*` environment variables on top of this config
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(kind) = lookup("CATALOGUE_SERVICE") {
            // Anything unrecognised falls back to auto-detection
            self.catalogue.service = kind.parse().unwrap_or(ServiceKind::Auto);
        }

        if let Some(url) = lookup("CATALOGUE_BASE_URL") {
            self.catalogue.base_url = Some(url).filter(|u| !u.is_empty());
        }

        if let Some(seed) = lookup("CATALOGUE_USE_SEED_DATA") {
            self.catalogue.use_seed_data = seed == "true";
        }

        self
    }
}
