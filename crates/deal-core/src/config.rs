//! Site configuration.
//!
//! Loaded from TOML or JSON. Every field has a default, so an empty file is a
//! valid configuration.

use std::path::Path;

use anyhow::Context;
use deal_commerce::Currency;
use deal_observability::LoggingConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::countdown::CountdownTarget;
use crate::fragment::DEAL_ALERTS_FRAGMENT;

/// Errors from parsing or validating a [`SiteConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config value for '{field}': {message}")]
    Invalid { field: &'static str, message: String },
}

impl ConfigError {
    fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            message: message.into(),
        }
    }
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name shown in the header and page titles.
    pub name: String,

    /// Line under the site name.
    pub tagline: String,

    /// Display currency.
    pub currency: Currency,

    /// What the countdown banner counts towards.
    pub countdown: CountdownTarget,

    /// Fragment (without `#`) that opens the deal alerts modal.
    pub deal_alerts_fragment: String,

    /// Maximum featured deals on the home page.
    pub featured_limit: usize,

    /// Deals per carousel page.
    pub carousel_page_size: usize,

    pub logging: LoggingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "DealPulse".to_string(),
            tagline: "Today's best deals, before they're gone".to_string(),
            currency: Currency::USD,
            countdown: CountdownTarget::EndOfDay,
            deal_alerts_fragment: DEAL_ALERTS_FRAGMENT.to_string(),
            featured_limit: 4,
            carousel_page_size: 4,
            logging: LoggingConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let config = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };
        config.with_context(|| format!("Failed to load config: {}", path.display()))
    }

    /// Parse and validate TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate JSON.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::invalid("name", "must not be empty"));
        }
        let fragment = self.deal_alerts_fragment.trim_start_matches('#');
        if fragment.is_empty() {
            return Err(ConfigError::invalid("deal_alerts_fragment", "must not be empty"));
        }
        if fragment.chars().any(char::is_whitespace) {
            return Err(ConfigError::invalid(
                "deal_alerts_fragment",
                "must not contain whitespace",
            ));
        }
        if self.carousel_page_size == 0 {
            return Err(ConfigError::invalid("carousel_page_size", "must be at least 1"));
        }
        Ok(())
    }
}
