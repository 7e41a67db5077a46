//! Embedded site configuration.

use deal_core::SiteConfig;
use deal_observability::{init_logging, UI_TARGET};

use crate::error::WebError;

/// `site.toml`, baked into the binary so the server and the hydrated client
/// read the same values.
const SITE_TOML: &str = include_str!("../site.toml");

/// Parse a site configuration document.
pub fn parse_site_config(source: &str) -> Result<SiteConfig, WebError> {
    Ok(SiteConfig::from_toml_str(source)?)
}

/// The storefront configuration, or the defaults if the embedded file is
/// invalid.
pub fn site_config() -> SiteConfig {
    parse_site_config(SITE_TOML).unwrap_or_else(|err| {
        tracing::warn!(target: UI_TARGET, error = %err, "invalid site.toml, using defaults");
        SiteConfig::default()
    })
}

/// Install the global log subscriber described by `config.logging`.
pub fn install_logging(config: &SiteConfig) -> Result<(), WebError> {
    init_logging(&config.logging)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = parse_site_config(SITE_TOML).unwrap();
        assert_eq!(config.name, "DealPulse");
        assert_eq!(config.deal_alerts_fragment, "deal-alerts");
    }

    #[test]
    fn test_invalid_config_reports_error() {
        let err = parse_site_config("featured_limit = \"lots\"").unwrap_err();
        assert!(matches!(err, WebError::Config(_)));
    }

    #[test]
    fn test_second_logging_install_is_an_error() {
        let config = SiteConfig::default();
        let _ = install_logging(&config);
        let err = install_logging(&config).unwrap_err();
        assert!(matches!(err, WebError::Observability(_)));
    }

    #[test]
    fn test_site_config_never_fails() {
        assert!(!site_config().name.is_empty());
    }
}
