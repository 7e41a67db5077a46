//! Values shared with every component through Leptos context.

use std::sync::Arc;

use chrono::{DateTime, Duration, DurationRound, Utc};
use deal_commerce::repository::{DealRepository, StaticCatalog};
use deal_commerce::Currency;
use deal_core::{SignalBus, SiteConfig};
use leptos::prelude::*;

/// Read-only catalog handle.
#[derive(Clone)]
pub struct Catalog(Arc<dyn DealRepository>);

impl Catalog {
    pub fn new(repository: impl DealRepository + 'static) -> Self {
        Self(Arc::new(repository))
    }

    /// The demo catalog anchored so server and client agree on it, priced
    /// in `currency`.
    pub fn seeded(now: DateTime<Utc>, currency: Currency) -> Self {
        Self::new(StaticCatalog::seeded_in(catalog_anchor(now), currency))
    }

    pub fn repository(&self) -> &dyn DealRepository {
        self.0.as_ref()
    }
}

/// Start of `now`'s hour. Deal windows are laid out around it.
pub fn catalog_anchor(now: DateTime<Utc>) -> DateTime<Utc> {
    now.duration_trunc(Duration::hours(1)).unwrap_or(now)
}

/// Provide the site configuration, signal bus and catalog.
pub fn provide_storefront_context(config: SiteConfig, catalog: Catalog) {
    provide_context(config);
    provide_context(SignalBus::new());
    provide_context(catalog);
}

pub fn use_site_config() -> SiteConfig {
    expect_context::<SiteConfig>()
}

pub fn use_signal_bus() -> SignalBus {
    expect_context::<SignalBus>()
}

pub fn use_catalog() -> Catalog {
    expect_context::<Catalog>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_anchor_is_stable_within_an_hour() {
        let early = Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 12).unwrap();
        let late = Utc.with_ymd_and_hms(2026, 10, 19, 8, 59, 59).unwrap();
        assert_eq!(catalog_anchor(early), catalog_anchor(late));
        assert_eq!(
            catalog_anchor(late),
            Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_seeded_catalog() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let catalog = Catalog::seeded(now, Currency::USD);
        assert!(!catalog.repository().list_deals().is_empty());
        assert!(catalog.repository().get_seller_by_slug("techhaven").is_ok());
    }

    #[test]
    fn test_seeded_catalog_uses_site_currency() {
        let config = SiteConfig::from_toml_str("currency = \"EUR\"").unwrap();
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let catalog = Catalog::seeded(now, config.currency);
        let deals = catalog.repository().list_deals();
        assert!(deals.iter().all(|d| d.price.currency == Currency::EUR));
    }
}
