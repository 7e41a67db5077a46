//! Read-only data access for the storefront.
//!
//! Pages talk to [`DealRepository`] instead of reaching for fixture data
//! directly, so a fetched feed can replace [`StaticCatalog`] without
//! touching any rendering code.

mod fixtures;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Deal, FaqEntry, Seller};
use crate::error::CommerceError;
use crate::ids::DealId;
use crate::money::Currency;

/// Read-only source of deals, sellers, categories and FAQ entries.
pub trait DealRepository: Send + Sync {
    /// All deals in source order.
    fn list_deals(&self) -> Vec<Deal>;

    /// A single deal by id.
    fn get_deal(&self, id: &DealId) -> Result<Deal, CommerceError>;

    /// All sellers in directory order.
    fn list_sellers(&self) -> Vec<Seller>;

    /// A single seller by slug.
    fn get_seller_by_slug(&self, slug: &str) -> Result<Seller, CommerceError>;

    /// Categories in directory order.
    fn list_categories(&self) -> Vec<Category>;

    /// FAQ entries in display order.
    fn list_faqs(&self) -> Vec<FaqEntry>;
}

/// In-memory catalog loaded once and never mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticCatalog {
    #[serde(default)]
    deals: Vec<Deal>,
    #[serde(default)]
    sellers: Vec<Seller>,
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    faqs: Vec<FaqEntry>,
}

impl StaticCatalog {
    /// Create a catalog from explicit collections.
    pub fn new(
        deals: Vec<Deal>,
        sellers: Vec<Seller>,
        categories: Vec<Category>,
        faqs: Vec<FaqEntry>,
    ) -> Self {
        Self {
            deals,
            sellers,
            categories,
            faqs,
        }
    }

    /// The built-in demo catalog, with deal windows placed around `anchor`.
    ///
    /// Anchoring keeps the expired/upcoming/live mix stable no matter when
    /// the storefront is started.
    pub fn seeded(anchor: DateTime<Utc>) -> Self {
        Self::seeded_in(anchor, Currency::USD)
    }

    /// [`StaticCatalog::seeded`] with every price in `currency`.
    pub fn seeded_in(anchor: DateTime<Utc>, currency: Currency) -> Self {
        Self {
            deals: fixtures::deals(anchor, currency),
            sellers: fixtures::sellers(),
            categories: fixtures::categories(),
            faqs: fixtures::faqs(),
        }
    }

    /// Load a catalog from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of deals in the catalog.
    pub fn deal_count(&self) -> usize {
        self.deals.len()
    }
}

impl DealRepository for StaticCatalog {
    fn list_deals(&self) -> Vec<Deal> {
        self.deals.clone()
    }

    fn get_deal(&self, id: &DealId) -> Result<Deal, CommerceError> {
        self.deals
            .iter()
            .find(|d| d.id == *id)
            .cloned()
            .ok_or_else(|| CommerceError::DealNotFound(id.to_string()))
    }

    fn list_sellers(&self) -> Vec<Seller> {
        self.sellers.clone()
    }

    fn get_seller_by_slug(&self, slug: &str) -> Result<Seller, CommerceError> {
        self.sellers
            .iter()
            .find(|s| s.slug == slug)
            .cloned()
            .ok_or_else(|| CommerceError::SellerNotFound(slug.to_string()))
    }

    fn list_categories(&self) -> Vec<Category> {
        self.categories.clone()
    }

    fn list_faqs(&self) -> Vec<FaqEntry> {
        self.faqs.clone()
    }
}
