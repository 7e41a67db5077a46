//! Deal catalog types, lookups and listing logic for DealPulse.
//!
//! This crate holds everything the storefront renders that is not UI:
//!
//! - **Catalog**: deals, sellers, categories, FAQ entries
//! - **Address**: country-specific address field schemas
//! - **Listing**: partitioning a deal collection into page sections
//! - **Repository**: read-only data access, backed by a static catalog
//!
//! # Example
//!
//! ```rust
//! use deal_commerce::prelude::*;
//!
//! let catalog = StaticCatalog::seeded(chrono::Utc::now());
//! let deals = catalog.list_deals();
//! let automotive = partition(&deals, &Partition::category("Automotive"));
//! assert!(automotive.iter().all(|d| d.category == "Automotive"));
//!
//! assert_eq!(category_to_slug("Home & Garden"), "home-garden");
//! assert_eq!(category_icon("Automotive"), "🚗");
//! ```

pub mod address;
pub mod application;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod listing;
pub mod money;
pub mod repository;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        category_icon, category_to_slug, slug_to_category, Category, Deal, ExpiryStatus,
        FaqEntry, Seller, DEFAULT_CATEGORY_ICON,
    };

    // Address
    pub use crate::address::{location_fields, supported_countries, LocationFields, RegionOption};

    // Listing
    pub use crate::listing::{brands, categories, group_by_category, partition, Partition};

    // Repository
    pub use crate::repository::{DealRepository, StaticCatalog};

    // Partner applications
    pub use crate::application::{validate_email, PartnerApplication};
}
