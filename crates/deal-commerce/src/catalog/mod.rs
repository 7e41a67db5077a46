//! Deal catalog module.
//!
//! Contains types for deals, sellers, categories and FAQ entries, plus the
//! category slug/icon lookups.

mod category;
mod deal;
mod faq;
mod seller;

pub use category::{
    category_icon, category_to_slug, slug_to_category, Category, DEFAULT_CATEGORY_ICON,
};
pub use deal::{Deal, ExpiryStatus};
pub use faq::FaqEntry;
pub use seller::Seller;
