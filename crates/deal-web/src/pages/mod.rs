//! Route pages.

mod categories;
mod deals;
mod faq;
mod home;
mod not_found;
mod partners;
mod sellers;

pub use categories::{CategoriesPage, CategoryPage};
pub use deals::{BrandPage, DealsPage, ExpiredDealsPage};
pub use faq::FaqPage;
pub use home::HomePage;
pub use not_found::NotFound;
pub use partners::PartnersPage;
pub use sellers::{SellerPage, SellersPage};

use deal_commerce::catalog::Deal;
use deal_commerce::listing::{partition, Partition};

/// Owned copy of one section of `deals`.
pub(crate) fn section(deals: &[Deal], rule: &Partition) -> Vec<Deal> {
    partition(deals, rule).into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use deal_commerce::catalog::ExpiryStatus;
    use deal_commerce::repository::{DealRepository, StaticCatalog};

    #[test]
    fn test_sections_cover_catalog() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let deals = StaticCatalog::seeded(now).list_deals();

        let total: usize = [ExpiryStatus::Upcoming, ExpiryStatus::Live, ExpiryStatus::Expired]
            .into_iter()
            .map(|status| section(&deals, &Partition::expiry(status, now)).len())
            .sum();
        assert_eq!(total, deals.len());
    }

    #[test]
    fn test_section_keeps_order() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let deals = StaticCatalog::seeded(now).list_deals();
        let first_four = section(&deals, &Partition::range(0..4));
        assert_eq!(first_four.as_slice(), &deals[..4]);
    }
}
