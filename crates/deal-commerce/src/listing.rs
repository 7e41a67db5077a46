//! Partitioning a deal collection into page sections.
//!
//! Every partition keeps the source collection's order. Nothing here sorts.

use std::ops::Range;

use chrono::{DateTime, Utc};

use crate::catalog::{category_to_slug, Category, Deal, ExpiryStatus};
use crate::ids::SellerId;

/// Rule selecting which deals a section shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Partition {
    /// Every deal.
    All,
    /// Deals from one brand, case-insensitive.
    Brand(String),
    /// Deals in one category, matched by name (case-insensitive) or slug.
    Category(String),
    /// Deals offered by one seller.
    Seller(SellerId),
    /// A positional slice of the source, clamped to its bounds.
    IndexRange(Range<usize>),
    /// Deals with the given status at an instant.
    Expiry(ExpiryStatus, DateTime<Utc>),
    /// Deals flagged for the featured carousel.
    Featured,
}

impl Partition {
    pub fn brand(name: impl Into<String>) -> Self {
        Partition::Brand(name.into())
    }

    pub fn category(name_or_slug: impl Into<String>) -> Self {
        Partition::Category(name_or_slug.into())
    }

    pub fn seller(id: impl Into<SellerId>) -> Self {
        Partition::Seller(id.into())
    }

    pub fn range(range: Range<usize>) -> Self {
        Partition::IndexRange(range)
    }

    pub fn expiry(status: ExpiryStatus, now: DateTime<Utc>) -> Self {
        Partition::Expiry(status, now)
    }

    /// Check whether a single deal belongs to this partition.
    ///
    /// `IndexRange` is positional and always answers `true` here; use
    /// [`partition`] for it.
    pub fn matches(&self, deal: &Deal) -> bool {
        match self {
            Partition::All | Partition::IndexRange(_) => true,
            Partition::Brand(brand) => deal.brand.eq_ignore_ascii_case(brand),
            Partition::Category(key) => {
                deal.category.eq_ignore_ascii_case(key) || category_to_slug(&deal.category) == *key
            }
            Partition::Seller(id) => deal.seller_id == *id,
            Partition::Expiry(status, now) => deal.status_at(*now) == *status,
            Partition::Featured => deal.featured,
        }
    }
}

/// Select the deals a partition covers, in source order.
pub fn partition<'a>(deals: &'a [Deal], rule: &Partition) -> Vec<&'a Deal> {
    match rule {
        Partition::IndexRange(range) => {
            let end = range.end.min(deals.len());
            let start = range.start.min(end);
            deals[start..end].iter().collect()
        }
        _ => deals.iter().filter(|deal| rule.matches(deal)).collect(),
    }
}

/// Group deals by category, categories in first-seen order.
pub fn group_by_category(deals: &[Deal]) -> Vec<(String, Vec<&Deal>)> {
    let mut groups: Vec<(String, Vec<&Deal>)> = Vec::new();
    for deal in deals {
        match groups.iter_mut().find(|(name, _)| *name == deal.category) {
            Some((_, members)) => members.push(deal),
            None => groups.push((deal.category.clone(), vec![deal])),
        }
    }
    groups
}

/// Distinct brand names in first-seen order.
pub fn brands(deals: &[Deal]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for deal in deals {
        if !seen.iter().any(|b| b.eq_ignore_ascii_case(&deal.brand)) {
            seen.push(deal.brand.clone());
        }
    }
    seen
}

/// Distinct categories in first-seen order.
pub fn categories(deals: &[Deal]) -> Vec<Category> {
    group_by_category(deals)
        .into_iter()
        .map(|(name, _)| Category::new(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use chrono::{Duration, TimeZone};

    fn deal(id: &str, brand: &str, seller: &str, category: &str) -> Deal {
        Deal::new(id, format!("Deal {id}"), brand, seller, category, Money::usd(1000))
    }

    fn sample() -> Vec<Deal> {
        vec![
            deal("1", "SoundMax", "techhaven", "Electronics"),
            deal("2", "GreenLeaf", "gardenworks", "Home & Garden"),
            deal("3", "soundmax", "techhaven", "Electronics").featured(),
            deal("4", "TrailPro", "outdoorco", "Sports & Outdoors"),
            deal("5", "GreenLeaf", "gardenworks", "Home & Garden").featured(),
        ]
    }

    fn ids(deals: &[&Deal]) -> Vec<String> {
        deals.iter().map(|d| d.id.to_string()).collect()
    }

    #[test]
    fn test_index_range_is_slice() {
        let deals = sample();
        assert_eq!(ids(&partition(&deals, &Partition::range(1..3))), ["2", "3"]);
        assert_eq!(ids(&partition(&deals, &Partition::range(0..5))).len(), 5);
    }

    #[test]
    fn test_index_range_clamps() {
        let deals = sample();
        assert_eq!(ids(&partition(&deals, &Partition::range(3..10))), ["4", "5"]);
        assert!(partition(&deals, &Partition::range(8..12)).is_empty());
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = Partition::range(4..2);
        assert!(partition(&deals, &reversed).is_empty());
    }

    #[test]
    fn test_brand_partition_case_insensitive() {
        let deals = sample();
        assert_eq!(
            ids(&partition(&deals, &Partition::brand("SOUNDMAX"))),
            ["1", "3"]
        );
    }

    #[test]
    fn test_category_partition_by_name_or_slug() {
        let deals = sample();
        let by_name = partition(&deals, &Partition::category("Home & Garden"));
        let by_slug = partition(&deals, &Partition::category("home-garden"));
        assert_eq!(ids(&by_name), ["2", "5"]);
        assert_eq!(ids(&by_slug), ["2", "5"]);
    }

    #[test]
    fn test_seller_and_featured_partitions() {
        let deals = sample();
        assert_eq!(
            ids(&partition(&deals, &Partition::seller("gardenworks"))),
            ["2", "5"]
        );
        assert_eq!(ids(&partition(&deals, &Partition::Featured)), ["3", "5"]);
    }

    #[test]
    fn test_expiry_partition() {
        let now = Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap();
        let deals = vec![
            deal("a", "X", "s", "Books").expiring_at(now - Duration::days(1)),
            deal("b", "X", "s", "Books").starting_at(now + Duration::days(1)),
            deal("c", "X", "s", "Books"),
        ];
        assert_eq!(
            ids(&partition(&deals, &Partition::expiry(ExpiryStatus::Expired, now))),
            ["a"]
        );
        assert_eq!(
            ids(&partition(&deals, &Partition::expiry(ExpiryStatus::Upcoming, now))),
            ["b"]
        );
        assert_eq!(
            ids(&partition(&deals, &Partition::expiry(ExpiryStatus::Live, now))),
            ["c"]
        );
    }

    #[test]
    fn test_grouping_preserves_first_seen_order() {
        let deals = sample();
        let groups = group_by_category(&deals);
        let names: Vec<_> = groups.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["Electronics", "Home & Garden", "Sports & Outdoors"]);
        assert_eq!(groups[0].1.len(), 2);

        assert_eq!(brands(&deals), ["SoundMax", "GreenLeaf", "TrailPro"]);
        assert_eq!(categories(&deals)[1].slug(), "home-garden");
    }
}
