//! Section assembly over the seeded catalog, the way the home page builds it.

use chrono::{TimeZone, Utc};
use deal_commerce::prelude::*;

fn catalog() -> StaticCatalog {
    StaticCatalog::seeded(Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap())
}

#[test]
fn test_index_range_matches_slice_for_every_window() {
    let deals = catalog().list_deals();
    let n = deals.len();

    for a in 0..=n {
        for b in a..=n {
            let section = partition(&deals, &Partition::range(a..b));
            let expected: Vec<&Deal> = deals[a..b].iter().collect();
            assert_eq!(section, expected, "window {a}..{b}");
        }
    }
}

#[test]
fn test_positional_and_temporal_sections_agree_on_seed_data() {
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();
    let deals = catalog().list_deals();

    let expired_by_index = partition(&deals, &Partition::range(0..4));
    let expired_by_time = partition(&deals, &Partition::expiry(ExpiryStatus::Expired, now));
    assert_eq!(expired_by_index, expired_by_time);

    let upcoming_by_index = partition(&deals, &Partition::range(4..8));
    let upcoming_by_time = partition(&deals, &Partition::expiry(ExpiryStatus::Upcoming, now));
    assert_eq!(upcoming_by_index, upcoming_by_time);
}

#[test]
fn test_seller_pages_list_only_their_deals() {
    let catalog = catalog();
    let deals = catalog.list_deals();

    for seller in catalog.list_sellers() {
        let seller = catalog.get_seller_by_slug(&seller.slug).unwrap();
        for deal in partition(&deals, &Partition::seller(seller.id.clone())) {
            assert_eq!(deal.seller_id, seller.id);
        }
    }
}

#[test]
fn test_category_routes_resolve_from_slugs() {
    let catalog = catalog();
    let categories = catalog.list_categories();

    for category in &categories {
        let slug = category_to_slug(&category.name);
        let resolved = slug_to_category(&slug, &categories).unwrap();
        assert_eq!(resolved.name, category.name);
    }

    assert_eq!(category_to_slug("Home & Garden"), "home-garden");
    assert_eq!(category_to_slug("Food & Beverages"), "food-beverages");
}

#[test]
fn test_category_icons_fall_back() {
    assert_eq!(category_icon("Automotive"), "🚗");
    assert_eq!(category_icon("Unknown Category"), "📦");
}

#[test]
fn test_address_schemas() {
    let us = location_fields("US");
    assert_eq!(us.region_options.map(<[RegionOption]>::len), Some(51));
    assert_eq!(us.postal_label, "Zip Code");

    assert!(location_fields("ZZ").region_options.is_none());
}
