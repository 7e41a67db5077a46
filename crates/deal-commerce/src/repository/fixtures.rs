//! Demo catalog data.
//!
//! Deal order matters to the home page: the first four expire before the
//! anchor and the next four start after it.

use chrono::{DateTime, Duration, Utc};

use crate::catalog::{Category, Deal, FaqEntry, Seller};
use crate::money::{Currency, Money};

pub(super) fn deals(anchor: DateTime<Utc>, currency: Currency) -> Vec<Deal> {
    let hours = Duration::hours;
    let days = Duration::days;
    let price = |cents| Money::new(cents, currency);
    let deal = |id: &str, name: &str, brand: &str, seller: &str, category: &str, cents| {
        Deal::new(id, name, brand, seller, category, price(cents))
    };

    vec![
        // Expired
        deal("d-1001", "Wireless Earbuds Pro", "SoundMax", "techhaven", "Electronics", 4999)
            .with_original_price(price(9999))
            .with_image("/images/deals/earbuds.jpg")
            .with_rating(4.5, 1284)
            .expiring_at(anchor - days(2)),
        deal("d-1002", "Vitamin C Serum", "GlowLab", "glowbeauty", "Beauty", 1899)
            .with_original_price(price(3200))
            .with_image("/images/deals/serum.jpg")
            .with_rating(4.2, 532)
            .expiring_at(anchor - days(1)),
        deal("d-1003", "Cordless Drill Kit", "VoltWorks", "motormart", "Automotive", 8900)
            .with_original_price(price(12900))
            .with_image("/images/deals/drill.jpg")
            .expiring_at(anchor - hours(6)),
        deal(
            "d-1004",
            "Gourmet Snack Box",
            "Tastebud",
            "tastybox",
            "Food & Beverages",
            2499,
        )
        .with_original_price(price(3499))
        .with_image("/images/deals/snacks.jpg")
        .with_rating(4.7, 211)
        .expiring_at(anchor - hours(1)),
        // Upcoming
        deal("d-2001", "4K Streaming Stick", "StreamBox", "techhaven", "Electronics", 2999)
            .with_original_price(price(4999))
            .with_image("/images/deals/streaming.jpg")
            .starting_at(anchor + days(1))
            .expiring_at(anchor + days(4)),
        deal(
            "d-2002",
            "Raised Garden Bed",
            "GreenLeaf",
            "greenthumb",
            "Home & Garden",
            7450,
        )
        .with_original_price(price(9900))
        .with_image("/images/deals/garden-bed.jpg")
        .starting_at(anchor + days(2))
        .expiring_at(anchor + days(9)),
        deal(
            "d-2003",
            "Ultralight Tent",
            "TrailPro",
            "peakgear",
            "Sports & Outdoors",
            15999,
        )
        .with_original_price(price(22999))
        .with_image("/images/deals/tent.jpg")
        .starting_at(anchor + days(3))
        .expiring_at(anchor + days(10)),
        deal(
            "d-2004",
            "Building Blocks Mega Set",
            "BrickBuddy",
            "playland",
            "Toys & Games",
            3999,
        )
        .with_original_price(price(5999))
        .with_image("/images/deals/blocks.jpg")
        .starting_at(anchor + days(5))
        .expiring_at(anchor + days(12)),
        // Live
        deal(
            "d-3001",
            "Noise Cancelling Headphones",
            "SoundMax",
            "techhaven",
            "Electronics",
            14999,
        )
        .with_original_price(price(29999))
        .with_image("/images/deals/headphones.jpg")
        .with_image("/images/deals/headphones-side.jpg")
        .with_rating(4.8, 3410)
        .with_coupon("HUSH50")
        .with_description("Forty hours of battery and adaptive noise cancelling.")
        .expiring_at(anchor + hours(20))
        .featured(),
        deal(
            "d-3002",
            "Smart LED Bulbs (4 pack)",
            "Lumina",
            "techhaven",
            "Home & Garden",
            2799,
        )
        .with_original_price(price(3999))
        .with_image("/images/deals/bulbs.jpg")
        .with_rating(4.4, 876)
        .expiring_at(anchor + days(3)),
        deal("d-3003", "Hydrating Face Mask Set", "GlowLab", "glowbeauty", "Beauty", 1499)
            .with_original_price(price(2499))
            .with_image("/images/deals/masks.jpg")
            .with_rating(4.1, 190)
            .featured(),
        deal(
            "d-3004",
            "All-Weather Floor Mats",
            "RoadReady",
            "motormart",
            "Automotive",
            5499,
        )
        .with_original_price(price(7999))
        .with_image("/images/deals/floor-mats.jpg")
        .with_rating(4.6, 642)
        .expiring_at(anchor + days(6)),
        deal(
            "d-3005",
            "Cold Brew Coffee Maker",
            "Brewly",
            "tastybox",
            "Food & Beverages",
            3299,
        )
        .with_original_price(price(4499))
        .with_image("/images/deals/cold-brew.jpg")
        .with_rating(4.3, 455)
        .with_coupon("BREW10")
        .featured(),
        deal(
            "d-3006",
            "Insulated Water Bottle",
            "TrailPro",
            "peakgear",
            "Sports & Outdoors",
            1999,
        )
        .with_original_price(price(2999))
        .with_image("/images/deals/bottle.jpg")
        .with_rating(4.9, 2207),
        deal("d-3007", "Orthopedic Pet Bed", "Pawsome", "playland", "Pets", 4599)
            .with_original_price(price(6999))
            .with_image("/images/deals/pet-bed.jpg")
            .with_rating(4.5, 318)
            .expiring_at(anchor + hours(10))
            .featured(),
        deal(
            "d-3008",
            "Bestseller Paperback Bundle",
            "PageTurner",
            "playland",
            "Books",
            2400,
        )
        .with_image("/images/deals/books.jpg"),
    ]
}

pub(super) fn sellers() -> Vec<Seller> {
    vec![
        Seller::new("techhaven", "Tech Haven")
            .with_tagline("Gadgets and smart home gear at outlet prices")
            .with_description(
                "Tech Haven sources overstock electronics from major brands \
                 and passes the savings on.",
            )
            .with_logo("/images/sellers/techhaven.png")
            .with_rating(4.7, 8120)
            .with_category("Electronics")
            .with_category("Home & Garden")
            .with_website("https://techhaven.example.com")
            .with_location("Austin, TX")
            .verified(),
        Seller::new("glowbeauty", "Glow Beauty Co")
            .with_tagline("Clean skincare, honest prices")
            .with_rating(4.5, 2310)
            .with_category("Beauty")
            .with_location("Los Angeles, CA")
            .verified(),
        Seller::new("greenthumb", "Green Thumb Supply")
            .with_tagline("Everything for the backyard grower")
            .with_rating(4.6, 1044)
            .with_category("Home & Garden")
            .with_location("Portland, OR"),
        Seller::new("peakgear", "Peak Gear Outfitters")
            .with_tagline("Trail-tested outdoor equipment")
            .with_description("Family-run outfitter shipping camping and hiking gear since 2009.")
            .with_rating(4.8, 3975)
            .with_category("Sports & Outdoors")
            .with_website("https://peakgear.example.com")
            .with_location("Denver, CO")
            .verified(),
        Seller::new("motormart", "Motor Mart")
            .with_tagline("Parts, tools and accessories for every ride")
            .with_rating(4.3, 1502)
            .with_category("Automotive")
            .with_location("Detroit, MI"),
        Seller::new("tastybox", "Tasty Box")
            .with_tagline("Small-batch snacks and kitchen favourites")
            .with_rating(4.4, 689)
            .with_category("Food & Beverages")
            .with_location("Toronto, ON"),
        Seller::new("playland", "Playland Market")
            .with_tagline("Toys, books and treats for kids and pets")
            .with_rating(4.2, 940)
            .with_category("Toys & Games")
            .with_category("Books")
            .with_category("Pets")
            .with_location("Chicago, IL"),
    ]
}

pub(super) fn categories() -> Vec<Category> {
    [
        ("Electronics", "Headphones, streaming, smart home and more"),
        ("Home & Garden", "Decor, lighting and outdoor living"),
        ("Beauty", "Skincare, makeup and grooming"),
        ("Sports & Outdoors", "Camping, fitness and trail gear"),
        ("Automotive", "Accessories, tools and car care"),
        ("Food & Beverages", "Snacks, coffee and pantry staples"),
        ("Toys & Games", "Building sets, puzzles and games"),
        ("Pets", "Beds, toys and treats"),
        ("Books", "Bestsellers and bundles"),
    ]
    .into_iter()
    .map(|(name, description)| Category::new(name).with_description(description))
    .collect()
}

pub(super) fn faqs() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            "Deals",
            "How often are new deals posted?",
            "New deals go live every morning and the daily deal countdown resets at midnight.",
        ),
        FaqEntry::new(
            "Deals",
            "Why did a deal disappear before the countdown ended?",
            "Sellers can end a deal early when stock runs out. \
             Expired deals stay listed for reference.",
        ),
        FaqEntry::new(
            "Deals",
            "How do coupon codes work?",
            "Copy the code shown on the deal card and apply it at the seller's checkout.",
        ),
        FaqEntry::new(
            "Alerts",
            "How do I get notified about new deals?",
            "Open Deal Alerts from any page, choose your categories \
             and we will email you when matching deals go live.",
        ),
        FaqEntry::new(
            "Alerts",
            "Can I unsubscribe from alerts?",
            "Yes. Every alert email has a one-click unsubscribe link.",
        ),
        FaqEntry::new(
            "Sellers",
            "Who are the sellers listed here?",
            "Independent retailers and brand outlets. \
             Verified sellers have passed our partner review.",
        ),
        FaqEntry::new(
            "Sellers",
            "How do I list my store?",
            "Apply through the Partner Program page. \
             We review applications within five business days.",
        ),
        FaqEntry::new(
            "Sellers",
            "Which countries can partners apply from?",
            "Anywhere. Address forms are tailored for the United States and Canada, \
             other countries use a general form.",
        ),
    ]
}
