//! Deal records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{DealId, SellerId};
use crate::money::Money;

/// Where a deal sits in time relative to a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    /// The deal has not started yet.
    Upcoming,
    /// The deal is running.
    Live,
    /// The deal expired at or before the instant.
    Expired,
}

impl ExpiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryStatus::Upcoming => "upcoming",
            ExpiryStatus::Live => "live",
            ExpiryStatus::Expired => "expired",
        }
    }

    /// Badge text shown on a deal card.
    pub fn label(&self) -> &'static str {
        match self {
            ExpiryStatus::Upcoming => "Coming Soon",
            ExpiryStatus::Live => "Live Now",
            ExpiryStatus::Expired => "Expired",
        }
    }
}

/// A promotional deal on a product.
///
/// Deals come from a read-only source and are never mutated after load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deal {
    /// Unique deal identifier.
    pub id: DealId,
    /// Display name.
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Seller offering the deal.
    pub seller_id: SellerId,
    /// Category name (e.g., "Home & Garden").
    pub category: String,
    /// Image references, primary first.
    #[serde(default)]
    pub images: Vec<String>,
    /// Current deal price.
    pub price: Money,
    /// Price before the deal.
    #[serde(default)]
    pub original_price: Option<Money>,
    /// Average rating out of 5.
    #[serde(default)]
    pub rating: Option<f32>,
    /// Number of reviews behind the rating.
    #[serde(default)]
    pub review_count: Option<u32>,
    /// When the deal starts. `None` means already running.
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    /// When the deal ends. `None` means open-ended.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    /// Coupon code to apply at the seller.
    #[serde(default)]
    pub coupon_code: Option<String>,
    /// Short description for cards.
    #[serde(default)]
    pub description: Option<String>,
    /// Shown in the featured carousel.
    #[serde(default)]
    pub featured: bool,
}

impl Deal {
    /// Create a new deal with the required fields.
    pub fn new(
        id: impl Into<DealId>,
        name: impl Into<String>,
        brand: impl Into<String>,
        seller_id: impl Into<SellerId>,
        category: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            seller_id: seller_id.into(),
            category: category.into(),
            images: Vec::new(),
            price,
            original_price: None,
            rating: None,
            review_count: None,
            starts_at: None,
            expires_at: None,
            coupon_code: None,
            description: None,
            featured: false,
        }
    }

    pub fn with_original_price(mut self, original: Money) -> Self {
        self.original_price = Some(original);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.images.push(image.into());
        self
    }

    pub fn with_rating(mut self, rating: f32, review_count: u32) -> Self {
        self.rating = Some(rating.clamp(0.0, 5.0));
        self.review_count = Some(review_count);
        self
    }

    pub fn starting_at(mut self, starts_at: DateTime<Utc>) -> Self {
        self.starts_at = Some(starts_at);
        self
    }

    pub fn expiring_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    pub fn with_coupon(mut self, code: impl Into<String>) -> Self {
        self.coupon_code = Some(code.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Primary image reference, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Whole percent off the original price.
    pub fn discount_percent(&self) -> Option<u8> {
        self.original_price
            .as_ref()
            .and_then(|original| self.price.percent_off(original))
    }

    /// Amount saved against the original price.
    pub fn savings(&self) -> Option<Money> {
        self.discount_percent()?;
        self.original_price
            .as_ref()
            .and_then(|original| original.try_subtract(&self.price))
    }

    /// Status of the deal at `now`.
    ///
    /// Expiry wins over a future start so a misconfigured window never
    /// shows as upcoming after it closed.
    pub fn status_at(&self, now: DateTime<Utc>) -> ExpiryStatus {
        if self.expires_at.is_some_and(|end| end <= now) {
            ExpiryStatus::Expired
        } else if self.starts_at.is_some_and(|start| start > now) {
            ExpiryStatus::Upcoming
        } else {
            ExpiryStatus::Live
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sample() -> Deal {
        Deal::new(
            "deal-1",
            "Noise Cancelling Headphones",
            "SoundMax",
            "techhaven",
            "Electronics",
            Money::usd(14999),
        )
    }

    #[test]
    fn test_deal_discount() {
        let deal = sample().with_original_price(Money::usd(29999));
        assert_eq!(deal.discount_percent(), Some(50));
        assert_eq!(deal.savings(), Some(Money::usd(15000)));
    }

    #[test]
    fn test_deal_without_original_price() {
        let deal = sample();
        assert_eq!(deal.discount_percent(), None);
        assert_eq!(deal.savings(), None);
    }

    #[test]
    fn test_deal_primary_image() {
        assert_eq!(sample().primary_image(), None);
        let deal = sample().with_image("/img/a.jpg").with_image("/img/b.jpg");
        assert_eq!(deal.primary_image(), Some("/img/a.jpg"));
    }

    #[test]
    fn test_rating_is_clamped() {
        let deal = sample().with_rating(7.5, 10);
        assert_eq!(deal.rating, Some(5.0));
    }

    #[test]
    fn test_status_at() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();

        assert_eq!(sample().status_at(now), ExpiryStatus::Live);

        let expired = sample().expiring_at(now - Duration::hours(1));
        assert_eq!(expired.status_at(now), ExpiryStatus::Expired);

        let boundary = sample().expiring_at(now);
        assert_eq!(boundary.status_at(now), ExpiryStatus::Expired);

        let upcoming = sample().starting_at(now + Duration::days(2));
        assert_eq!(upcoming.status_at(now), ExpiryStatus::Upcoming);

        let running = sample()
            .starting_at(now - Duration::days(1))
            .expiring_at(now + Duration::days(1));
        assert_eq!(running.status_at(now), ExpiryStatus::Live);
    }

    #[test]
    fn test_deal_json_roundtrip_defaults() {
        let json = r#"{
            "id": "d1",
            "name": "Mug",
            "brand": "Brewly",
            "seller_id": "kitchenco",
            "category": "Home & Garden",
            "price": { "amount_cents": 999, "currency": "USD" }
        }"#;
        let deal: Deal = serde_json::from_str(json).unwrap();
        assert!(deal.images.is_empty());
        assert!(!deal.featured);
        assert_eq!(deal.expires_at, None);
    }
}
