//! Display formatting for cards and banners.

use chrono::{DateTime, Utc};
use deal_commerce::catalog::{Deal, ExpiryStatus};

/// Five-star rating string, rounded to the nearest half star downwards.
///
/// `4.5` renders as `"★★★★½"`, `4.2` as `"★★★★☆"`.
pub fn rating_stars(rating: f32) -> String {
    let halves = (rating.clamp(0.0, 5.0) * 2.0).floor() as usize;
    let full = halves / 2;
    let half = halves % 2;
    let mut stars = "★".repeat(full);
    if half == 1 {
        stars.push('½');
    }
    stars.push_str(&"☆".repeat(5 - full - half));
    stars
}

/// Integer with thousands separators.
pub fn thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `"1,284 reviews"`, singular for one.
pub fn review_count_label(count: u32) -> String {
    if count == 1 {
        "1 review".to_string()
    } else {
        format!("{} reviews", thousands(count))
    }
}

/// Short calendar date, e.g. `"Oct 21"`.
pub fn short_date(at: DateTime<Utc>) -> String {
    at.format("%b %-d").to_string()
}

/// Timing line for a deal card as of `now`.
pub fn expiry_label(deal: &Deal, now: DateTime<Utc>) -> Option<String> {
    match deal.status_at(now) {
        ExpiryStatus::Upcoming => deal.starts_at.map(|at| format!("Starts {}", short_date(at))),
        ExpiryStatus::Live => deal.expires_at.map(|at| format!("Ends {}", short_date(at))),
        ExpiryStatus::Expired => deal.expires_at.map(|at| format!("Ended {}", short_date(at))),
    }
}

/// Zero-padded countdown unit. Days are left as-is.
pub fn countdown_unit(value: u64, label: &str) -> String {
    if label == "Days" {
        value.to_string()
    } else {
        format!("{value:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use deal_commerce::Money;

    #[test]
    fn test_rating_stars() {
        assert_eq!(rating_stars(4.5), "★★★★½");
        assert_eq!(rating_stars(4.2), "★★★★☆");
        assert_eq!(rating_stars(5.0), "★★★★★");
        assert_eq!(rating_stars(0.0), "☆☆☆☆☆");
        assert_eq!(rating_stars(7.0), "★★★★★");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1284), "1,284");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_review_count_label() {
        assert_eq!(review_count_label(1), "1 review");
        assert_eq!(review_count_label(3410), "3,410 reviews");
    }

    #[test]
    fn test_expiry_label() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let deal = Deal::new(
            "d-1",
            "Tent",
            "TrailPro",
            "peakgear",
            "Sports & Outdoors",
            Money::usd(100),
        );

        assert_eq!(expiry_label(&deal, now), None);

        let live = deal.clone().expiring_at(now + Duration::days(2));
        assert_eq!(expiry_label(&live, now).as_deref(), Some("Ends Oct 21"));

        let expired = deal.clone().expiring_at(now - Duration::days(1));
        assert_eq!(expiry_label(&expired, now).as_deref(), Some("Ended Oct 18"));

        let upcoming = deal.starting_at(now + Duration::days(3));
        assert_eq!(expiry_label(&upcoming, now).as_deref(), Some("Starts Oct 22"));
    }

    #[test]
    fn test_countdown_unit() {
        assert_eq!(countdown_unit(3, "Days"), "3");
        assert_eq!(countdown_unit(3, "Hours"), "03");
        assert_eq!(countdown_unit(42, "Seconds"), "42");
    }
}
