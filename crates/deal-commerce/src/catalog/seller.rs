//! Seller directory records.

use serde::{Deserialize, Serialize};

use crate::ids::SellerId;

/// A seller listed in the directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seller {
    /// Unique seller identifier.
    pub id: SellerId,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Logo image reference.
    #[serde(default)]
    pub logo: Option<String>,
    /// One-line tagline for directory cards.
    #[serde(default)]
    pub tagline: Option<String>,
    /// Longer description for the seller page.
    #[serde(default)]
    pub description: Option<String>,
    /// Average rating out of 5.
    #[serde(default)]
    pub rating: Option<f32>,
    /// Number of reviews behind the rating.
    #[serde(default)]
    pub review_count: u32,
    /// Category names the seller carries.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Seller website.
    #[serde(default)]
    pub website: Option<String>,
    /// City/region shown on the card.
    #[serde(default)]
    pub location: Option<String>,
    /// Whether the seller passed partner verification.
    #[serde(default)]
    pub verified: bool,
}

impl Seller {
    /// Create a seller whose id and slug are the same.
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            id: SellerId::new(slug.clone()),
            slug,
            name: name.into(),
            logo: None,
            tagline: None,
            description: None,
            rating: None,
            review_count: 0,
            categories: Vec::new(),
            website: None,
            location: None,
            verified: false,
        }
    }

    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = Some(tagline.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    pub fn with_rating(mut self, rating: f32, review_count: u32) -> Self {
        self.rating = Some(rating.clamp(0.0, 5.0));
        self.review_count = review_count;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn verified(mut self) -> Self {
        self.verified = true;
        self
    }

    /// Route path for the seller page.
    pub fn href(&self) -> String {
        format!("/sellers/{}", self.slug)
    }

    /// Initials used when there is no logo.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seller_creation() {
        let seller = Seller::new("tech-haven", "Tech Haven").verified();
        assert_eq!(seller.id.as_str(), "tech-haven");
        assert_eq!(seller.href(), "/sellers/tech-haven");
        assert!(seller.verified);
    }

    #[test]
    fn test_seller_initials() {
        assert_eq!(Seller::new("a", "Tech Haven").initials(), "TH");
        assert_eq!(Seller::new("b", "outdoor gear supply co").initials(), "OG");
        assert_eq!(Seller::new("c", "Zest").initials(), "Z");
    }
}
