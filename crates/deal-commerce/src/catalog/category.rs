//! Categories and the category lookup helpers.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Icon used for any category without an entry in the icon table.
pub const DEFAULT_CATEGORY_ICON: &str = "📦";

static CATEGORY_ICONS: &[(&str, &str)] = &[
    ("Electronics", "📱"),
    ("Fashion", "👗"),
    ("Home & Garden", "🏡"),
    ("Beauty", "💄"),
    ("Health & Wellness", "💊"),
    ("Sports & Outdoors", "⚽"),
    ("Toys & Games", "🧸"),
    ("Food & Beverages", "🍔"),
    ("Automotive", "🚗"),
    ("Books", "📚"),
    ("Travel", "✈️"),
    ("Pets", "🐾"),
];

static AMPERSAND_OR_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*&\s*|\s+").expect("valid separator pattern"));

static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9-]").expect("valid slug pattern"));

/// Convert a category name into its URL slug.
///
/// Lowercases, turns "word & word" and runs of whitespace into a single
/// hyphen, then drops anything outside `[a-z0-9-]`.
///
/// ```
/// use deal_commerce::catalog::category_to_slug;
/// assert_eq!(category_to_slug("Home & Garden"), "home-garden");
/// assert_eq!(category_to_slug("Food & Beverages"), "food-beverages");
/// ```
pub fn category_to_slug(name: &str) -> String {
    let lowered = name.to_lowercase();
    let hyphenated = AMPERSAND_OR_SPACE.replace_all(&lowered, "-");
    NON_SLUG_CHARS.replace_all(&hyphenated, "").into_owned()
}

/// Display icon for a category name, exact match only.
pub fn category_icon(name: &str) -> &'static str {
    CATEGORY_ICONS
        .iter()
        .find(|(category, _)| *category == name)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_CATEGORY_ICON)
}

/// Find the category whose slug is `slug`.
pub fn slug_to_category<'a>(slug: &str, categories: &'a [Category]) -> Option<&'a Category> {
    categories.iter().find(|c| c.slug() == slug)
}

/// A deal category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Category {
    /// Category name as shown to shoppers.
    pub name: String,
    /// One-line description for the category directory.
    #[serde(default)]
    pub description: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// URL slug derived from the name.
    pub fn slug(&self) -> String {
        category_to_slug(&self.name)
    }

    /// Display icon derived from the name.
    pub fn icon(&self) -> &'static str {
        category_icon(&self.name)
    }

    /// Route path for the category page.
    pub fn href(&self) -> String {
        format!("/categories/{}", self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_ampersand() {
        assert_eq!(category_to_slug("Home & Garden"), "home-garden");
        assert_eq!(category_to_slug("Food & Beverages"), "food-beverages");
        assert_eq!(category_to_slug("Sports&Outdoors"), "sports-outdoors");
    }

    #[test]
    fn test_slug_whitespace_collapses() {
        assert_eq!(category_to_slug("Toys   and  Games"), "toys-and-games");
        assert_eq!(category_to_slug("Automotive"), "automotive");
    }

    #[test]
    fn test_slug_strips_other_characters() {
        assert_eq!(category_to_slug("Kids' Clothing!"), "kids-clothing");
        assert_eq!(category_to_slug("Café & Bar"), "caf-bar");
        assert_eq!(category_to_slug("4K TVs"), "4k-tvs");
    }

    #[test]
    fn test_icon_lookup() {
        assert_eq!(category_icon("Automotive"), "🚗");
        assert_eq!(category_icon("Home & Garden"), "🏡");
    }

    #[test]
    fn test_icon_fallback() {
        assert_eq!(category_icon("Unknown Category"), DEFAULT_CATEGORY_ICON);
        assert_eq!(category_icon("Unknown Category"), "📦");
        // Exact match only.
        assert_eq!(category_icon("automotive"), "📦");
    }

    #[test]
    fn test_category_derived_fields() {
        let cat = Category::new("Health & Wellness");
        assert_eq!(cat.slug(), "health-wellness");
        assert_eq!(cat.icon(), "💊");
        assert_eq!(cat.href(), "/categories/health-wellness");
    }

    #[test]
    fn test_slug_to_category() {
        let cats = vec![Category::new("Electronics"), Category::new("Home & Garden")];
        assert_eq!(
            slug_to_category("home-garden", &cats).map(|c| c.name.as_str()),
            Some("Home & Garden")
        );
        assert!(slug_to_category("garden", &cats).is_none());
    }
}
