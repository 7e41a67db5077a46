//! Partner program applications.
//!
//! Applications are only validated locally; nothing is submitted anywhere.

use serde::{Deserialize, Serialize};

use crate::address::location_fields;
use crate::error::CommerceError;

/// A seller's application to join the partner program.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartnerApplication {
    pub business_name: String,
    pub contact_name: String,
    pub email: String,
    #[serde(default)]
    pub website: Option<String>,
    /// Country code as chosen in the country select.
    pub country_code: String,
    /// State, province or free-text region.
    pub region: String,
    pub postal_code: String,
    /// Primary category the seller would list under.
    pub category: String,
}

impl PartnerApplication {
    /// Check every field, reporting the first problem found.
    pub fn validate(&self) -> Result<(), CommerceError> {
        require("business_name", &self.business_name)?;
        require("contact_name", &self.contact_name)?;
        validate_email(&self.email)?;
        if let Some(website) = self.website.as_deref().filter(|w| !w.trim().is_empty()) {
            if !(website.starts_with("http://") || website.starts_with("https://")) {
                return Err(CommerceError::validation(
                    "website",
                    "must start with http:// or https://",
                ));
            }
        }
        require("country_code", &self.country_code)?;

        let fields = location_fields(&self.country_code);
        if !fields.accepts_region(&self.region) {
            return Err(CommerceError::validation(
                "region",
                format!("enter a valid {}", fields.region_label.to_lowercase()),
            ));
        }
        if !fields.accepts_postal_code(&self.postal_code) {
            return Err(CommerceError::validation(
                "postal_code",
                format!("enter a valid {}", fields.postal_label.to_lowercase()),
            ));
        }
        require("category", &self.category)
    }
}

/// Check an email address the way every storefront form does.
pub fn validate_email(email: &str) -> Result<(), CommerceError> {
    require("email", email)?;
    if looks_like_email(email) {
        Ok(())
    } else {
        Err(CommerceError::validation("email", "enter a valid email address"))
    }
}

fn require(field: &str, value: &str) -> Result<(), CommerceError> {
    if value.trim().is_empty() {
        Err(CommerceError::validation(field, "is required"))
    } else {
        Ok(())
    }
}

fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_us() -> PartnerApplication {
        PartnerApplication {
            business_name: "Peak Gear".to_string(),
            contact_name: "Sam Rivera".to_string(),
            email: "sam@peakgear.example.com".to_string(),
            website: Some("https://peakgear.example.com".to_string()),
            country_code: "US".to_string(),
            region: "CO".to_string(),
            postal_code: "80202".to_string(),
            category: "Sports & Outdoors".to_string(),
        }
    }

    fn field_of(err: CommerceError) -> String {
        match err {
            CommerceError::Validation { field, .. } => field,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_valid_application() {
        assert!(valid_us().validate().is_ok());
    }

    #[test]
    fn test_required_fields() {
        let mut app = valid_us();
        app.business_name = "  ".to_string();
        assert_eq!(field_of(app.validate().unwrap_err()), "business_name");
    }

    #[test]
    fn test_invalid_email() {
        let mut app = valid_us();
        app.email = "sam.example.com".to_string();
        assert_eq!(field_of(app.validate().unwrap_err()), "email");
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.co").is_ok());
        assert_eq!(field_of(validate_email("").unwrap_err()), "email");
        assert_eq!(field_of(validate_email("a@b.").unwrap_err()), "email");
    }

    #[test]
    fn test_invalid_website() {
        let mut app = valid_us();
        app.website = Some("peakgear.example.com".to_string());
        assert_eq!(field_of(app.validate().unwrap_err()), "website");

        app.website = Some(String::new());
        assert!(app.validate().is_ok());
    }

    #[test]
    fn test_region_checked_against_country() {
        let mut app = valid_us();
        app.region = "Ontario".to_string();
        assert_eq!(field_of(app.validate().unwrap_err()), "region");
    }

    #[test]
    fn test_postal_code_checked_against_country() {
        let mut app = valid_us();
        app.postal_code = "K1A 0B1".to_string();
        let err = app.validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation error on postal_code: enter a valid zip code");
    }

    #[test]
    fn test_generic_country_accepts_free_text() {
        let mut app = valid_us();
        app.country_code = "GB".to_string();
        app.region = "Greater London".to_string();
        app.postal_code = "SW1A 1AA".to_string();
        assert!(app.validate().is_ok());
    }
}
