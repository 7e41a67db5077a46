//! Country-specific address field schemas.
//!
//! The partner application form asks for a region and postal code whose
//! labels and options depend on the selected country. Two countries carry a
//! full schema; every other code gets a generic free-text schema.

mod regions;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub use regions::{CA_PROVINCES, US_STATES};

/// A selectable state, province or territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RegionOption {
    /// Postal abbreviation (e.g., "CA", "ON").
    pub code: &'static str,
    /// Full name.
    pub name: &'static str,
}

impl RegionOption {
    pub const fn new(code: &'static str, name: &'static str) -> Self {
        Self { code, name }
    }
}

/// Labels, options and placeholders for one country's address form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocationFields {
    /// Country code this schema was built for, `None` for the generic schema.
    pub country_code: Option<&'static str>,
    /// Label for the region input.
    pub region_label: &'static str,
    /// Placeholder for the region input.
    pub region_placeholder: &'static str,
    /// Closed list of regions, `None` when the input is free text.
    pub region_options: Option<&'static [RegionOption]>,
    /// Label for the postal code input.
    pub postal_label: &'static str,
    /// Example postal code shown as placeholder.
    pub postal_placeholder: &'static str,
}

const US_FIELDS: LocationFields = LocationFields {
    country_code: Some("US"),
    region_label: "State",
    region_placeholder: "Select a state",
    region_options: Some(US_STATES),
    postal_label: "Zip Code",
    postal_placeholder: "12345",
};

const CA_FIELDS: LocationFields = LocationFields {
    country_code: Some("CA"),
    region_label: "Province / Territory",
    region_placeholder: "Select a province or territory",
    region_options: Some(CA_PROVINCES),
    postal_label: "Postal Code",
    postal_placeholder: "A1A 1A1",
};

const GENERIC_FIELDS: LocationFields = LocationFields {
    country_code: None,
    region_label: "State / Province / Region",
    region_placeholder: "Enter your region",
    region_options: None,
    postal_label: "Postal Code",
    postal_placeholder: "Postal code",
};

/// Countries offered in the country select, as (code, name).
static COUNTRIES: &[(&str, &str)] = &[
    ("US", "United States"),
    ("CA", "Canada"),
    ("GB", "United Kingdom"),
    ("AU", "Australia"),
    ("DE", "Germany"),
    ("FR", "France"),
    ("MX", "Mexico"),
    ("OTHER", "Other"),
];

static US_ZIP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("valid zip pattern"));

static CA_POSTAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]\d[A-Za-z][ -]?\d[A-Za-z]\d$").expect("valid postal pattern")
});

/// Address field schema for a country code.
///
/// Matching is exact: `"US"` gets the US schema, `"us"` does not.
pub fn location_fields(country_code: &str) -> LocationFields {
    match country_code {
        "US" => US_FIELDS,
        "CA" => CA_FIELDS,
        _ => GENERIC_FIELDS,
    }
}

/// Countries offered in the country select, as (code, name).
pub fn supported_countries() -> &'static [(&'static str, &'static str)] {
    COUNTRIES
}

impl LocationFields {
    /// Whether the region is chosen from a closed list.
    pub fn has_region_list(&self) -> bool {
        self.region_options.is_some()
    }

    /// Check a region value against this schema.
    ///
    /// Closed lists accept a code or full name; free text accepts any
    /// non-blank value.
    pub fn accepts_region(&self, value: &str) -> bool {
        let value = value.trim();
        match self.region_options {
            Some(options) => options
                .iter()
                .any(|opt| opt.code == value || opt.name.eq_ignore_ascii_case(value)),
            None => !value.is_empty(),
        }
    }

    /// Check a postal code against this schema.
    pub fn accepts_postal_code(&self, value: &str) -> bool {
        let value = value.trim();
        match self.country_code {
            Some("US") => US_ZIP.is_match(value),
            Some("CA") => CA_POSTAL.is_match(value),
            _ => !value.is_empty(),
        }
    }
}
