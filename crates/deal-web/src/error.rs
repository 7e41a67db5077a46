//! Error types for the storefront web layer.

use deal_commerce::CommerceError;
use deal_core::ConfigError;
use deal_observability::ObservabilityError;
use thiserror::Error;

/// Errors that can occur while rendering the storefront.
#[derive(Error, Debug)]
pub enum WebError {
    /// A route parameter did not resolve to a catalog record.
    #[error("{kind} not found: {key}")]
    NotFound { kind: &'static str, key: String },

    /// Catalog lookup failed.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// Embedded site configuration is invalid.
    #[error("Site configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be set up.
    #[error(transparent)]
    Observability(#[from] ObservabilityError),

    /// The SSR handler failed.
    #[error("Server error: {0}")]
    Server(String),
}

impl WebError {
    pub fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            key: key.into(),
        }
    }

    /// Whether the page should render its not-found view.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Commerce(err) => err.is_not_found(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = WebError::not_found("Category", "widgets");
        assert_eq!(err.to_string(), "Category not found: widgets");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_commerce_misses_are_not_found() {
        let err = WebError::from(CommerceError::SellerNotFound("acme".into()));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Seller not found: acme");

        let err = WebError::from(CommerceError::validation("email", "is required"));
        assert!(!err.is_not_found());
    }
}
