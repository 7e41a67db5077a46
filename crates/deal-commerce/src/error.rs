//! Commerce error types.

use thiserror::Error;

/// Errors that can occur when reading the catalog.
///
/// Lookup helpers never produce these: an unknown category or country falls
/// back to a default value instead.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Deal not found.
    #[error("Deal not found: {0}")]
    DealNotFound(String),

    /// Seller not found.
    #[error("Seller not found: {0}")]
    SellerNotFound(String),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Validation error on a submitted form.
    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CommerceError {
    /// Create a validation error for a form field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CommerceError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CommerceError::DealNotFound(_)
                | CommerceError::SellerNotFound(_)
                | CommerceError::CategoryNotFound(_)
        )
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
