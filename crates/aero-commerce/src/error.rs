//! Commerce error types.

use thiserror::Error;

/// Errors that can occur around the cart.
///
/// Cart mutations themselves never fail; these surface from the catalog and
/// from callers that validate input before touching the cart.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the menu.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product exists but is not currently offered.
    #[error("Product unavailable: {0}")]
    ProductUnavailable(String),

    /// Unrecognized delivery mode.
    #[error("Invalid delivery mode: {0} (expected DELIVERY or PICKUP)")]
    InvalidDeliveryMode(String),

    /// Cache error.
    #[error("Cache error: {0}")]
    CacheError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<aero_cache::CacheError> for CommerceError {
    fn from(e: aero_cache::CacheError) -> Self {
        CommerceError::CacheError(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
