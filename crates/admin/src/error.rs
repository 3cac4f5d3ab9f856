//! Unified error handling for the admin engine.
//!
//! Every error here is recoverable: a failed submit leaves the draft
//! untouched, a failed delete leaves the page untouched, and a failed
//! refresh leaves the cache stale-but-valid. Nothing in this engine aborts
//! the process.

use magnolia_core::ProductId;
use thiserror::Error;

use crate::form::ValidationError;
use crate::remote::StoreError;

/// Engine-level error type for the admin product manager.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Remote store operation failed; no local state was changed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Draft failed validation; detected before any network call.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Edit/delete target is absent from the current cache, e.g. it was
    /// deleted concurrently elsewhere.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// A submit or delete was attempted while another one is in flight.
    /// The attempt is rejected with no state change.
    #[error("Another operation is already in progress")]
    Busy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_error_display() {
        let err = AdminError::NotFound(ProductId::new("p-404"));
        assert_eq!(err.to_string(), "Product not found: p-404");

        let err = AdminError::Busy;
        assert_eq!(err.to_string(), "Another operation is already in progress");
    }
}
