//! Domain error types.

use thiserror::Error;
use uuid::Uuid;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An event type outside the recognized enumeration was submitted.
    #[error("invalid event kind: {0:?}")]
    InvalidEventKind(String),

    /// No stored interaction event matches the requested triple.
    #[error("no {kind} event found for user {user_id} and product {product_id}")]
    EventNotFound {
        /// The acting user's opaque identifier.
        user_id: String,
        /// The subject product.
        product_id: Uuid,
        /// The event kind that was requested for reversal.
        kind: String,
    },

    /// A product was not found in the catalog.
    #[error("product not found: {0}")]
    ProductNotFound(Uuid),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// An underlying storage operation failed.
    #[error("persistence error: {0}")]
    Persistence(String),
}
