//! Storage abstractions for the engagement pipeline.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use freshcart_core::error::DomainError;

use crate::domain::events::{EventKind, InteractionEvent};
use crate::domain::scores::ProductScore;

/// Repository for the append/delete-only interaction event log.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Persists one interaction event.
    async fn insert(&self, event: &InteractionEvent) -> Result<(), DomainError>;

    /// Deletes the most recently recorded event matching the triple and
    /// returns it. Returns `None` when no event matches.
    async fn delete_latest_matching(
        &self,
        user_id: &str,
        product_id: Uuid,
        kind: EventKind,
    ) -> Result<Option<InteractionEvent>, DomainError>;

    /// Deletes every event referencing `product_id`. Returns the number of
    /// rows removed.
    async fn delete_all_for_product(&self, product_id: Uuid) -> Result<u64, DomainError>;

    /// Returns all stored events, oldest first.
    async fn list_all(&self) -> Result<Vec<InteractionEvent>, DomainError>;
}

/// Repository for the per-product aggregate score rows.
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Atomically adds `delta` to the product's score, creating the row at
    /// zero first if it does not exist. Returns the resulting score.
    ///
    /// Atomicity here is what closes the lost-update race between
    /// concurrent adjustments for the same product.
    async fn upsert_and_adjust(&self, product_id: Uuid, delta: i64) -> Result<i64, DomainError>;

    /// Adds `delta` to the product's score if its row exists; a missing row
    /// is a no-op. Returns the resulting score when the row was present.
    async fn adjust_if_present(
        &self,
        product_id: Uuid,
        delta: i64,
    ) -> Result<Option<i64>, DomainError>;

    /// Inserts a zero-score row for a newly created product. An existing
    /// row is left untouched.
    async fn initialize(
        &self,
        product_id: Uuid,
        created_at: DateTime<Utc>,
    ) -> Result<(), DomainError>;

    /// Deletes the score row for `product_id`, if any.
    async fn delete(&self, product_id: Uuid) -> Result<(), DomainError>;

    /// Returns all score rows, highest score first; ties are broken by row
    /// creation order, which is stable within a call.
    async fn list_ranked(&self) -> Result<Vec<ProductScore>, DomainError>;
}

/// Read-only product lookup owned by the catalog collaborator.
///
/// The pipeline never interprets the resolved product beyond passing it
/// through to callers, so the representation is an associated type.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// The resolved product representation.
    type Product: Send + Sync;

    /// Resolves a product by id. `None` means the product no longer exists.
    async fn find_product(&self, product_id: Uuid) -> Result<Option<Self::Product>, DomainError>;
}
