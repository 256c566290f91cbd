//! Product lifecycle hooks invoked by the catalog collaborator.

use freshcart_core::clock::Clock;
use freshcart_core::error::DomainError;
use uuid::Uuid;

use crate::repository::{EventRepository, ScoreRepository};

/// What a product purge removed.
#[derive(Debug, Clone, Copy)]
pub struct PurgeSummary {
    /// Number of interaction events deleted.
    pub events_removed: u64,
}

/// Creates the zero-value score row for a newly created product.
///
/// Idempotent: an already existing row is left untouched, so the
/// creation-order race between product creation and a first interaction
/// resolves harmlessly either way.
///
/// # Errors
///
/// Returns `DomainError::Persistence` if the write fails.
pub async fn initialize_score(
    product_id: Uuid,
    clock: &dyn Clock,
    scores: &dyn ScoreRepository,
) -> Result<(), DomainError> {
    scores.initialize(product_id, clock.now()).await
}

/// Removes everything the pipeline holds for a deleted product: its score
/// row and every interaction event referencing it.
///
/// # Errors
///
/// Returns `DomainError::Persistence` if either delete fails.
pub async fn purge_product(
    product_id: Uuid,
    events: &dyn EventRepository,
    scores: &dyn ScoreRepository,
) -> Result<PurgeSummary, DomainError> {
    scores.delete(product_id).await?;
    let events_removed = events.delete_all_for_product(product_id).await?;

    tracing::debug!(%product_id, events_removed, "product purged from pipeline");

    Ok(PurgeSummary { events_removed })
}
