//! Event ingestion — records one interaction and bumps the product score.

use freshcart_core::clock::Clock;
use freshcart_core::error::DomainError;
use uuid::Uuid;

use crate::domain::commands::TrackEvent;
use crate::domain::events::{EventKind, InteractionEvent, WeightTable};
use crate::repository::{EventRepository, ScoreRepository};

/// Identifiers of the records produced by a successful ingestion.
#[derive(Debug, Clone)]
pub struct IngestReceipt {
    /// The persisted event's identifier.
    pub event_id: Uuid,
    /// The product whose score was adjusted.
    pub product_id: Uuid,
    /// The product's score after the adjustment.
    pub score: i64,
}

/// Records one user interaction: resolves the kind's weight, adjusts the
/// product's aggregate score, then persists the event.
///
/// The score adjustment is a single atomic storage operation, so concurrent
/// ingestions for the same product cannot lose updates. The score write and
/// the event write are NOT atomic with each other: a failure between them
/// leaves a score adjustment without its justifying event. Callers must not
/// blindly retry a failed ingestion.
///
/// # Errors
///
/// Returns `DomainError::InvalidEventKind` if `event_type` is not a
/// recognized kind or carries no weight in `weights` (no side effects),
/// `DomainError::Validation` for an out-of-range rating (no side effects),
/// or `DomainError::Persistence` if either write fails.
pub async fn track_event(
    command: &TrackEvent,
    weights: &WeightTable,
    clock: &dyn Clock,
    events: &dyn EventRepository,
    scores: &dyn ScoreRepository,
) -> Result<IngestReceipt, DomainError> {
    let Some(kind) = EventKind::parse(&command.event_type) else {
        return Err(DomainError::InvalidEventKind(command.event_type.clone()));
    };
    let Some(weight) = weights.weight_of(kind) else {
        return Err(DomainError::InvalidEventKind(command.event_type.clone()));
    };

    if command.user_id.is_empty() {
        return Err(DomainError::Validation("userId must not be empty".into()));
    }
    if let Some(rating) = command.rating
        && !(1..=5).contains(&rating)
    {
        return Err(DomainError::Validation(format!(
            "rating must be between 1 and 5, got {rating}"
        )));
    }

    let event = InteractionEvent {
        event_id: Uuid::new_v4(),
        user_id: command.user_id.clone(),
        product_id: command.product_id,
        kind,
        weight,
        occurred_at: clock.now(),
        context: command.context.clone(),
        session_id: command.session_id.clone(),
        rating: command.rating,
    };

    // Aggregate first, then the event log. See the ordering note above.
    let score = scores.upsert_and_adjust(command.product_id, weight).await?;
    events.insert(&event).await?;

    tracing::debug!(
        event_id = %event.event_id,
        product_id = %command.product_id,
        kind = %kind,
        weight,
        score,
        "interaction recorded"
    );

    Ok(IngestReceipt {
        event_id: event.event_id,
        product_id: command.product_id,
        score,
    })
}
