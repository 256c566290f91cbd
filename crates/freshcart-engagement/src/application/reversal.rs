//! Event reversal — undoes one recorded interaction.

use freshcart_core::error::DomainError;
use uuid::Uuid;

use crate::domain::commands::RemoveEvent;
use crate::domain::events::EventKind;
use crate::repository::{EventRepository, ScoreRepository};

/// Outcome of a successful reversal.
#[derive(Debug, Clone)]
pub struct RemovalReceipt {
    /// The removed event's identifier.
    pub event_id: Uuid,
    /// The product whose score was adjusted.
    pub product_id: Uuid,
    /// The product's score after the adjustment, when its row still exists.
    pub score: Option<i64>,
}

/// Removes the most recently recorded event matching the command's
/// (`user_id`, `product_id`, `event_type`) triple and subtracts the weight
/// stored on that event from the product's score.
///
/// The subtracted weight is the one denormalized onto the event at
/// ingestion time, so reversal always undoes exactly what ingestion added.
/// A missing score row makes the subtraction a no-op; an existing score may
/// go negative under unmatched reversals and is not clamped.
///
/// # Errors
///
/// Returns `DomainError::InvalidEventKind` if `event_type` is not a
/// recognized kind, `DomainError::EventNotFound` if no stored event matches
/// the triple (no side effects), or `DomainError::Persistence` if a storage
/// operation fails.
pub async fn remove_event(
    command: &RemoveEvent,
    events: &dyn EventRepository,
    scores: &dyn ScoreRepository,
) -> Result<RemovalReceipt, DomainError> {
    let Some(kind) = EventKind::parse(&command.event_type) else {
        return Err(DomainError::InvalidEventKind(command.event_type.clone()));
    };

    let removed = events
        .delete_latest_matching(&command.user_id, command.product_id, kind)
        .await?
        .ok_or_else(|| DomainError::EventNotFound {
            user_id: command.user_id.clone(),
            product_id: command.product_id,
            kind: kind.to_string(),
        })?;

    let score = scores
        .adjust_if_present(command.product_id, -removed.weight)
        .await?;

    tracing::debug!(
        event_id = %removed.event_id,
        product_id = %command.product_id,
        kind = %kind,
        weight = removed.weight,
        "interaction reversed"
    );

    Ok(RemovalReceipt {
        event_id: removed.event_id,
        product_id: command.product_id,
        score,
    })
}
