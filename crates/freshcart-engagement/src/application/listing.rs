//! Event listing query — the raw interaction log with product references
//! resolved.

use freshcart_core::error::DomainError;

use crate::domain::events::InteractionEvent;
use crate::repository::{EventRepository, ProductSource};

/// One stored event paired with its resolved product, when it still exists.
///
/// `user_id` stays opaque on the event itself — the user entity belongs to
/// a collaborator outside this system.
#[derive(Debug, Clone)]
pub struct ResolvedEvent<P> {
    /// The stored interaction event.
    pub event: InteractionEvent,
    /// The referenced product, or `None` if it has been deleted.
    pub product: Option<P>,
}

/// Returns every stored event, oldest first, each with its product
/// reference resolved through the catalog collaborator.
///
/// # Errors
///
/// Returns `DomainError::Persistence` if reading events or resolving a
/// product fails.
pub async fn list_events<S>(
    events: &dyn EventRepository,
    products: &S,
) -> Result<Vec<ResolvedEvent<S::Product>>, DomainError>
where
    S: ProductSource + ?Sized,
{
    let stored = events.list_all().await?;

    let mut resolved = Vec::with_capacity(stored.len());
    for event in stored {
        let product = products.find_product(event.product_id).await?;
        resolved.push(ResolvedEvent { event, product });
    }
    Ok(resolved)
}
