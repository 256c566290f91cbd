//! Ranking query — products ordered by aggregate popularity.

use freshcart_core::error::DomainError;
use uuid::Uuid;

use crate::repository::{ProductSource, ScoreRepository};

/// Returns all products ordered by descending aggregate score, resolved
/// through the catalog collaborator.
///
/// Score rows whose product no longer exists are skipped silently — an
/// orphaned aggregate is a known transient state, not an error. Products
/// listed in `exclude` are dropped from the result (used by callers to hide
/// a user's own recent purchase).
///
/// # Errors
///
/// Returns `DomainError::Persistence` if reading scores or resolving a
/// product fails.
pub async fn ranked_products<S>(
    scores: &dyn ScoreRepository,
    products: &S,
    exclude: &[Uuid],
) -> Result<Vec<S::Product>, DomainError>
where
    S: ProductSource + ?Sized,
{
    let ranked = scores.list_ranked().await?;

    let mut resolved = Vec::with_capacity(ranked.len());
    for entry in ranked {
        if exclude.contains(&entry.product_id) {
            continue;
        }
        if let Some(product) = products.find_product(entry.product_id).await? {
            resolved.push(product);
        }
    }
    Ok(resolved)
}
