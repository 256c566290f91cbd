//! Command handlers for the product catalog.
//!
//! Creation and deletion orchestrate the engagement lifecycle hooks: every
//! created product gets a zero-value score row, and deleting a product
//! cascades to its score row and interaction events.

use freshcart_core::clock::Clock;
use freshcart_core::error::DomainError;
use uuid::Uuid;

use freshcart_engagement::application::lifecycle;
use freshcart_engagement::repository::{EventRepository, ScoreRepository};

use crate::domain::commands::{CreateProduct, UpdateProduct};
use crate::domain::product::{Product, ProductStatus};
use crate::repository::ProductRepository;

/// Handles `CreateProduct`: validates, persists the product, then
/// initializes its score row.
///
/// # Errors
///
/// Returns `DomainError::Validation` for an empty title or negative price,
/// or `DomainError::Persistence` if either write fails.
pub async fn handle_create_product(
    command: &CreateProduct,
    clock: &dyn Clock,
    products: &dyn ProductRepository,
    scores: &dyn ScoreRepository,
) -> Result<Product, DomainError> {
    if command.title.trim().is_empty() {
        return Err(DomainError::Validation("title must not be empty".into()));
    }
    if command.price < 0.0 {
        return Err(DomainError::Validation(format!(
            "price must not be negative, got {}",
            command.price
        )));
    }

    let product = Product {
        id: Uuid::new_v4(),
        title: command.title.clone(),
        description: command.description.clone(),
        price: command.price,
        category: command.category.clone(),
        photos: command.photos.clone(),
        quantity: command.quantity,
        status: command.status.unwrap_or(ProductStatus::Active),
        created_at: clock.now(),
    };

    products.insert(&product).await?;
    lifecycle::initialize_score(product.id, clock, scores).await?;

    tracing::debug!(product_id = %product.id, title = %product.title, "product created");

    Ok(product)
}

/// Handles `UpdateProduct`: applies the patch to the listing fields.
///
/// The score row is untouched — updates do not reset popularity.
///
/// # Errors
///
/// Returns `DomainError::ProductNotFound` if the product does not exist, or
/// `DomainError::Persistence` if the write fails.
pub async fn handle_update_product(
    command: &UpdateProduct,
    products: &dyn ProductRepository,
) -> Result<Product, DomainError> {
    products
        .update(command)
        .await?
        .ok_or(DomainError::ProductNotFound(command.product_id))
}

/// Handles product deletion: removes the catalog row, then purges the
/// pipeline's score row and interaction events for the product.
///
/// # Errors
///
/// Returns `DomainError::ProductNotFound` if the product does not exist, or
/// `DomainError::Persistence` if any delete fails.
pub async fn handle_delete_product(
    product_id: Uuid,
    products: &dyn ProductRepository,
    events: &dyn EventRepository,
    scores: &dyn ScoreRepository,
) -> Result<(), DomainError> {
    if !products.delete(product_id).await? {
        return Err(DomainError::ProductNotFound(product_id));
    }
    lifecycle::purge_product(product_id, events, scores).await?;

    tracing::debug!(%product_id, "product deleted");

    Ok(())
}
