//! Query handlers for the product catalog.

use freshcart_core::error::DomainError;
use uuid::Uuid;

use crate::domain::product::Product;
use crate::repository::ProductRepository;

/// Retrieves a product by id.
///
/// # Errors
///
/// Returns `DomainError::ProductNotFound` if no product exists with the id,
/// or `DomainError::Persistence` if the read fails.
pub async fn get_product(
    product_id: Uuid,
    products: &dyn ProductRepository,
) -> Result<Product, DomainError> {
    products
        .find(product_id)
        .await?
        .ok_or(DomainError::ProductNotFound(product_id))
}

/// Returns all catalog products, oldest first.
///
/// # Errors
///
/// Returns `DomainError::Persistence` if the read fails.
pub async fn list_products(products: &dyn ProductRepository) -> Result<Vec<Product>, DomainError> {
    products.list().await
}

/// Case-insensitive substring search over titles and descriptions.
///
/// # Errors
///
/// Returns `DomainError::Validation` for an empty query, or
/// `DomainError::Persistence` if the read fails.
pub async fn search_products(
    query: &str,
    products: &dyn ProductRepository,
) -> Result<Vec<Product>, DomainError> {
    if query.trim().is_empty() {
        return Err(DomainError::Validation(
            "search query is required".into(),
        ));
    }
    products.search(query).await
}
