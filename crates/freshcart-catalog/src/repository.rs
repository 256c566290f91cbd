//! Storage abstraction for catalog products.

use async_trait::async_trait;
use uuid::Uuid;

use freshcart_core::error::DomainError;

use crate::domain::commands::UpdateProduct;
use crate::domain::product::Product;

/// Repository for catalog products.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persists a new product.
    async fn insert(&self, product: &Product) -> Result<(), DomainError>;

    /// Looks up a product by id.
    async fn find(&self, product_id: Uuid) -> Result<Option<Product>, DomainError>;

    /// Returns all products, oldest first.
    async fn list(&self) -> Result<Vec<Product>, DomainError>;

    /// Applies the non-`None` fields of `patch` to the product and returns
    /// the updated row, or `None` if the product does not exist.
    async fn update(&self, patch: &UpdateProduct) -> Result<Option<Product>, DomainError>;

    /// Deletes a product. Returns `false` if no row existed.
    async fn delete(&self, product_id: Uuid) -> Result<bool, DomainError>;

    /// Case-insensitive substring search over title and description.
    async fn search(&self, query: &str) -> Result<Vec<Product>, DomainError>;
}
