//! Commands for the product catalog.

use uuid::Uuid;

use super::product::ProductStatus;

/// Command to create a catalog product.
#[derive(Debug, Clone)]
pub struct CreateProduct {
    /// Display title.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Category name.
    pub category: String,
    /// Image URLs.
    pub photos: Vec<String>,
    /// Units in stock.
    pub quantity: i32,
    /// Storefront visibility; defaults to active when absent.
    pub status: Option<ProductStatus>,
}

/// Command to update a product's listing fields.
///
/// Only the fields the storefront edit form exposes are updatable; `None`
/// leaves a field unchanged.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    /// The product to update.
    pub product_id: Uuid,
    /// New display title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New unit price.
    pub price: Option<f64>,
    /// New image URLs.
    pub photos: Option<Vec<String>>,
}
