//! Catalog products.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Storefront visibility of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Visible and purchasable.
    Active,
    /// Hidden from the storefront.
    Inactive,
}

impl ProductStatus {
    /// Parses the stored representation of a status.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }

    /// Returns the stored representation of this status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// One catalog product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: Uuid,
    /// Display title.
    pub title: String,
    /// Longer description shown on the detail page.
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Category name.
    pub category: String,
    /// Image URLs.
    pub photos: Vec<String>,
    /// Units in stock.
    pub quantity: i32,
    /// Storefront visibility.
    pub status: ProductStatus,
    /// Creation time, set at write.
    pub created_at: DateTime<Utc>,
}
