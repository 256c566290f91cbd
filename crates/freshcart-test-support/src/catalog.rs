//! In-memory and failing doubles for the product catalog.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use freshcart_catalog::domain::commands::UpdateProduct;
use freshcart_catalog::domain::product::Product;
use freshcart_catalog::repository::ProductRepository;
use freshcart_core::error::DomainError;
use freshcart_engagement::repository::ProductSource;

/// A product repository backed by a mutex-guarded vector.
///
/// Also implements the pipeline's [`ProductSource`] seam, resolving to the
/// full [`Product`] record the way the real store does.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: Mutex<Vec<Product>>,
}

impl InMemoryProductRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, product: &Product) -> Result<(), DomainError> {
        self.products.lock().unwrap().push(product.clone());
        Ok(())
    }

    async fn find(&self, product_id: Uuid) -> Result<Option<Product>, DomainError> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == product_id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.products.lock().unwrap().clone())
    }

    async fn update(&self, patch: &UpdateProduct) -> Result<Option<Product>, DomainError> {
        let mut products = self.products.lock().unwrap();
        let Some(product) = products.iter_mut().find(|p| p.id == patch.product_id) else {
            return Ok(None);
        };
        if let Some(title) = &patch.title {
            product.title = title.clone();
        }
        if let Some(description) = &patch.description {
            product.description = description.clone();
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(photos) = &patch.photos {
            product.photos = photos.clone();
        }
        Ok(Some(product.clone()))
    }

    async fn delete(&self, product_id: Uuid) -> Result<bool, DomainError> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != product_id);
        Ok(products.len() < before)
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>, DomainError> {
        let needle = query.to_lowercase();
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ProductSource for InMemoryProductRepository {
    type Product = Product;

    async fn find_product(&self, product_id: Uuid) -> Result<Option<Product>, DomainError> {
        ProductRepository::find(self, product_id).await
    }
}

/// A product repository that always fails with a persistence error.
#[derive(Debug)]
pub struct FailingProductRepository;

#[async_trait]
impl ProductRepository for FailingProductRepository {
    async fn insert(&self, _product: &Product) -> Result<(), DomainError> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn find(&self, _product_id: Uuid) -> Result<Option<Product>, DomainError> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn update(&self, _patch: &UpdateProduct) -> Result<Option<Product>, DomainError> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn delete(&self, _product_id: Uuid) -> Result<bool, DomainError> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn search(&self, _query: &str) -> Result<Vec<Product>, DomainError> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}
