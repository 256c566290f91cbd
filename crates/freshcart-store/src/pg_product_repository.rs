//! `PostgreSQL` implementation of the catalog's `ProductRepository` trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use freshcart_catalog::domain::commands::UpdateProduct;
use freshcart_catalog::domain::product::{Product, ProductStatus};
use freshcart_catalog::repository::ProductRepository;
use freshcart_core::error::DomainError;
use freshcart_engagement::repository::ProductSource;

const PRODUCT_COLUMNS: &str =
    "id, title, description, price, category, photos, quantity, status, created_at";

/// PostgreSQL-backed product repository.
#[derive(Debug, Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    /// Creates a new `PgProductRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    title: String,
    description: String,
    price: f64,
    category: String,
    photos: Vec<String>,
    quantity: i32,
    status: String,
    created_at: DateTime<Utc>,
}

impl ProductRow {
    fn into_domain(self) -> Result<Product, DomainError> {
        let status = ProductStatus::parse(&self.status).ok_or_else(|| {
            DomainError::Persistence(format!(
                "stored product {} has unrecognized status {:?}",
                self.id, self.status
            ))
        })?;
        Ok(Product {
            id: self.id,
            title: self.title,
            description: self.description,
            price: self.price,
            category: self.category,
            photos: self.photos,
            quantity: self.quantity,
            status,
            created_at: self.created_at,
        })
    }
}

fn persistence(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn insert(&self, product: &Product) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO products \
             (id, title, description, price, category, photos, quantity, status, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(product.id)
        .bind(&product.title)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.category)
        .bind(&product.photos)
        .bind(product.quantity)
        .bind(product.status.as_str())
        .bind(product.created_at)
        .execute(&self.pool)
        .await
        .map_err(persistence)?;

        Ok(())
    }

    async fn find(&self, product_id: Uuid) -> Result<Option<Product>, DomainError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(product_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(persistence)?;

        row.map(ProductRow::into_domain).transpose()
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at ASC, id ASC");
        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(persistence)?;

        rows.into_iter().map(ProductRow::into_domain).collect()
    }

    async fn update(&self, patch: &UpdateProduct) -> Result<Option<Product>, DomainError> {
        let sql = format!(
            "UPDATE products SET \
                 title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 price = COALESCE($4, price), \
                 photos = COALESCE($5, photos) \
             WHERE id = $1 \
             RETURNING {PRODUCT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(patch.product_id)
            .bind(&patch.title)
            .bind(&patch.description)
            .bind(patch.price)
            .bind(&patch.photos)
            .fetch_optional(&self.pool)
            .await
            .map_err(persistence)?;

        row.map(ProductRow::into_domain).transpose()
    }

    async fn delete(&self, product_id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(product_id)
            .execute(&self.pool)
            .await
            .map_err(persistence)?;

        Ok(result.rows_affected() > 0)
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>, DomainError> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE title ILIKE '%' || $1 || '%' OR description ILIKE '%' || $1 || '%' \
             ORDER BY created_at ASC, id ASC"
        );
        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(query)
            .fetch_all(&self.pool)
            .await
            .map_err(persistence)?;

        rows.into_iter().map(ProductRow::into_domain).collect()
    }
}

#[async_trait]
impl ProductSource for PgProductRepository {
    type Product = Product;

    async fn find_product(&self, product_id: Uuid) -> Result<Option<Product>, DomainError> {
        ProductRepository::find(self, product_id).await
    }
}
