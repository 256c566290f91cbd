//! Routes for the product catalog.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use uuid::Uuid;

use freshcart_catalog::application::{command_handlers, query_handlers};
use freshcart_catalog::domain::commands::{CreateProduct, UpdateProduct};
use freshcart_catalog::domain::product::{Product, ProductStatus};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a product.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    /// Display title.
    pub title: String,
    /// Longer description.
    #[serde(default)]
    pub description: String,
    /// Unit price.
    pub price: f64,
    /// Category name.
    #[serde(default)]
    pub category: String,
    /// Image URLs.
    #[serde(default)]
    pub photos: Vec<String>,
    /// Units in stock.
    #[serde(default)]
    pub quantity: i32,
    /// Storefront visibility; defaults to active.
    #[serde(default)]
    pub status: Option<ProductStatus>,
}

/// Request body for updating a product's listing fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    /// New display title.
    #[serde(default)]
    pub title: Option<String>,
    /// New description.
    #[serde(default)]
    pub description: Option<String>,
    /// New unit price.
    #[serde(default)]
    pub price: Option<f64>,
    /// New image URLs.
    #[serde(default)]
    pub photos: Option<Vec<String>>,
}

/// Query parameters for product search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Substring to match against titles and descriptions.
    #[serde(default)]
    pub query: String,
}

/// POST /api/v1/products
async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let command = CreateProduct {
        title: body.title,
        description: body.description,
        price: body.price,
        category: body.category,
        photos: body.photos,
        quantity: body.quantity,
        status: body.status,
    };

    let product = command_handlers::handle_create_product(
        &command,
        &*state.clock,
        &*state.products,
        &*state.scores,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/v1/products
async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = query_handlers::list_products(&*state.products).await?;
    Ok(Json(products))
}

/// GET /api/v1/products/search?query=
async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = query_handlers::search_products(&params.query, &*state.products).await?;
    Ok(Json(products))
}

/// GET /api/v1/products/{id}
async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> Result<Json<Product>, ApiError> {
    let product = query_handlers::get_product(product_id, &*state.products).await?;
    Ok(Json(product))
}

/// PUT /api/v1/products/{id}
async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<Json<Product>, ApiError> {
    let command = UpdateProduct {
        product_id,
        title: body.title,
        description: body.description,
        price: body.price,
        photos: body.photos,
    };

    let product = command_handlers::handle_update_product(&command, &*state.products).await?;
    Ok(Json(product))
}

/// DELETE /api/v1/products/{id}
async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    command_handlers::handle_delete_product(
        product_id,
        &*state.products,
        &*state.events,
        &*state.scores,
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Returns the router for the catalog context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_product).get(list_products))
        .route("/search", get(search_products))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}
