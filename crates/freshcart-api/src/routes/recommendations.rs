//! Recommendation endpoint — products ranked by aggregate popularity.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use uuid::Uuid;

use freshcart_catalog::domain::product::Product;
use freshcart_core::error::DomainError;
use freshcart_engagement::application::ranking;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for the recommendation endpoint.
#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    /// Comma-separated product ids to drop from the result.
    #[serde(default)]
    pub exclude: String,
}

fn parse_exclude(raw: &str) -> Result<Vec<Uuid>, DomainError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            Uuid::parse_str(part)
                .map_err(|_| DomainError::Validation(format!("invalid product id: {part:?}")))
        })
        .collect()
}

/// GET /api/v1/recommendations?exclude=
async fn recommendations(
    State(state): State<AppState>,
    Query(params): Query<RecommendationParams>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let exclude = parse_exclude(&params.exclude)?;

    let ranked = ranking::ranked_products(&*state.scores, &*state.products, &exclude).await?;

    Ok(Json(ranked))
}

/// Returns the router for the recommendation context.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(recommendations))
}
