//! Routes for the engagement pipeline: track, reverse, and list events.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use freshcart_catalog::domain::product::Product;
use freshcart_engagement::application::{ingestion, listing, reversal};
use freshcart_engagement::domain::commands::{RemoveEvent, TrackEvent};
use freshcart_engagement::domain::events::EventContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for tracking an interaction.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackEventRequest {
    /// Opaque identifier of the acting user.
    pub user_id: String,
    /// The subject product.
    pub product_id: Uuid,
    /// Raw event kind string.
    pub event_type: String,
    /// Optional analytics metadata.
    #[serde(default)]
    pub context: Option<EventContext>,
    /// Optional storefront session identifier.
    #[serde(default)]
    pub session_id: Option<String>,
    /// Optional 1–5 rating.
    #[serde(default)]
    pub rating: Option<i16>,
}

/// Response body for a tracked interaction.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackEventResponse {
    /// Identifier of the persisted event.
    pub event_id: Uuid,
    /// The product whose score was adjusted.
    pub product_id: Uuid,
    /// The product's score after the adjustment.
    pub score: i64,
}

/// Request body for reversing an interaction.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveEventRequest {
    /// Opaque identifier of the acting user.
    pub user_id: String,
    /// The subject product.
    pub product_id: Uuid,
    /// Raw event kind string.
    pub event_type: String,
}

/// Response body for a reversed interaction.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveEventResponse {
    /// Identifier of the removed event.
    pub event_id: Uuid,
    /// The product whose score was adjusted.
    pub product_id: Uuid,
    /// The product's score after the adjustment, if its row still exists.
    pub score: Option<i64>,
}

/// One listed event with its product reference resolved.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventView {
    /// Event identifier.
    pub event_id: Uuid,
    /// Opaque identifier of the acting user.
    pub user_id: String,
    /// The subject product's identifier.
    pub product_id: Uuid,
    /// Interaction category.
    pub event_type: String,
    /// Weight recorded at ingestion time.
    pub weight: i64,
    /// When the interaction was recorded.
    pub occurred_at: DateTime<Utc>,
    /// Analytics metadata, when supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<EventContext>,
    /// Storefront session identifier, when supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Rating, when supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i16>,
    /// The resolved product, or `null` if it has been deleted.
    pub product: Option<Product>,
}

/// POST /api/v1/events
async fn track_event(
    State(state): State<AppState>,
    Json(body): Json<TrackEventRequest>,
) -> Result<(StatusCode, Json<TrackEventResponse>), ApiError> {
    let command = TrackEvent {
        user_id: body.user_id,
        product_id: body.product_id,
        event_type: body.event_type,
        context: body.context,
        session_id: body.session_id,
        rating: body.rating,
    };

    let receipt = ingestion::track_event(
        &command,
        &state.weights,
        &*state.clock,
        &*state.events,
        &*state.scores,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(TrackEventResponse {
            event_id: receipt.event_id,
            product_id: receipt.product_id,
            score: receipt.score,
        }),
    ))
}

/// DELETE /api/v1/events
async fn remove_event(
    State(state): State<AppState>,
    Json(body): Json<RemoveEventRequest>,
) -> Result<Json<RemoveEventResponse>, ApiError> {
    let command = RemoveEvent {
        user_id: body.user_id,
        product_id: body.product_id,
        event_type: body.event_type,
    };

    let receipt = reversal::remove_event(&command, &*state.events, &*state.scores).await?;

    Ok(Json(RemoveEventResponse {
        event_id: receipt.event_id,
        product_id: receipt.product_id,
        score: receipt.score,
    }))
}

/// GET /api/v1/events
async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<EventView>>, ApiError> {
    let resolved = listing::list_events(&*state.events, &*state.products).await?;

    let views = resolved
        .into_iter()
        .map(|entry| EventView {
            event_id: entry.event.event_id,
            user_id: entry.event.user_id,
            product_id: entry.event.product_id,
            event_type: entry.event.kind.to_string(),
            weight: entry.event.weight,
            occurred_at: entry.event.occurred_at,
            context: entry.event.context,
            session_id: entry.event.session_id,
            rating: entry.event.rating,
            product: entry.product,
        })
        .collect();

    Ok(Json(views))
}

/// Returns the router for the engagement context.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        post(track_event).delete(remove_event).get(list_events),
    )
}
