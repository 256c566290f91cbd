//! Integration tests for the engagement endpoints.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;
use uuid::Uuid;

fn track_body(user_id: &str, product_id: Uuid, event_type: &str) -> serde_json::Value {
    serde_json::json!({
        "userId": user_id,
        "productId": product_id,
        "eventType": event_type,
    })
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_track_event_returns_201_with_receipt(pool: PgPool) {
    let app = common::build_test_app(pool);
    let product_id = Uuid::new_v4();

    let (status, json) = common::post_json(
        app,
        "/api/v1/events",
        &serde_json::json!({
            "userId": "user-1",
            "productId": product_id,
            "eventType": "favourite",
            "context": {"device": "mobile", "timeOfDay": "evening"},
            "sessionId": "session-42",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(json["eventId"].is_string());
    assert_eq!(json["productId"], serde_json::json!(product_id));
    assert_eq!(json["score"], 5);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_track_event_rejects_unknown_event_type(pool: PgPool) {
    let app = common::build_test_app(pool);

    let (status, json) = common::post_json(
        app.clone(),
        "/api/v1/events",
        &track_body("user-1", Uuid::new_v4(), "checkout"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_event_kind");

    // No event row was written.
    let (_, listed) = common::get_json(app, "/api/v1/events").await;
    assert_eq!(listed, serde_json::json!([]));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_track_then_reverse_restores_score(pool: PgPool) {
    let app = common::build_test_app(pool);
    let product_id = Uuid::new_v4();

    // view (1) + add_to_cart (3) + purchase (7) = 11.
    for event_type in ["view", "add_to_cart", "purchase"] {
        let (status, _) = common::post_json(
            app.clone(),
            "/api/v1/events",
            &track_body("user-1", product_id, event_type),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, json) = common::delete_json(
        app.clone(),
        "/api/v1/events",
        Some(&track_body("user-1", product_id, "add_to_cart")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["score"], 8);

    // Exactly two events remain for the product.
    let (_, listed) = common::get_json(app, "/api/v1/events").await;
    assert_eq!(listed.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_reverse_without_matching_event_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let product_id = Uuid::new_v4();

    let (status, _) = common::post_json(
        app.clone(),
        "/api/v1/events",
        &track_body("user-1", product_id, "view"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, json) = common::delete_json(
        app.clone(),
        "/api/v1/events",
        Some(&track_body("user-1", product_id, "purchase")),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "event_not_found");

    // The recorded view is untouched.
    let (_, listed) = common::get_json(app, "/api/v1/events").await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_events_resolves_product_references(pool: PgPool) {
    let app = common::build_test_app(pool);

    // One event against a real product, one against a deleted-product id.
    let (status, product) = common::post_json(
        app.clone(),
        "/api/v1/products",
        &serde_json::json!({"title": "Yogurt", "price": 40.0}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let product_id: Uuid = serde_json::from_value(product["id"].clone()).unwrap();
    let orphan_id = Uuid::new_v4();

    for pid in [product_id, orphan_id] {
        common::post_json(
            app.clone(),
            "/api/v1/events",
            &track_body("user-1", pid, "view"),
        )
        .await;
    }

    let (status, listed) = common::get_json(app, "/api/v1/events").await;

    assert_eq!(status, StatusCode::OK);
    let events = listed.as_array().unwrap();
    assert_eq!(events.len(), 2);

    let resolved = events
        .iter()
        .find(|e| e["productId"] == serde_json::json!(product_id))
        .unwrap();
    assert_eq!(resolved["product"]["title"], "Yogurt");
    assert_eq!(resolved["eventType"], "view");
    assert_eq!(resolved["weight"], 1);
    assert_eq!(resolved["userId"], "user-1");

    let orphaned = events
        .iter()
        .find(|e| e["productId"] == serde_json::json!(orphan_id))
        .unwrap();
    assert_eq!(orphaned["product"], serde_json::Value::Null);
}
