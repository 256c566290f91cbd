//! `PostgreSQL` implementation of the `EventRepository` trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use freshcart_core::error::DomainError;
use freshcart_engagement::domain::events::{EventContext, EventKind, InteractionEvent};
use freshcart_engagement::repository::EventRepository;

const EVENT_COLUMNS: &str =
    "event_id, user_id, product_id, event_type, weight, occurred_at, context, session_id, rating";

/// PostgreSQL-backed interaction event repository.
#[derive(Debug, Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Creates a new `PgEventRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct EventRow {
    event_id: Uuid,
    user_id: String,
    product_id: Uuid,
    event_type: String,
    weight: i64,
    occurred_at: DateTime<Utc>,
    context: Option<serde_json::Value>,
    session_id: Option<String>,
    rating: Option<i16>,
}

impl EventRow {
    fn into_domain(self) -> Result<InteractionEvent, DomainError> {
        let kind = EventKind::parse(&self.event_type).ok_or_else(|| {
            DomainError::Persistence(format!(
                "stored event {} has unrecognized event_type {:?}",
                self.event_id, self.event_type
            ))
        })?;
        let context: Option<EventContext> = self
            .context
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| {
                DomainError::Persistence(format!(
                    "stored event {} has malformed context: {e}",
                    self.event_id
                ))
            })?;
        Ok(InteractionEvent {
            event_id: self.event_id,
            user_id: self.user_id,
            product_id: self.product_id,
            kind,
            weight: self.weight,
            occurred_at: self.occurred_at,
            context,
            session_id: self.session_id,
            rating: self.rating,
        })
    }
}

fn persistence(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn insert(&self, event: &InteractionEvent) -> Result<(), DomainError> {
        let context = event
            .context
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| DomainError::Persistence(format!("context serialization failed: {e}")))?;

        sqlx::query(
            "INSERT INTO events \
             (event_id, user_id, product_id, event_type, weight, occurred_at, context, session_id, rating) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(event.event_id)
        .bind(&event.user_id)
        .bind(event.product_id)
        .bind(event.kind.as_str())
        .bind(event.weight)
        .bind(event.occurred_at)
        .bind(context)
        .bind(&event.session_id)
        .bind(event.rating)
        .execute(&self.pool)
        .await
        .map_err(persistence)?;

        Ok(())
    }

    async fn delete_latest_matching(
        &self,
        user_id: &str,
        product_id: Uuid,
        kind: EventKind,
    ) -> Result<Option<InteractionEvent>, DomainError> {
        let sql = format!(
            "DELETE FROM events WHERE event_id = ( \
                 SELECT event_id FROM events \
                 WHERE user_id = $1 AND product_id = $2 AND event_type = $3 \
                 ORDER BY occurred_at DESC \
                 LIMIT 1 \
             ) RETURNING {EVENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, EventRow>(&sql)
            .bind(user_id)
            .bind(product_id)
            .bind(kind.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(persistence)?;

        row.map(EventRow::into_domain).transpose()
    }

    async fn delete_all_for_product(&self, product_id: Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM events WHERE product_id = $1")
            .bind(product_id)
            .execute(&self.pool)
            .await
            .map_err(persistence)?;

        tracing::debug!(%product_id, removed = result.rows_affected(), "bulk-deleted events");

        Ok(result.rows_affected())
    }

    async fn list_all(&self) -> Result<Vec<InteractionEvent>, DomainError> {
        let sql = format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY occurred_at ASC, event_id ASC");
        let rows = sqlx::query_as::<_, EventRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(persistence)?;

        rows.into_iter().map(EventRow::into_domain).collect()
    }
}
