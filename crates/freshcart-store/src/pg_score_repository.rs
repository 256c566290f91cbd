//! `PostgreSQL` implementation of the `ScoreRepository` trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use freshcart_core::error::DomainError;
use freshcart_engagement::domain::scores::ProductScore;
use freshcart_engagement::repository::ScoreRepository;

/// PostgreSQL-backed aggregate score repository.
///
/// Score adjustments are single SQL statements, so two concurrent
/// adjustments for the same product serialize at the row level instead of
/// racing a read-modify-write cycle.
#[derive(Debug, Clone)]
pub struct PgScoreRepository {
    pool: PgPool,
}

impl PgScoreRepository {
    /// Creates a new `PgScoreRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ScoreRow {
    product_id: Uuid,
    score: i64,
    created_at: DateTime<Utc>,
}

fn persistence(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}

#[async_trait]
impl ScoreRepository for PgScoreRepository {
    async fn upsert_and_adjust(&self, product_id: Uuid, delta: i64) -> Result<i64, DomainError> {
        let (score,): (i64,) = sqlx::query_as(
            "INSERT INTO product_scores (product_id, score, created_at) \
             VALUES ($1, $2, NOW()) \
             ON CONFLICT (product_id) \
             DO UPDATE SET score = product_scores.score + EXCLUDED.score \
             RETURNING score",
        )
        .bind(product_id)
        .bind(delta)
        .fetch_one(&self.pool)
        .await
        .map_err(persistence)?;

        Ok(score)
    }

    async fn adjust_if_present(
        &self,
        product_id: Uuid,
        delta: i64,
    ) -> Result<Option<i64>, DomainError> {
        let row: Option<(i64,)> = sqlx::query_as(
            "UPDATE product_scores SET score = score + $2 \
             WHERE product_id = $1 \
             RETURNING score",
        )
        .bind(product_id)
        .bind(delta)
        .fetch_optional(&self.pool)
        .await
        .map_err(persistence)?;

        Ok(row.map(|(score,)| score))
    }

    async fn initialize(
        &self,
        product_id: Uuid,
        created_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO product_scores (product_id, score, created_at) \
             VALUES ($1, 0, $2) \
             ON CONFLICT (product_id) DO NOTHING",
        )
        .bind(product_id)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(persistence)?;

        Ok(())
    }

    async fn delete(&self, product_id: Uuid) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM product_scores WHERE product_id = $1")
            .bind(product_id)
            .execute(&self.pool)
            .await
            .map_err(persistence)?;

        Ok(())
    }

    async fn list_ranked(&self) -> Result<Vec<ProductScore>, DomainError> {
        let rows = sqlx::query_as::<_, ScoreRow>(
            "SELECT product_id, score, created_at FROM product_scores \
             ORDER BY score DESC, created_at ASC, product_id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(persistence)?;

        Ok(rows
            .into_iter()
            .map(|row| ProductScore {
                product_id: row.product_id,
                score: row.score,
                created_at: row.created_at,
            })
            .collect())
    }
}
