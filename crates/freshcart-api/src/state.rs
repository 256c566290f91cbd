//! Shared application state.

use std::sync::Arc;

use sqlx::PgPool;

use freshcart_core::clock::Clock;
use freshcart_engagement::domain::events::WeightTable;
use freshcart_store::pg_event_repository::PgEventRepository;
use freshcart_store::pg_product_repository::PgProductRepository;
use freshcart_store::pg_score_repository::PgScoreRepository;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Clock used for all persisted timestamps.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// The immutable event-weight configuration.
    pub weights: WeightTable,
    /// Interaction event repository.
    pub events: Arc<PgEventRepository>,
    /// Aggregate score repository.
    pub scores: Arc<PgScoreRepository>,
    /// Product repository.
    pub products: Arc<PgProductRepository>,
}

impl AppState {
    /// Create new application state over a connection pool.
    #[must_use]
    pub fn new(db_pool: PgPool, clock: Arc<dyn Clock + Send + Sync>, weights: WeightTable) -> Self {
        let events = Arc::new(PgEventRepository::new(db_pool.clone()));
        let scores = Arc::new(PgScoreRepository::new(db_pool.clone()));
        let products = Arc::new(PgProductRepository::new(db_pool.clone()));
        Self {
            db_pool,
            clock,
            weights,
            events,
            scores,
            products,
        }
    }
}
