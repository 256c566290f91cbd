//! In-memory and failing doubles for the engagement pipeline's stores.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use freshcart_core::error::DomainError;
use freshcart_engagement::domain::events::{EventKind, InteractionEvent};
use freshcart_engagement::domain::scores::ProductScore;
use freshcart_engagement::repository::{EventRepository, ProductSource, ScoreRepository};

/// An event repository backed by a mutex-guarded vector, preserving
/// insertion order.
#[derive(Debug, Default)]
pub struct InMemoryEventRepository {
    events: Mutex<Vec<InteractionEvent>>,
}

impl InMemoryEventRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn insert(&self, event: &InteractionEvent) -> Result<(), DomainError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }

    async fn delete_latest_matching(
        &self,
        user_id: &str,
        product_id: Uuid,
        kind: EventKind,
    ) -> Result<Option<InteractionEvent>, DomainError> {
        let mut events = self.events.lock().unwrap();
        let latest = events
            .iter()
            .enumerate()
            .filter(|(_, e)| {
                e.user_id == user_id && e.product_id == product_id && e.kind == kind
            })
            .max_by_key(|(index, e)| (e.occurred_at, *index))
            .map(|(index, _)| index);
        Ok(latest.map(|index| events.remove(index)))
    }

    async fn delete_all_for_product(&self, product_id: Uuid) -> Result<u64, DomainError> {
        let mut events = self.events.lock().unwrap();
        let before = events.len();
        events.retain(|e| e.product_id != product_id);
        Ok((before - events.len()) as u64)
    }

    async fn list_all(&self) -> Result<Vec<InteractionEvent>, DomainError> {
        Ok(self.events.lock().unwrap().clone())
    }
}

/// A score repository backed by a mutex-guarded vector, preserving row
/// creation order so ranking ties resolve the way the real store's
/// `created_at` tie-break does.
#[derive(Debug, Default)]
pub struct InMemoryScoreRepository {
    rows: Mutex<Vec<ProductScore>>,
}

impl InMemoryScoreRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current score for a product, if its row exists.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn score_of(&self, product_id: Uuid) -> Option<i64> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.product_id == product_id)
            .map(|row| row.score)
    }
}

#[async_trait]
impl ScoreRepository for InMemoryScoreRepository {
    async fn upsert_and_adjust(&self, product_id: Uuid, delta: i64) -> Result<i64, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|row| row.product_id == product_id) {
            row.score += delta;
            return Ok(row.score);
        }
        rows.push(ProductScore {
            product_id,
            score: delta,
            created_at: Utc::now(),
        });
        Ok(delta)
    }

    async fn adjust_if_present(
        &self,
        product_id: Uuid,
        delta: i64,
    ) -> Result<Option<i64>, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows
            .iter_mut()
            .find(|row| row.product_id == product_id)
            .map(|row| {
                row.score += delta;
                row.score
            }))
    }

    async fn initialize(
        &self,
        product_id: Uuid,
        created_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().all(|row| row.product_id != product_id) {
            rows.push(ProductScore {
                product_id,
                score: 0,
                created_at,
            });
        }
        Ok(())
    }

    async fn delete(&self, product_id: Uuid) -> Result<(), DomainError> {
        self.rows
            .lock()
            .unwrap()
            .retain(|row| row.product_id != product_id);
        Ok(())
    }

    async fn list_ranked(&self) -> Result<Vec<ProductScore>, DomainError> {
        let mut rows = self.rows.lock().unwrap().clone();
        // Stable sort: equal scores keep row creation order.
        rows.sort_by_key(|row| std::cmp::Reverse(row.score));
        Ok(rows)
    }
}

/// An event repository that always fails with a persistence error.
#[derive(Debug)]
pub struct FailingEventRepository;

#[async_trait]
impl EventRepository for FailingEventRepository {
    async fn insert(&self, _event: &InteractionEvent) -> Result<(), DomainError> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn delete_latest_matching(
        &self,
        _user_id: &str,
        _product_id: Uuid,
        _kind: EventKind,
    ) -> Result<Option<InteractionEvent>, DomainError> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn delete_all_for_product(&self, _product_id: Uuid) -> Result<u64, DomainError> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn list_all(&self) -> Result<Vec<InteractionEvent>, DomainError> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}

/// A score repository that always fails with a persistence error.
#[derive(Debug)]
pub struct FailingScoreRepository;

#[async_trait]
impl ScoreRepository for FailingScoreRepository {
    async fn upsert_and_adjust(&self, _product_id: Uuid, _delta: i64) -> Result<i64, DomainError> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn adjust_if_present(
        &self,
        _product_id: Uuid,
        _delta: i64,
    ) -> Result<Option<i64>, DomainError> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn initialize(
        &self,
        _product_id: Uuid,
        _created_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn delete(&self, _product_id: Uuid) -> Result<(), DomainError> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn list_ranked(&self) -> Result<Vec<ProductScore>, DomainError> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}

/// A product source over a fixed id → name mapping. The resolved product is
/// just the name, which keeps pipeline tests independent of the catalog.
#[derive(Debug, Default)]
pub struct StaticProductSource {
    names: BTreeMap<Uuid, String>,
}

impl StaticProductSource {
    /// Creates a source resolving exactly the given entries.
    #[must_use]
    pub fn new(entries: &[(Uuid, &str)]) -> Self {
        Self {
            names: entries
                .iter()
                .map(|(id, name)| (*id, (*name).to_owned()))
                .collect(),
        }
    }
}

#[async_trait]
impl ProductSource for StaticProductSource {
    type Product = String;

    async fn find_product(&self, product_id: Uuid) -> Result<Option<String>, DomainError> {
        Ok(self.names.get(&product_id).cloned())
    }
}
