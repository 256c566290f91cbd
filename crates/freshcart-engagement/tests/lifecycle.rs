//! Integration tests for lifecycle (relocated from the lib unit-test module
//! to break the test-support dev-dependency cycle).

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use freshcart_test_support::{
        FixedClock, InMemoryEventRepository, InMemoryScoreRepository, StaticProductSource,
        fixed_instant,
    };

    use freshcart_engagement::application::ingestion::track_event;
    use freshcart_engagement::application::lifecycle::{initialize_score, purge_product};
    use freshcart_engagement::application::ranking::ranked_products;
    use freshcart_engagement::domain::commands::TrackEvent;
    use freshcart_engagement::domain::events::WeightTable;
    use freshcart_engagement::repository::{EventRepository, ScoreRepository};

    #[tokio::test]
    async fn test_initialize_score_creates_zero_row() {
        // Arrange
        let product_id = Uuid::new_v4();
        let clock = FixedClock(fixed_instant());
        let scores = InMemoryScoreRepository::new();

        // Act
        initialize_score(product_id, &clock, &scores).await.unwrap();

        // Assert
        assert_eq!(scores.score_of(product_id), Some(0));
    }

    #[tokio::test]
    async fn test_initialize_score_preserves_existing_row() {
        // Arrange — a first interaction already created the row at 3.
        let product_id = Uuid::new_v4();
        let clock = FixedClock(fixed_instant());
        let scores = InMemoryScoreRepository::new();
        scores.upsert_and_adjust(product_id, 3).await.unwrap();

        // Act
        initialize_score(product_id, &clock, &scores).await.unwrap();

        // Assert
        assert_eq!(scores.score_of(product_id), Some(3));
    }

    #[tokio::test]
    async fn test_purge_product_removes_score_and_events() {
        // Arrange
        let product_id = Uuid::new_v4();
        let survivor = Uuid::new_v4();
        let clock = FixedClock(fixed_instant());
        let events = InMemoryEventRepository::new();
        let scores = InMemoryScoreRepository::new();

        for (pid, event_type) in [
            (product_id, "view"),
            (product_id, "purchase"),
            (survivor, "view"),
        ] {
            track_event(
                &TrackEvent {
                    user_id: "user-1".to_owned(),
                    product_id: pid,
                    event_type: event_type.to_owned(),
                    context: None,
                    session_id: None,
                    rating: None,
                },
                &WeightTable::default(),
                &clock,
                &events,
                &scores,
            )
            .await
            .unwrap();
        }

        // Act
        let summary = purge_product(product_id, &events, &scores).await.unwrap();

        // Assert — only the survivor's records remain.
        assert_eq!(summary.events_removed, 2);
        assert_eq!(scores.score_of(product_id), None);
        assert_eq!(scores.score_of(survivor), Some(1));

        let remaining = events.list_all().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].product_id, survivor);

        // Ranking never references the purged product again.
        let products = StaticProductSource::new(&[(survivor, "Yogurt")]);
        let ranked = ranked_products(&scores, &products, &[]).await.unwrap();
        assert_eq!(ranked, vec!["Yogurt"]);
    }

    #[tokio::test]
    async fn test_purge_product_with_no_records_is_a_noop() {
        // Arrange
        let events = InMemoryEventRepository::new();
        let scores = InMemoryScoreRepository::new();

        // Act
        let summary = purge_product(Uuid::new_v4(), &events, &scores)
            .await
            .unwrap();

        // Assert
        assert_eq!(summary.events_removed, 0);
    }
}
