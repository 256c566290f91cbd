//! Integration tests for ingestion (relocated from the lib unit-test module
//! to break the test-support dev-dependency cycle).

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use freshcart_core::error::DomainError;
    use freshcart_test_support::{
        FailingScoreRepository, FixedClock, InMemoryEventRepository, InMemoryScoreRepository,
        fixed_instant,
    };

    use freshcart_engagement::application::ingestion::track_event;
    use freshcart_engagement::domain::commands::TrackEvent;
    use freshcart_engagement::domain::events::{EventKind, WeightTable};
    use freshcart_engagement::repository::EventRepository;

    fn track_command(product_id: Uuid, event_type: &str) -> TrackEvent {
        TrackEvent {
            user_id: "user-1".to_owned(),
            product_id,
            event_type: event_type.to_owned(),
            context: None,
            session_id: None,
            rating: None,
        }
    }

    #[tokio::test]
    async fn test_track_event_persists_event_and_adjusts_score() {
        // Arrange
        let product_id = Uuid::new_v4();
        let weights = WeightTable::default();
        let clock = FixedClock(fixed_instant());
        let events = InMemoryEventRepository::new();
        let scores = InMemoryScoreRepository::new();

        // Act
        let receipt = track_event(
            &track_command(product_id, "favourite"),
            &weights,
            &clock,
            &events,
            &scores,
        )
        .await
        .unwrap();

        // Assert
        assert_eq!(receipt.product_id, product_id);
        assert_eq!(receipt.score, 5);
        assert_eq!(scores.score_of(product_id), Some(5));

        let stored = events.list_all().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].event_id, receipt.event_id);
        assert_eq!(stored[0].kind, EventKind::Favourite);
        assert_eq!(stored[0].weight, 5);
        assert_eq!(stored[0].occurred_at, fixed_instant());
    }

    #[tokio::test]
    async fn test_track_event_sums_weights_across_calls() {
        // Arrange
        let product_id = Uuid::new_v4();
        let other_product = Uuid::new_v4();
        let weights = WeightTable::default();
        let clock = FixedClock(fixed_instant());
        let events = InMemoryEventRepository::new();
        let scores = InMemoryScoreRepository::new();

        // Act — interleave with events for another product.
        for event_type in ["view", "search", "add_to_cart"] {
            track_event(
                &track_command(product_id, event_type),
                &weights,
                &clock,
                &events,
                &scores,
            )
            .await
            .unwrap();
            track_event(
                &track_command(other_product, "purchase"),
                &weights,
                &clock,
                &events,
                &scores,
            )
            .await
            .unwrap();
        }

        // Assert — no cross-contamination between products.
        assert_eq!(scores.score_of(product_id), Some(1 + 2 + 3));
        assert_eq!(scores.score_of(other_product), Some(3 * 7));
    }

    #[tokio::test]
    async fn test_track_event_rejects_unknown_kind_with_no_side_effects() {
        // Arrange
        let product_id = Uuid::new_v4();
        let weights = WeightTable::default();
        let clock = FixedClock(fixed_instant());
        let events = InMemoryEventRepository::new();
        let scores = InMemoryScoreRepository::new();

        // Act
        let result = track_event(
            &track_command(product_id, "checkout"),
            &weights,
            &clock,
            &events,
            &scores,
        )
        .await;

        // Assert
        match result.unwrap_err() {
            DomainError::InvalidEventKind(raw) => assert_eq!(raw, "checkout"),
            other => panic!("expected InvalidEventKind, got {other:?}"),
        }
        assert!(events.list_all().await.unwrap().is_empty());
        assert_eq!(scores.score_of(product_id), None);
    }

    #[tokio::test]
    async fn test_track_event_rejects_kind_absent_from_custom_table() {
        // Arrange — a table that only weighs purchases.
        let product_id = Uuid::new_v4();
        let weights = WeightTable::empty().with_weight(EventKind::Purchase, 7);
        let clock = FixedClock(fixed_instant());
        let events = InMemoryEventRepository::new();
        let scores = InMemoryScoreRepository::new();

        // Act
        let result = track_event(
            &track_command(product_id, "view"),
            &weights,
            &clock,
            &events,
            &scores,
        )
        .await;

        // Assert
        match result.unwrap_err() {
            DomainError::InvalidEventKind(raw) => assert_eq!(raw, "view"),
            other => panic!("expected InvalidEventKind, got {other:?}"),
        }
        assert_eq!(scores.score_of(product_id), None);
    }

    #[tokio::test]
    async fn test_track_event_rejects_out_of_range_rating() {
        // Arrange
        let product_id = Uuid::new_v4();
        let weights = WeightTable::default();
        let clock = FixedClock(fixed_instant());
        let events = InMemoryEventRepository::new();
        let scores = InMemoryScoreRepository::new();

        let mut command = track_command(product_id, "view");
        command.rating = Some(6);

        // Act
        let result = track_event(&command, &weights, &clock, &events, &scores).await;

        // Assert
        assert!(matches!(result.unwrap_err(), DomainError::Validation(_)));
        assert!(events.list_all().await.unwrap().is_empty());
        assert_eq!(scores.score_of(product_id), None);
    }

    #[tokio::test]
    async fn test_track_event_propagates_persistence_failure() {
        // Arrange
        let product_id = Uuid::new_v4();
        let weights = WeightTable::default();
        let clock = FixedClock(fixed_instant());
        let events = InMemoryEventRepository::new();
        let scores = FailingScoreRepository;

        // Act
        let result = track_event(
            &track_command(product_id, "view"),
            &weights,
            &clock,
            &events,
            &scores,
        )
        .await;

        // Assert — fail fast, no local recovery.
        assert!(matches!(result.unwrap_err(), DomainError::Persistence(_)));
        assert!(events.list_all().await.unwrap().is_empty());
    }
}
