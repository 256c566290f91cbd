//! Integration tests for ranking (relocated from the lib unit-test module
//! to break the test-support dev-dependency cycle).

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use freshcart_test_support::{InMemoryScoreRepository, StaticProductSource, fixed_instant};

    use freshcart_engagement::application::ranking::ranked_products;
    use freshcart_engagement::repository::ScoreRepository;

    async fn seeded_scores(entries: &[(Uuid, i64)]) -> InMemoryScoreRepository {
        let scores = InMemoryScoreRepository::new();
        for (product_id, score) in entries {
            scores.initialize(*product_id, fixed_instant()).await.unwrap();
            scores.adjust_if_present(*product_id, *score).await.unwrap();
        }
        scores
    }

    #[tokio::test]
    async fn test_ranked_products_orders_by_descending_score() {
        // Arrange
        let low = Uuid::new_v4();
        let mid = Uuid::new_v4();
        let high = Uuid::new_v4();
        let scores = seeded_scores(&[(low, 1), (high, 20), (mid, 7)]).await;
        let products = StaticProductSource::new(&[
            (low, "Yogurt"),
            (mid, "Spinach"),
            (high, "Tomatoes"),
        ]);

        // Act
        let ranked = ranked_products(&scores, &products, &[]).await.unwrap();

        // Assert
        assert_eq!(ranked, vec!["Tomatoes", "Spinach", "Yogurt"]);
    }

    #[tokio::test]
    async fn test_ranked_products_skips_orphaned_score_rows() {
        // Arrange — one score row points at a product that was deleted.
        let live = Uuid::new_v4();
        let orphan = Uuid::new_v4();
        let scores = seeded_scores(&[(live, 3), (orphan, 9)]).await;
        let products = StaticProductSource::new(&[(live, "Yogurt")]);

        // Act
        let ranked = ranked_products(&scores, &products, &[]).await.unwrap();

        // Assert — the orphan is absorbed, not surfaced as an error.
        assert_eq!(ranked, vec!["Yogurt"]);
    }

    #[tokio::test]
    async fn test_ranked_products_honors_exclude_set() {
        // Arrange
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let scores = seeded_scores(&[(first, 10), (second, 5)]).await;
        let products =
            StaticProductSource::new(&[(first, "Tomatoes"), (second, "Spinach")]);

        // Act
        let ranked = ranked_products(&scores, &products, &[first]).await.unwrap();

        // Assert
        assert_eq!(ranked, vec!["Spinach"]);
    }

    #[tokio::test]
    async fn test_ranked_products_breaks_ties_by_row_creation_order() {
        // Arrange — equal scores; the earlier-created row wins.
        let older = Uuid::new_v4();
        let newer = Uuid::new_v4();
        let scores = InMemoryScoreRepository::new();
        scores.initialize(older, fixed_instant()).await.unwrap();
        scores
            .initialize(newer, fixed_instant() + chrono::Duration::seconds(1))
            .await
            .unwrap();
        scores.adjust_if_present(older, 4).await.unwrap();
        scores.adjust_if_present(newer, 4).await.unwrap();
        let products = StaticProductSource::new(&[(older, "Yogurt"), (newer, "Spinach")]);

        // Act
        let ranked = ranked_products(&scores, &products, &[]).await.unwrap();

        // Assert
        assert_eq!(ranked, vec!["Yogurt", "Spinach"]);
    }

    #[tokio::test]
    async fn test_ranked_products_returns_empty_for_empty_store() {
        // Arrange
        let scores = InMemoryScoreRepository::new();
        let products = StaticProductSource::new(&[]);

        // Act
        let ranked = ranked_products(&scores, &products, &[]).await.unwrap();

        // Assert
        assert!(ranked.is_empty());
    }
}
