//! Per-product aggregate popularity scores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The running popularity counter for one product.
///
/// At any quiescent point the score equals the sum of the weights of all
/// non-reversed events referencing the product. Unmatched reversals may
/// drive the score negative; that is accepted behavior, not clamped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductScore {
    /// The product this score belongs to. Unique per row.
    pub product_id: Uuid,
    /// Running sum of event weights.
    pub score: i64,
    /// Row creation time. Ranking uses this as the stable tie-break.
    pub created_at: DateTime<Utc>,
}
