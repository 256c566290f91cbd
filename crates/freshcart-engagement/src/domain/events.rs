//! Interaction events and their weights.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The closed enumeration of recognized interaction categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A product detail view.
    View,
    /// A search that surfaced the product.
    Search,
    /// The product was added to the cart.
    AddToCart,
    /// The product was favourited.
    Favourite,
    /// The product was purchased.
    Purchase,
}

impl EventKind {
    /// All recognized kinds, in weight order.
    pub const ALL: [Self; 5] = [
        Self::View,
        Self::Search,
        Self::AddToCart,
        Self::Favourite,
        Self::Purchase,
    ];

    /// Parses the wire representation of an event kind.
    ///
    /// Returns `None` for any string outside the closed enumeration —
    /// callers treat this as a validation failure, not a system error.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "view" => Some(Self::View),
            "search" => Some(Self::Search),
            "add_to_cart" => Some(Self::AddToCart),
            "favourite" => Some(Self::Favourite),
            "purchase" => Some(Self::Purchase),
            _ => None,
        }
    }

    /// Returns the wire representation of this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Search => "search",
            Self::AddToCart => "add_to_cart",
            Self::Favourite => "favourite",
            Self::Purchase => "purchase",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable mapping from event kind to its positive integer weight.
///
/// Constructed once and injected into the ingestion service; never mutated
/// at runtime. Alternate tables are constructible for tests via
/// [`WeightTable::with_weight`].
#[derive(Debug, Clone)]
pub struct WeightTable {
    weights: BTreeMap<EventKind, i64>,
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            weights: BTreeMap::from([
                (EventKind::View, 1),
                (EventKind::Search, 2),
                (EventKind::AddToCart, 3),
                (EventKind::Favourite, 5),
                (EventKind::Purchase, 7),
            ]),
        }
    }
}

impl WeightTable {
    /// A table with no entries. Useful as a base for custom test tables.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            weights: BTreeMap::new(),
        }
    }

    /// Returns a copy of this table with `kind` mapped to `weight`.
    #[must_use]
    pub fn with_weight(mut self, kind: EventKind, weight: i64) -> Self {
        self.weights.insert(kind, weight);
        self
    }

    /// Looks up the weight for `kind`.
    ///
    /// `None` means the kind carries no weight in this table and must be
    /// treated as a validation failure by callers.
    #[must_use]
    pub fn weight_of(&self, kind: EventKind) -> Option<i64> {
        self.weights.get(&kind).copied()
    }
}

/// Device class reported by the storefront client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    /// A phone-sized client.
    Mobile,
    /// A desktop browser.
    Desktop,
    /// A tablet-sized client.
    Tablet,
}

/// Coarse time-of-day bucket reported by the storefront client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    /// Morning hours.
    Morning,
    /// Afternoon hours.
    Afternoon,
    /// Evening hours.
    Evening,
    /// Night hours.
    Night,
}

/// Optional client-supplied metadata attached to an event.
///
/// Carried for analytics only — the scoring algorithm never reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventContext {
    /// Device class the interaction originated from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<DeviceClass>,
    /// Free-form geolocation string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Coarse time-of-day bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<TimeOfDay>,
}

/// One recorded user interaction.
///
/// Created exactly once per tracked action, deleted exactly once on
/// reversal (or in bulk when its product is deleted), never updated in
/// place. The weight is copied from the [`WeightTable`] at creation time
/// and is not recomputed later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionEvent {
    /// Unique event identifier.
    pub event_id: Uuid,
    /// Opaque identifier of the acting user.
    pub user_id: String,
    /// The subject product.
    pub product_id: Uuid,
    /// Interaction category.
    pub kind: EventKind,
    /// Weight copied from the table at creation time.
    pub weight: i64,
    /// Creation time, set at write.
    pub occurred_at: DateTime<Utc>,
    /// Optional analytics metadata.
    pub context: Option<EventContext>,
    /// Optional storefront session identifier.
    pub session_id: Option<String>,
    /// Optional 1–5 rating. Reserved; never read by scoring.
    pub rating: Option<i16>,
}
