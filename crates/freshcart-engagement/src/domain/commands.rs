//! Commands for the engagement pipeline.

use uuid::Uuid;

use super::events::EventContext;

/// Command to record one user interaction.
///
/// `event_type` carries the raw wire string; the ingestion service parses
/// it so that unrecognized kinds surface as a domain validation failure
/// rather than a transport error.
#[derive(Debug, Clone)]
pub struct TrackEvent {
    /// Opaque identifier of the acting user.
    pub user_id: String,
    /// The subject product.
    pub product_id: Uuid,
    /// Raw event kind string from the wire.
    pub event_type: String,
    /// Optional analytics metadata.
    pub context: Option<EventContext>,
    /// Optional storefront session identifier.
    pub session_id: Option<String>,
    /// Optional 1–5 rating.
    pub rating: Option<i16>,
}

/// Command to undo one previously recorded interaction.
///
/// Identifies the event by the (`user_id`, `product_id`, `event_type`)
/// triple; the most recently recorded match is removed.
#[derive(Debug, Clone)]
pub struct RemoveEvent {
    /// Opaque identifier of the acting user.
    pub user_id: String,
    /// The subject product.
    pub product_id: Uuid,
    /// Raw event kind string from the wire.
    pub event_type: String,
}
