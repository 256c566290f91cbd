//! Database schema for the Freshcart backend.
//!
//! The authoritative copies live in the workspace `migrations/` directory;
//! these constants mirror them for embedded/ad-hoc provisioning.

/// SQL to create the products table.
pub const CREATE_PRODUCTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS products (
    id          UUID PRIMARY KEY,
    title       TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    price       DOUBLE PRECISION NOT NULL,
    category    TEXT NOT NULL DEFAULT '',
    photos      TEXT[] NOT NULL DEFAULT '{}',
    quantity    INTEGER NOT NULL DEFAULT 0,
    status      VARCHAR(16) NOT NULL DEFAULT 'active',
    created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

/// SQL to create the per-product aggregate score table.
pub const CREATE_PRODUCT_SCORES_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS product_scores (
    product_id UUID PRIMARY KEY,
    score      BIGINT NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

/// SQL to create the interaction events table.
pub const CREATE_EVENTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS events (
    event_id   UUID PRIMARY KEY,
    user_id    TEXT NOT NULL,
    product_id UUID NOT NULL,
    event_type VARCHAR(32) NOT NULL,
    weight     BIGINT NOT NULL,
    occurred_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    context    JSONB,
    session_id TEXT,
    rating     SMALLINT
);

CREATE INDEX IF NOT EXISTS idx_events_reversal_lookup
    ON events (user_id, product_id, event_type, occurred_at DESC);

CREATE INDEX IF NOT EXISTS idx_events_product_id
    ON events (product_id);
";
