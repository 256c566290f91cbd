//! Freshcart Store — PostgreSQL implementations of the repository traits.

pub mod pg_event_repository;
pub mod pg_product_repository;
pub mod pg_score_repository;
pub mod schema;
