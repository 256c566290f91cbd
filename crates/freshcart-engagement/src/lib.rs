//! Freshcart Engagement — the behavioral-event pipeline.
//!
//! Records user interactions (view, search, add-to-cart, favourite,
//! purchase) with fixed weights and maintains one running popularity score
//! per product, so that products can be ranked by aggregate popularity for
//! anonymous recommendations.

pub mod application;
pub mod domain;
pub mod repository;
