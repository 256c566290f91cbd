//! Freshcart Catalog — the product collaborator.
//!
//! Plain CRUD over catalog products. Creation and deletion invoke the
//! engagement pipeline's lifecycle hooks so that every product carries a
//! score row and deleted products leave no pipeline records behind.

pub mod application;
pub mod domain;
pub mod repository;
