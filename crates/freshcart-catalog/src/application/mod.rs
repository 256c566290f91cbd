//! Application services for the product catalog.

pub mod command_handlers;
pub mod query_handlers;
