//! HTTP routers, one per context.

pub mod events;
pub mod health;
pub mod products;
pub mod recommendations;
