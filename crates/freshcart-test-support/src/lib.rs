//! Shared test mocks and utilities for the Freshcart backend.

mod catalog;
mod clock;
mod engagement;

pub use catalog::{FailingProductRepository, InMemoryProductRepository};
pub use clock::{FixedClock, fixed_instant};
pub use engagement::{
    FailingEventRepository, FailingScoreRepository, InMemoryEventRepository,
    InMemoryScoreRepository, StaticProductSource,
};
