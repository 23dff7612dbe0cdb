//! Pure data structures (DTOs) implementing the [`Entity`](crate::framework::Entity) trait.

pub mod order;

pub use order::*;
