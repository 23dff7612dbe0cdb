//! Generic resource framework for the store session.
//!
//! This module provides the building blocks for owning a collection of records
//! behind a single sequential task and talking to it through a typed client.
//!
//! # Main Components
//!
//! - [`Entity`] - Trait that resource types implement to be managed by a store
//! - [`ResourceStore`] - Insertion-ordered collection with store-assigned ids
//! - [`ResourceActor`] - Task that owns a store and processes requests one at a time
//! - [`ResourceClient`] - Typed handle used to send requests to the actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test screens without spawning a real actor.

pub mod core;
pub mod mock;
pub mod store;

// Re-export core types for convenience
pub use self::core::*;
pub use store::ResourceStore;
