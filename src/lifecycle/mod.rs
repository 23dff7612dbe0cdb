//! Screen lifecycle and ambient setup.
//!
//! This module contains the infrastructure around the order screen:
//!
//! - **Screen lifecycle**: mounting spawns the store session, unmounting shuts it down
//! - **Configuration**: channel sizing, the success toast, the initial table
//! - **Observability setup**: Initializing tracing and logging
//!
//! # Main Components
//!
//! - [`OrderScreen`] - Wires the form, the store client and the notifier together
//! - [`ScreenConfig`] - Everything a screen needs at mount time
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod config;
pub mod error;
pub mod screen;
pub mod tracing;

pub use config::*;
pub use error::*;
pub use screen::*;
pub use self::tracing::setup_tracing;
