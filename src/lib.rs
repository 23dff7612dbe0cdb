//! # Order Desk
//!
//! > **The behavioral core of a single-page order screen.**
//!
//! A table of orders (product, price, quantity) with create, edit and delete through a
//! modal form, client-side validation and a success toast. There is no backend: the
//! rows live in memory for as long as the screen is mounted.
//!
//! ## 🏗️ Design
//!
//! Two collaborators do all the work and know nothing about each other:
//! - **The store** ([`framework::ResourceStore`]) owns the rows, assigns ids and keeps
//!   insertion order.
//! - **The validator** ([`order_form::validate`]) turns three raw strings into a typed
//!   [`OrderDraft`](model::OrderDraft) or a set of field errors.
//!
//! The [`OrderScreen`](lifecycle::OrderScreen) wires them together with the form state
//! and the [`Notifier`](notifier::Notifier).
//!
//! ### Single owner, one event at a time
//! The store lives inside a [`ResourceActor`](framework::ResourceActor) task spawned when
//! the screen mounts. Requests are processed sequentially, so there is never more than
//! one mutation in flight and no locks are involved. Unmounting drops the client and
//! the task ends.
//!
//! ### Permissive update and delete
//! Updating or deleting an id that is not in the table is a no-op, reported as `None`
//! rather than as an error.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: The generic store, the actor that owns it, and the client that talks to it.
//! - **Key items**: [`Entity`](framework::Entity), [`ResourceStore`](framework::ResourceStore),
//!   [`ResourceActor`](framework::ResourceActor), [`mock::MockClient`](framework::mock::MockClient).
//!
//! ### 2. The Data ([`model`], [`order_actor`])
//! - **Role**: [`Order`](model::Order) and [`OrderDraft`](model::OrderDraft), and the
//!   `Entity` implementation that lets the store manage orders.
//!
//! ### 3. The Interface ([`clients`])
//! - **Role**: [`OrderClient`](clients::OrderClient) hides the message passing and maps
//!   framework failures to [`OrderError`](order_actor::OrderError).
//!
//! ### 4. The Form ([`order_form`])
//! - **Role**: Validation and the open/closed modal state machine.
//!
//! ### 5. The Screen ([`lifecycle`], [`notifier`])
//! - **Role**: Mount/unmount, user events, configuration, tracing setup, toasts.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the scripted demo session
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod notifier;
pub mod order_actor;
pub mod order_form;
