//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden (`with_target(false)`); the structured fields
//! (`id`, `size`, `order_id`) carry the context instead.
//!
//! ## What Gets Traced
//!
//! - **Store session**: start and shutdown, with the number of rows held
//! - **Mutations**: `Created`, `Updated`, `Deleted` at `info`
//! - **No-ops**: update or delete of an unknown id at `debug`
//! - **Form**: open/close and rejected submissions (with the field errors) at `debug`
//! - **Toasts**: every success notification at `info`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Mutations and toasts only
//! RUST_LOG=info cargo run
//!
//! # Full payloads and form transitions
//! RUST_LOG=debug cargo run
//!
//! # Store only
//! RUST_LOG=order_desk::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a save from the "new" form looks like:
//!
//! ```text
//! INFO Created id=4 size=4
//! INFO save:create_order: Order created order_id=4
//! INFO save: Toast title="Success!" description="Order saved successfully!" duration_ms=3000
//! ```

/// Installs the global subscriber. Call once, at program start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
