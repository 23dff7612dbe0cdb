//! Error types for the order screen.

use thiserror::Error;

use crate::framework::FrameworkError;
use crate::order_actor::OrderError;
use crate::order_form::FormError;

/// Errors surfaced by [`OrderScreen`](super::OrderScreen) operations.
///
/// Validation failures are not in here: a rejected save is an ordinary
/// [`SaveOutcome::Invalid`](super::SaveOutcome::Invalid).
#[derive(Debug, Error)]
pub enum ScreenError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Framework(#[from] FrameworkError),

    #[error(transparent)]
    Form(#[from] FormError),

    /// The store task panicked or was cancelled.
    #[error("Store task failed: {0}")]
    TaskFailed(String),
}
