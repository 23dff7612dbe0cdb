//! Error types for the Order actor.

use thiserror::Error;

use crate::framework::FrameworkError;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(u64),

    /// An error occurred while communicating with the store session.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),

    /// Every order id is taken; nothing was created.
    #[error("No order id left")]
    IdsExhausted,
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::IdsExhausted(_) => OrderError::IdsExhausted,
            e => OrderError::ActorCommunicationError(e.to_string()),
        }
    }
}
